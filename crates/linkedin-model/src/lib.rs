//! All LinkedIn API endpoint response objects. Please refer to the endpoints
//! where they are used for a link to their reference in the LinkedIn API
//! documentation.
//!
//! Network updates are the odd one out: their content is polymorphic and is
//! resolved by [`UpdateContent::decode`], see the [`update`] module.

pub mod auth;
pub mod common;
pub mod company;
pub(crate) mod custom_serde;
pub mod error;
pub mod group;
pub mod idtypes;
pub mod job;
pub mod profile;
pub mod share;
pub mod update;

pub use {
    auth::*, common::*, company::*, error::*, group::*, idtypes::*, job::*, profile::*, share::*,
    update::*,
};
