//! This crate is only here so that the LinkedIn crates agree on a single
//! version of the libraries they share.

pub use chrono;
pub use env_logger;
pub use log;
pub use serde_json;
pub use strum;
pub use url;
