//! Typed identifiers for the LinkedIn entities the endpoints take as input.
//!
//! Every kind of entity gets its own type so that a company id can't be
//! passed where a group id is expected. All of them implement [`Id`], and
//! [`EntityId`] holds any of them when the kind is only known at runtime.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use std::fmt::{self, Debug};

/// LinkedIn id parsing error
///
/// See also [`Id`](crate::idtypes::Id) for details.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Error)]
pub enum IdError {
    /// The id is empty.
    Empty,
    /// The id contains characters other than ASCII letters, digits, `-` and
    /// `_`, which would break the URL it is interpolated into.
    InvalidCharacters,
}

/// The main interface for an ID.
///
/// See the [module level documentation] for more information.
///
/// [module level documentation]: [`crate::idtypes`]
#[enum_dispatch]
pub trait Id {
    /// Returns the inner LinkedIn object ID, which is guaranteed to be valid
    /// for its type.
    fn id(&self) -> &str;
}

fn validate(id: &str) -> Result<(), IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(IdError::InvalidCharacters)
    }
}

macro_rules! define_idtypes {
    ($($(#[$attr:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(try_from = "String", into = "String")]
            pub struct $name(String);

            impl $name {
                /// Parses the id, making sure it can be safely used in a URL.
                pub fn from_id(id: impl Into<String>) -> Result<Self, IdError> {
                    let id = id.into();
                    validate(&id)?;
                    Ok(Self(id))
                }
            }

            impl Id for $name {
                fn id(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl TryFrom<String> for $name {
                type Error = IdError;

                fn try_from(id: String) -> Result<Self, Self::Error> {
                    Self::from_id(id)
                }
            }

            impl From<$name> for String {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )+
    };
}

define_idtypes!(
    /// Id of a member profile.
    ProfileId,
    /// Id of a company page.
    CompanyId,
    /// Id of a job posting.
    JobId,
    /// Id of a group.
    GroupId,
    /// Id of a post inside a group.
    PostId,
);

/// Any of the id types, for places where the entity kind comes from the data
/// (e.g. the target of a follow update).
#[enum_dispatch(Id)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    ProfileId,
    CompanyId,
    JobId,
    GroupId,
    PostId,
}
