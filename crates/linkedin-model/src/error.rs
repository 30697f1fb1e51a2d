use crate::IdError;

use thiserror::Error;

/// Errors raised while building model objects.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid id: {0}")]
    Id(#[from] IdError),

    #[error("invalid network update: {0}")]
    Update(#[from] UpdateDecodeError),
}

/// Why a single network update item was rejected. Only the envelope can be
/// rejected; a malformed content field degrades to partially filled data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateDecodeError {
    #[error("update item is not a JSON object")]
    NotAnObject,

    #[error("update item has no `updateKey`")]
    MissingUpdateKey,

    #[error("update item has a `updateKey` that is not a string")]
    InvalidUpdateKey,
}
