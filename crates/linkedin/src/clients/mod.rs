mod base;
mod communication;
mod company;
mod connection;
mod group;
mod job;
mod network_update;
mod profile;

pub use base::BaseClient;
pub use communication::CommunicationOperations;
pub use company::CompanyOperations;
pub use connection::ConnectionOperations;
pub use group::GroupOperations;
pub use job::JobOperations;
pub use network_update::{NetworkUpdateOperations, NetworkUpdateParameters, NetworkUpdateType};
pub use profile::ProfileOperations;

use crate::ClientResult;

use serde::Deserialize;

/// Converts a JSON response from LinkedIn into its model.
pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
    libs::serde_json::from_str::<T>(input).map_err(Into::into)
}

/// Paths of the member's own resources.
pub(crate) const ME: &str = "people/~";
