use super::{convert_result, BaseClient, ME};
use crate::{
    http::Query,
    model::{Connections, NetworkStatistics},
    params,
    util::build_map,
    ClientResult,
};

use maybe_async::maybe_async;

/// Operations on the authenticated member's first-degree network.
#[maybe_async]
pub trait ConnectionOperations: BaseClient {
    /// The first page of connections, as sized by the server.
    async fn get_connections(&self) -> ClientResult<Connections> {
        let url = format!("{ME}/connections");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn get_connections_page(&self, start: u32, count: u32) -> ClientResult<Connections> {
        let start = start.to_string();
        let count = count.to_string();
        let params = build_map([
            (params::START, Some(start.as_str())),
            (params::COUNT, Some(count.as_str())),
        ]);

        let url = format!("{ME}/connections");
        let result = self.api_get(&url, &params).await?;
        convert_result(&result)
    }

    async fn get_network_statistics(&self) -> ClientResult<NetworkStatistics> {
        let url = format!("{ME}/network/network-stats");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }
}
