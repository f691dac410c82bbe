use tracing::debug;

use kfleet_mgmt_api::{KafkaRequestList, ListParams, ManagementApi, Result};

use super::query::build_search_query;

/// One page of kafka instances, filtered server side when `search` is set
pub async fn fetch_kafkas<A>(api: &A, page: u32, size: u32, search: &str) -> Result<KafkaRequestList>
where
    A: ManagementApi + ?Sized,
{
    let mut params = ListParams::new(page, size);
    if let Some(query) = build_search_query(search) {
        debug!(%query, "filtering kafka list");
        params = params.with_search(query);
    }

    api.list_kafkas(&params).await
}
