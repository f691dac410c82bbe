//!
//! # Cluster lookup
//!
//! Resolves the clusters referenced by a page of kafka instances with at
//! most one request, however many instances share a cluster.
//!

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use kfleet_mgmt_api::defaults::DEFAULT_PAGE_NUMBER;
use kfleet_mgmt_api::{Cluster, KafkaRequest, ListParams, ManagementApi, Result};

/// Clusters keyed by id
#[derive(Debug, Default, Clone)]
pub struct ClusterIndex(HashMap<String, Cluster>);

impl ClusterIndex {
    pub fn get(&self, id: &str) -> Option<&Cluster> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Cluster> for ClusterIndex {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|cluster| (cluster.id.clone(), cluster))
                .collect(),
        )
    }
}

/// distinct cluster ids, sorted, hosted instances skipped
pub fn referenced_cluster_ids(kafkas: &[KafkaRequest]) -> BTreeSet<&str> {
    kafkas
        .iter()
        .filter_map(|kafka| kafka.cluster_id.as_deref())
        .collect()
}

/// `id = 'a' or id = 'b' ...`
pub fn cluster_search_query(ids: &BTreeSet<&str>) -> String {
    ids.iter()
        .map(|id| format!("id = '{id}'"))
        .collect::<Vec<_>>()
        .join(" or ")
}

pub async fn resolve_clusters<A>(api: &A, kafkas: &[KafkaRequest]) -> Result<ClusterIndex>
where
    A: ManagementApi + ?Sized,
{
    let ids = referenced_cluster_ids(kafkas);
    if ids.is_empty() {
        debug!("no instance runs on a dedicated cluster, skipping cluster lookup");
        return Ok(ClusterIndex::default());
    }

    let size = u32::try_from(ids.len()).unwrap_or(u32::MAX);
    let params = ListParams::new(DEFAULT_PAGE_NUMBER, size).with_search(cluster_search_query(&ids));
    debug!(clusters = ids.len(), "looking up clusters");

    let clusters = api.list_clusters(&params).await?;
    let index: ClusterIndex = clusters.items.into_iter().collect();
    debug!(resolved = index.len(), "clusters resolved");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{cluster, kafka, FakeApi};
    use super::*;

    #[test]
    fn test_ids_are_deduplicated() {
        let kafkas = vec![
            kafka("k1", "a", Some("c2")),
            kafka("k2", "b", Some("c1")),
            kafka("k3", "c", None),
            kafka("k4", "d", Some("c2")),
        ];

        let ids = referenced_cluster_ids(&kafkas);

        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["c1", "c2"]);
    }

    #[test]
    fn test_search_query() {
        let ids: BTreeSet<&str> = ["y", "x"].into_iter().collect();
        assert_eq!(cluster_search_query(&ids), "id = 'x' or id = 'y'");

        let single: BTreeSet<&str> = ["x"].into_iter().collect();
        assert_eq!(cluster_search_query(&single), "id = 'x'");
    }

    #[fluvio_future::test]
    async fn test_no_cluster_references_skip_lookup() {
        let api = FakeApi::new(vec![], vec![cluster("c1", "prod")]);
        let kafkas = vec![kafka("k1", "a", None), kafka("k2", "b", None)];

        let index = resolve_clusters(&api, &kafkas).await.expect("resolve");

        assert!(index.is_empty());
        assert!(api.cluster_calls().is_empty());
    }

    #[fluvio_future::test]
    async fn test_single_lookup_for_shared_clusters() {
        let api = FakeApi::new(
            vec![],
            vec![cluster("c1", "prod"), cluster("c2", "stage"), cluster("c3", "dev")],
        );
        let kafkas = vec![
            kafka("k1", "a", Some("c1")),
            kafka("k2", "b", Some("c2")),
            kafka("k3", "c", Some("c1")),
            kafka("k4", "d", Some("c1")),
        ];

        let index = resolve_clusters(&api, &kafkas).await.expect("resolve");

        let calls = api.cluster_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 1);
        assert_eq!(calls[0].size, 2);
        assert_eq!(calls[0].search.as_deref(), Some("id = 'c1' or id = 'c2'"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("c1").map(|c| c.name.as_str()), Some("prod"));
        assert_eq!(index.get("c2").map(|c| c.name.as_str()), Some("stage"));
        assert!(index.get("c3").is_none());
    }

    #[fluvio_future::test]
    async fn test_missing_cluster_leaves_gap() {
        let api = FakeApi::new(vec![], vec![cluster("c1", "prod")]);
        let kafkas = vec![kafka("k1", "a", Some("c1")), kafka("k2", "b", Some("gone"))];

        let index = resolve_clusters(&api, &kafkas).await.expect("resolve");

        assert_eq!(index.len(), 1);
        assert!(index.get("gone").is_none());
    }

    #[fluvio_future::test]
    async fn test_lookup_error_is_unchanged() {
        let api = FakeApi::failing_clusters(vec![kafka("k1", "a", Some("c1"))]);
        let kafkas = vec![kafka("k1", "a", Some("c1"))];

        let err = resolve_clusters(&api, &kafkas).await.expect_err("fails");

        assert!(matches!(err, kfleet_mgmt_api::ApiError::Forbidden(_)));
    }
}
