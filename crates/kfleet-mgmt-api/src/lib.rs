//! # Management API client
//!
//! Typed access to the two endpoints `kfleet kafka list` needs:
//! the kafka instance list and the cluster list, both paginated and
//! both accepting a server-side `search` predicate.
//!
//! [`ManagementApi`] is the seam the CLI codes against;
//! [`HttpManagementApi`] backs it with blocking ureq requests.

mod client;
mod error;

pub mod defaults;
pub mod htclient;
pub mod models;

use async_trait::async_trait;

pub use client::HttpManagementApi;
pub use error::{ApiError, Result};
pub use models::{Cluster, ClusterList, KafkaRequest, KafkaRequestList};

/// Pagination and filtering shared by every list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// 1-based page number
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
}

impl ListParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            search: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_PAGE_NUMBER, defaults::DEFAULT_PAGE_SIZE)
    }
}

#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// fetch one page of kafka instances visible to the caller
    async fn list_kafkas(&self, params: &ListParams) -> Result<KafkaRequestList>;

    /// fetch one page of clusters matching `params.search`
    async fn list_clusters(&self, params: &ListParams) -> Result<ClusterList>;
}
