use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use ureq::Agent;
use url::Url;

use crate::defaults::{CLUSTERS_PATH, KAFKAS_PATH};
use crate::error::{ApiError, Result};
use crate::htclient::{self, ResponseExt};
use crate::models::{ClusterList, KafkaRequestList};
use crate::{ListParams, ManagementApi};

/// [`ManagementApi`] over HTTPS with bearer token authentication.
/// The cluster api may be given its own token.
pub struct HttpManagementApi {
    kafka_api_url: String,
    cluster_api_url: String,
    access_token: String,
    cluster_access_token: Option<String>,
    agent: Agent,
}

impl fmt::Debug for HttpManagementApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpManagementApi")
            .field("kafka_api_url", &self.kafka_api_url)
            .field("cluster_api_url", &self.cluster_api_url)
            .finish_non_exhaustive()
    }
}

impl HttpManagementApi {
    pub fn new(
        kafka_api_url: impl Into<String>,
        cluster_api_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }

        let kafka_api_url = kafka_api_url.into();
        let cluster_api_url = cluster_api_url.into();
        // fail on a malformed base before any request is attempted
        endpoint_url(&kafka_api_url, KAFKAS_PATH, &ListParams::default())?;
        endpoint_url(&cluster_api_url, CLUSTERS_PATH, &ListParams::default())?;

        Ok(Self {
            kafka_api_url,
            cluster_api_url,
            access_token,
            cluster_access_token: None,
            agent: htclient::configure_agent(timeout)?,
        })
    }

    /// token sent to the cluster api instead of the kafka api token, empty is ignored
    pub fn with_cluster_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.trim().is_empty() {
            self.cluster_access_token = Some(token);
        }
        self
    }

    fn cluster_token(&self) -> &str {
        self.cluster_access_token
            .as_deref()
            .unwrap_or(&self.access_token)
    }

    async fn get_json<J: DeserializeOwned>(&self, url: Url, token: &str) -> Result<J> {
        let request = http::Request::get(url.as_str())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json")
            .body(Vec::new())?;

        let response = htclient::send(&self.agent, request).await?;
        response.error_for_status()?.json()
    }
}

#[async_trait]
impl ManagementApi for HttpManagementApi {
    #[instrument(skip(self))]
    async fn list_kafkas(&self, params: &ListParams) -> Result<KafkaRequestList> {
        let url = endpoint_url(&self.kafka_api_url, KAFKAS_PATH, params)?;
        let kafkas: KafkaRequestList = self.get_json(url, &self.access_token).await?;
        debug!(count = kafkas.items.len(), "kafkas fetched");
        Ok(kafkas)
    }

    #[instrument(skip(self))]
    async fn list_clusters(&self, params: &ListParams) -> Result<ClusterList> {
        let url = endpoint_url(&self.cluster_api_url, CLUSTERS_PATH, params)?;
        let clusters: ClusterList = self.get_json(url, self.cluster_token()).await?;
        debug!(count = clusters.items.len(), "clusters fetched");
        Ok(clusters)
    }
}

/// `base` + `path` with the list params as query string. Any path already on
/// `base` is kept as a prefix.
fn endpoint_url(base: &str, path: &str, params: &ListParams) -> Result<Url> {
    let raw = format!("{}{}", base.trim_end_matches('/'), path);
    let mut url = Url::parse(&raw).map_err(|source| ApiError::InvalidUrl {
        url: base.to_owned(),
        source,
    })?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &params.page.to_string());
        query.append_pair("size", &params.size.to_string());
        if let Some(search) = &params.search {
            query.append_pair("search", search);
        }
    }

    Ok(url)
}
