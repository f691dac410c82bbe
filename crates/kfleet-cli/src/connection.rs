//!
//! # Management API connection
//!
//! Resolve credentials and endpoints from flags, environment and config
//!

use std::env;

use tracing::debug;

use kfleet_mgmt_api::{HttpManagementApi, Result};

use crate::config::ConnectionConfig;

pub const ACCESS_TOKEN_ENV: &str = "KFLEET_ACCESS_TOKEN";

/// Values given on the command line, taking precedence over config.
/// Both only apply to the cluster api.
#[derive(Debug, Default, Clone)]
pub struct ConnectionOverrides {
    pub access_token: Option<String>,
    pub cluster_mgmt_api_url: Option<String>,
}

/// Bearer tokens for the kafka and cluster apis
#[derive(Debug, PartialEq, Eq)]
struct AccessTokens {
    kafka: Option<String>,
    cluster: Option<String>,
}

pub fn connect(
    config: &ConnectionConfig,
    overrides: ConnectionOverrides,
) -> Result<HttpManagementApi> {
    let tokens = resolve_access_tokens(
        overrides.access_token,
        env::var(ACCESS_TOKEN_ENV).ok(),
        config.access_token.clone(),
    );

    let cluster_api_url = overrides
        .cluster_mgmt_api_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| config.cluster_mgmt_api_url().to_owned());
    debug!(api_url = %config.api_url, %cluster_api_url, "connecting");

    let api = HttpManagementApi::new(
        config.api_url.as_str(),
        cluster_api_url,
        tokens.kafka.unwrap_or_default(),
        config.request_timeout(),
    )?;
    Ok(match tokens.cluster {
        Some(token) => api.with_cluster_access_token(token),
        None => api,
    })
}

/// The kafka api uses the login token: environment, then config file.
/// The cluster api uses the flag when given, otherwise the login token.
/// Empty values are skipped.
fn resolve_access_tokens(
    flag: Option<String>,
    env: Option<String>,
    config: Option<String>,
) -> AccessTokens {
    let kafka = first_token([env, config]);
    let cluster = first_token([flag, kafka.clone()]);
    AccessTokens { kafka, cluster }
}

fn first_token<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|token| !token.trim().is_empty())
}
