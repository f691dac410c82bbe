pub use http;
pub use http::StatusCode;
pub use http::{Request, Response};

use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use ureq::{Agent, AgentBuilder, OrAnyStatus, Proxy};

use crate::error::{ApiError, Result};
use crate::models::ErrorBody;

/// Build a `ureq::Agent` with the request timeout and, if one is defined in
/// the environment, a proxy.
pub fn configure_agent(timeout: Duration) -> Result<Agent> {
    let agent_builder = AgentBuilder::new().timeout(timeout);

    let proxy_vars = [
        ("ALL_PROXY", "all_proxy", "ALL"),
        ("HTTPS_PROXY", "https_proxy", "HTTPS"),
        ("HTTP_PROXY", "http_proxy", "HTTP"),
    ];

    for &(upper_var, lower_var, proxy_type) in &proxy_vars {
        if let Ok(proxy_str) = env::var(upper_var).or_else(|_| env::var(lower_var)) {
            let proxy = Proxy::new(&proxy_str).map_err(|e| {
                ApiError::Transport(format!("Failed to create {proxy_type} proxy: {e}"))
            })?;
            debug!(proxy_type, "using proxy from environment");
            return Ok(agent_builder.proxy(proxy).build());
        }
    }

    Ok(agent_builder.build())
}

/// Execute `request` on `agent`. Any status code is returned as a response;
/// only transport failures are errors.
#[instrument(
    skip(agent, request),
    fields(uri = %request.uri())
)]
pub async fn send<T>(agent: &Agent, request: Request<T>) -> Result<Response<Vec<u8>>>
where
    T: Into<Vec<u8>> + std::fmt::Debug,
{
    let (parts, body) = request.into_parts();
    let mut ureq_request = agent.request(parts.method.as_ref(), &parts.uri.to_string());
    for (name, value) in parts.headers.iter() {
        let value = value
            .to_str()
            .map_err(|e| ApiError::Transport(format!("invalid header {name}: {e}")))?;
        ureq_request = ureq_request.set(name.as_ref(), value);
    }

    let body: Vec<u8> = body.into();
    let result = if body.is_empty() {
        ureq_request.call()
    } else {
        ureq_request.send_bytes(&body)
    };
    let response = result
        .or_any_status()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let response: Response<Vec<u8>> = response.into();
    debug!(status = %response.status(), "http response");
    Ok(response)
}

/// Turn a non-success response into an [`ApiError`], using the API's
/// `reason` when the body is an error document.
pub fn error_for_status(status: StatusCode, body: &[u8]) -> ApiError {
    let reason = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            reason: Some(reason),
        }) => reason,
        _ => status.canonical_reason().unwrap_or("unknown error").to_owned(),
    };
    ApiError::from_status(status, reason)
}

pub trait ResponseExt {
    fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned;

    /// Ok(self) for 2xx, otherwise the classified error
    fn error_for_status(self) -> Result<Self>
    where
        Self: Sized;
}

impl ResponseExt for Response<Vec<u8>> {
    fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = serde_json::from_slice(self.body())?;
        Ok(result)
    }

    fn error_for_status(self) -> Result<Self> {
        if self.status().is_success() {
            Ok(self)
        } else {
            Err(error_for_status(self.status(), self.body()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_uses_api_reason() {
        let body = br#"{"kind":"Error","code":"KAFKAS-MGMT-15","reason":"token is expired"}"#;
        match error_for_status(StatusCode::UNAUTHORIZED, body) {
            ApiError::Unauthorized(reason) => assert_eq!(reason, "token is expired"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_forbidden() {
        assert!(matches!(
            error_for_status(StatusCode::FORBIDDEN, b"{}"),
            ApiError::Forbidden(_)
        ));
    }

    #[test]
    fn test_non_json_body_falls_back_to_canonical_reason() {
        match error_for_status(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>") {
            ApiError::Status { status, reason } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(reason, "Bad Gateway");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_response_ext() {
        let ok = Response::builder()
            .status(StatusCode::OK)
            .body(br#"{"id":"c1","name":"prod"}"#.to_vec())
            .expect("response");
        let cluster: crate::Cluster = ok.error_for_status().expect("ok").json().expect("json");
        assert_eq!(cluster.name, "prod");

        let failed = Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(br#"{"reason":"database unavailable"}"#.to_vec())
            .expect("response");
        let err = failed.error_for_status().expect_err("server error");
        assert_eq!(
            err.to_string(),
            "api request failed with 500 Internal Server Error: database unavailable"
        );
    }
}
