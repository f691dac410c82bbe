use http::StatusCode;

pub type Result<T, E = ApiError> = core::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("no access token available, set KFLEET_ACCESS_TOKEN or access_token in the config file")]
    MissingToken,
    #[error("invalid api url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request format error: {0}")]
    Request(#[from] http::Error),
    #[error("http transport error: {0}")]
    Transport(String),
    #[error("not authorized, your access token may have expired: {0}")]
    Unauthorized(String),
    #[error("access denied: {0}")]
    Forbidden(String),
    #[error("api request failed with {status}: {reason}")]
    Status { status: StatusCode, reason: String },
    #[error("unable to decode api response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// classify a non-success response
    pub fn from_status(status: StatusCode, reason: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(reason),
            StatusCode::FORBIDDEN => Self::Forbidden(reason),
            status => Self::Status { status, reason },
        }
    }
}
