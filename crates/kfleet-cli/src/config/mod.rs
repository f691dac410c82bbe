//!
//! # CLI configuration
//!
//! Connection settings (`~/.kfleet/config`) and the persisted service
//! context (`~/.kfleet/contexts`), both TOML.
//!
mod context;

use std::env;
use std::fs::read_to_string;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dirs::home_dir;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use kfleet_mgmt_api::defaults::{CLI_CONFIG_PATH, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

pub use context::ContextFile;

pub const CONFIG_PATH_ENV: &str = "KFLEET_CONFIG";
const CONFIG_FILE_NAME: &str = "config";

fn config_file_error(msg: &str, source: IoError) -> ConfigError {
    ConfigError::ConfigFileError {
        msg: msg.to_owned(),
        source,
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file {msg}")]
    ConfigFileError { msg: String, source: IoError },
    #[error("Failed to deserialize {msg}")]
    TomlError {
        msg: String,
        source: toml::de::Error,
    },
    #[error("Current context \"{name}\" not found in {path}")]
    ContextNotFound { name: String, path: String },
}

/// How to reach the management APIs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub api_url: String,
    /// defaults to `api_url`
    pub cluster_mgmt_api_url: Option<String>,
    pub access_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            cluster_mgmt_api_url: None,
            access_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ConnectionConfig {
    /// load from `KFLEET_CONFIG` or `~/.kfleet/config`
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_file_path(CONFIG_PATH_ENV, CONFIG_FILE_NAME)
            .map_err(|e| config_file_error("default path", e))?;
        Self::load_from(path)
    }

    /// a missing file yields the defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(read_toml(path.as_ref())?.unwrap_or_default())
    }

    pub fn cluster_mgmt_api_url(&self) -> &str {
        self.cluster_mgmt_api_url.as_deref().unwrap_or(&self.api_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Read and parse a TOML file, `None` if it does not exist
pub(crate) fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    debug!(?path, "loading from");
    let file_str = match read_to_string(path) {
        Ok(file_str) => file_str,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(?path, "not found, using defaults");
            return Ok(None);
        }
        Err(err) => return Err(config_file_error(&format!("{:?}", path.as_os_str()), err)),
    };
    let value = toml::from_str(&file_str).map_err(|e| ConfigError::TomlError {
        msg: path.display().to_string(),
        source: e,
    })?;
    Ok(Some(value))
}

/// find default path where a file is stored.  precedent is:
/// 1) environment variable `env_var`
/// 2) home directory ~/.kfleet/`file_name`
pub(crate) fn default_file_path(env_var: &str, file_name: &str) -> Result<PathBuf, IoError> {
    env::var(env_var)
        .map(|p| Ok(PathBuf::from(p)))
        .unwrap_or_else(|_| {
            if let Some(mut path) = home_dir() {
                path.push(CLI_CONFIG_PATH);
                path.push(file_name);
                Ok(path)
            } else {
                Err(IoError::new(
                    ErrorKind::InvalidInput,
                    "can't get config directory",
                ))
            }
        })
}
