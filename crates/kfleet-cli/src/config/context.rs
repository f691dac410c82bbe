use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{config_file_error, default_file_path, read_toml, ConfigError};

pub const CONTEXTS_PATH_ENV: &str = "KFLEET_CONTEXTS";
const CONTEXTS_FILE_NAME: &str = "contexts";

/// Named service contexts, one of which is current
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceContext {
    #[serde(default)]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: BTreeMap<String, ServiceConfig>,
}

/// Services selected within one context
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub kafka_id: Option<String>,
}

pub struct ContextFile {
    path: PathBuf,
    context: ServiceContext,
}

impl ContextFile {
    /// load from `KFLEET_CONTEXTS` or `~/.kfleet/contexts`
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = default_file_path(CONTEXTS_PATH_ENV, CONTEXTS_FILE_NAME)
            .map_err(|e| config_file_error("default path", e))?;
        Self::load(path)
    }

    /// a missing file is an empty context
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_owned();
        let context = read_toml(&path)?.unwrap_or_default();
        Ok(Self { path, context })
    }

    /// The current context, `None` when none is set.
    /// A current name with no matching entry is an error.
    pub fn current(&self) -> Result<Option<&ServiceConfig>, ConfigError> {
        let Some(name) = self
            .context
            .current_context
            .as_deref()
            .filter(|name| !name.is_empty())
        else {
            debug!("no current context");
            return Ok(None);
        };

        self.context
            .contexts
            .get(name)
            .map(Some)
            .ok_or_else(|| ConfigError::ContextNotFound {
                name: name.to_owned(),
                path: self.path.display().to_string(),
            })
    }

    /// kafka instance selected in the current context
    pub fn active_kafka_id(&self) -> Result<Option<&str>, ConfigError> {
        let kafka_id = self
            .current()?
            .and_then(|config| config.kafka_id.as_deref())
            .filter(|id| !id.is_empty());
        Ok(kafka_id)
    }
}
