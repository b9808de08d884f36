//! Configuration loading.

use camino::{Utf8Path, Utf8PathBuf};
use html_tags::{TagRegistry, DOM_ELEMENTS};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Name of the optional config file in the workspace directory.
pub const CONFIG_FILE: &str = "template-tools.json";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid config JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
}

/// Project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolsConfig {
    /// Element names known to the project in addition to the DOM schema.
    pub extra_elements: Vec<String>,

    /// Default `file` field for encoded maps whose plan has none.
    pub file: Option<String>,
}

impl ToolsConfig {
    /// Loads configuration from the workspace directory.
    ///
    /// A missing file yields the defaults; a malformed one is reported and ignored.
    pub fn load(workspace: &Utf8Path) -> Self {
        let path = workspace.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::parse(&path) {
            Ok(config) => {
                tracing::debug!(
                    %path,
                    extra_elements = config.extra_elements.len(),
                    "loaded config"
                );
                config
            }
            Err(e) => {
                tracing::warn!("{e}");
                Self::default()
            }
        }
    }

    fn parse(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Builds a tag registry from the DOM schema plus `extra_elements`.
    pub fn tag_registry(&self) -> TagRegistry {
        TagRegistry::new(
            DOM_ELEMENTS
                .iter()
                .copied()
                .chain(self.extra_elements.iter().map(String::as_str)),
        )
    }
}
