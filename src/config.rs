//! Configuration management using the prefer crate for file discovery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corenlp::CoreNlpConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {format} config '{path}': {message}")]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// CoreNLP server connection.
    #[serde(default, skip_serializing_if = "CoreNlpConfig::is_default")]
    pub corenlp: CoreNlpConfig,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path, or discover a `corenlp-demo` config file
    /// in the standard locations. No file means defaults plus env overrides.
    pub async fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path).await;
        }

        match prefer::load("corenlp-demo").await {
            Ok(found) => match found.source_path() {
                Some(path) => Self::load_from_path(path).await,
                None => Ok(Self::default()),
            },
            Err(e) => {
                tracing::debug!("No config file discovered: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::parse(path, &contents)?;
        config.source_path = Some(path.to_path_buf());
        // Values from the file are the base; environment still wins.
        config.corenlp = config.corenlp.with_env_overrides();
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |format: &'static str, message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_err("TOML", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_err("YAML", e.to_string()))
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_err("JSON", e.to_string())),
        }
    }

    /// Render the effective configuration as TOML, with secrets masked.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        #[derive(Serialize)]
        struct Shown<'a> {
            corenlp: &'a CoreNlpConfig,
        }

        let redacted = self.corenlp.redacted();
        toml::to_string_pretty(&Shown {
            corenlp: &redacted,
        })
    }
}
