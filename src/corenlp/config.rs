//! CoreNLP server connection configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CoreNlpError;

/// Configuration for the CoreNLP server client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreNlpConfig {
    /// Server base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (coreference on a cold server is slow)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Basic auth user, for servers started with -username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Basic auth password, for servers started with -password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Extra pipeline properties (e.g. `"coref.algorithm" = "statistical"`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

fn default_endpoint() -> String {
    "http://localhost:9000".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    format!("corenlp-demo/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for CoreNlpConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl CoreNlpConfig {
    /// Base default without env overrides.
    pub fn base_default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            username: None,
            password: None,
            properties: BTreeMap::new(),
        }
    }

    /// Check if the config equals the default (for skip_serializing_if).
    pub fn is_default(&self) -> bool {
        *self == Self::base_default()
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `CORENLP_ENDPOINT`: server base URL
    /// - `CORENLP_TIMEOUT`: request timeout in seconds
    /// - `CORENLP_USER_AGENT`: user agent string
    /// - `CORENLP_USERNAME` / `CORENLP_PASSWORD`: basic auth credentials
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("CORENLP_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("CORENLP_TIMEOUT") {
            if let Ok(n) = val.parse() {
                self.timeout_secs = n;
            }
        }
        if let Ok(val) = std::env::var("CORENLP_USER_AGENT") {
            self.user_agent = val;
        }
        if let Ok(val) = std::env::var("CORENLP_USERNAME") {
            self.username = Some(val);
        }
        if let Ok(val) = std::env::var("CORENLP_PASSWORD") {
            self.password = Some(val);
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    /// Validate the endpoint and return it without a trailing slash.
    pub fn base_url(&self) -> Result<String, CoreNlpError> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| CoreNlpError::Config(format!("endpoint '{}': {}", self.endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(CoreNlpError::Config(format!(
                    "endpoint '{}': unsupported scheme '{}'",
                    self.endpoint, other
                )))
            }
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    /// Copy with credentials masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.password.is_some() {
            config.password = Some("********".to_string());
        }
        config
    }
}
