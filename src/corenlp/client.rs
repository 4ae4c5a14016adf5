//! HTTP client for a running CoreNLP server.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use super::{Annotation, Annotators, CoreNlpConfig, CoreNlpError, Properties};

/// Connection to a CoreNLP server.
#[derive(Debug, Clone)]
pub struct CoreNlpClient {
    config: CoreNlpConfig,
    base_url: String,
    client: Client,
}

impl CoreNlpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CoreNlpConfig) -> Result<Self, CoreNlpError> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CoreNlpError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    pub fn config(&self) -> &CoreNlpConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a fresh pipeline running `annotators`.
    pub fn pipeline(&self, annotators: Annotators) -> Pipeline<'_> {
        let properties = Properties::new(annotators).with_extra(&self.config.properties);
        Pipeline {
            client: self,
            properties,
        }
    }

    /// Check whether the server is ready to accept work.
    pub async fn is_ready(&self) -> bool {
        let url = format!("{}/ready", self.base_url);
        match self.authorized(self.client.get(&url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("Readiness probe failed: {}", e);
                false
            }
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.username {
            Some(user) => request.basic_auth(user, self.config.password.as_deref()),
            None => request,
        }
    }
}

/// One configured pipeline: a property set bound to a server connection.
#[derive(Debug)]
pub struct Pipeline<'a> {
    client: &'a CoreNlpClient,
    properties: Properties,
}

impl Pipeline<'_> {
    /// Set one more pipeline property for this request only.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties = self.properties.with_property(key, value);
        self
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Run every configured annotator over `text`.
    pub async fn annotate(&self, text: &str) -> Result<Annotation, CoreNlpError> {
        if text.trim().is_empty() {
            return Err(CoreNlpError::EmptyText);
        }

        let client = self.client;
        let timeout = client.config.timeout_secs;
        let url = format!("{}/", client.base_url);

        info!(
            "Annotating {} chars with [{}]",
            text.chars().count(),
            self.properties.annotators()
        );

        let request = client
            .client
            .post(&url)
            .query(&[("properties", self.properties.to_json())])
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text.to_string());

        let resp = client
            .authorized(request)
            .send()
            .await
            .map_err(|e| CoreNlpError::from_reqwest(e, timeout))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreNlpError::Api {
                status,
                body: body.trim().to_string(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CoreNlpError::from_reqwest(e, timeout))?;
        debug!("Received {} bytes of annotation", body.len());

        Annotation::from_json(text, &body)
    }
}
