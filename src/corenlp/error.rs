//! CoreNLP client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreNlpError {
    /// Failed to reach the server
    #[error("Connection error: {0}")]
    Connection(String),
    /// Request did not finish within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    /// Server answered with a non-success status
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
    /// Response body was not a CoreNLP JSON document
    #[error("Parse error: {0}")]
    Parse(String),
    /// A field the task needs was absent from the annotation
    #[error("Missing annotation: {location} has no {field} (is the annotator enabled?)")]
    MissingAnnotation {
        field: &'static str,
        location: String,
    },
    /// Nothing to annotate
    #[error("Input text is empty")]
    EmptyText,
    /// Server configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CoreNlpError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            CoreNlpError::Timeout(timeout_secs)
        } else if err.is_decode() {
            CoreNlpError::Parse(err.to_string())
        } else {
            CoreNlpError::Connection(err.to_string())
        }
    }
}
