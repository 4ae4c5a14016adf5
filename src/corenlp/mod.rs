//! Client for the Stanford CoreNLP annotation server.
//!
//! The server does all linguistic work. This module names the pipeline
//! stages, submits text, and exposes the returned annotation graph as
//! typed Rust values.

mod annotation;
mod annotator;
mod client;
mod config;
mod coref;
mod error;
mod properties;
mod tree;

pub use annotation::{Annotation, Sentence, Token};
pub use annotator::{Annotator, AnnotatorError, Annotators};
pub use client::{CoreNlpClient, Pipeline};
pub use config::CoreNlpConfig;
pub use coref::{CorefChain, CorefMention};
pub use error::CoreNlpError;
pub use properties::Properties;
pub use tree::{ParseTree, TreeError};
