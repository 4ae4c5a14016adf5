//! corenlp-demo - a console tour of a Stanford CoreNLP annotation pipeline.
//!
//! Every linguistic computation happens inside a CoreNLP server. This crate
//! chooses the annotators for each task, submits text, reads one field back
//! per token, sentence or document, and formats the result for the console.

pub mod cli;
pub mod config;
pub mod corenlp;
pub mod report;
pub mod tasks;
