//! Command-line interface.

mod commands;
mod helpers;

pub use commands::{demo, is_verbose, run};
