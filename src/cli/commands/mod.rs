//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod check;
mod config_cmd;
pub mod demo;
mod run;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Config;

use super::helpers::{build_client, read_input};

use run::Task;

#[derive(Parser)]
#[command(name = "corenlp-demo")]
#[command(about = "Console tour of a Stanford CoreNLP annotation pipeline")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CoreNLP server URL (overrides config and CORENLP_ENDPOINT)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Run every operation over the built-in example paragraphs (default)
    Demo,

    /// Run one operation over your own text
    Run {
        /// Operation to run
        #[arg(value_enum)]
        task: Task,
        /// Text to annotate (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,
        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Comma-separated annotator list for the 'annotate' task
        #[arg(short, long)]
        annotators: Option<String>,
    },

    /// Check that the CoreNLP server is up
    Check,

    /// Show the effective configuration
    Config,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    let endpoint = cli.endpoint.as_deref();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let client = build_client(&config, endpoint)?;
            demo::cmd_demo(&client).await
        }
        Commands::Run {
            task,
            text,
            file,
            annotators,
        } => {
            let client = build_client(&config, endpoint)?;
            let text = read_input(text, file.as_deref())?;
            run::cmd_run(&client, task, &text, annotators.as_deref()).await
        }
        Commands::Check => {
            let client = build_client(&config, endpoint)?;
            check::cmd_check(&client).await
        }
        Commands::Config => config_cmd::cmd_config_show(&config, endpoint),
    }
}
