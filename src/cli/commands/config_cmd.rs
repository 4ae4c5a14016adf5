//! Show the effective configuration.

use anyhow::Context;
use console::style;

use crate::config::Config;

pub fn cmd_config_show(config: &Config, endpoint: Option<&str>) -> anyhow::Result<()> {
    let mut shown = config.clone();
    if let Some(endpoint) = endpoint {
        shown.corenlp = shown.corenlp.with_endpoint(endpoint);
    }

    match &shown.source_path {
        Some(path) => println!("{} {}", style("# Loaded from").dim(), path.display()),
        None => println!("{}", style("# No config file found, using defaults").dim()),
    }
    print!("{}", shown.to_toml().context("Failed to render config")?);
    Ok(())
}
