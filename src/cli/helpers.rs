//! Shared helper functions for CLI commands.

use std::future::Future;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::corenlp::CoreNlpClient;

/// Build a client from config, with the `--endpoint` flag taking precedence.
pub fn build_client(config: &Config, endpoint: Option<&str>) -> anyhow::Result<CoreNlpClient> {
    let mut corenlp = config.corenlp.clone();
    if let Some(endpoint) = endpoint {
        corenlp = corenlp.with_endpoint(endpoint);
    }
    CoreNlpClient::new(corenlp).context("Failed to set up CoreNLP client")
}

/// Await `fut` behind a stderr spinner (hidden when stderr is not a terminal).
pub async fn with_spinner<T, F>(message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let out = fut.await;
    pb.finish_and_clear();
    out
}

/// Input text from the positional argument, a file (`~` expanded), or stdin.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => anyhow::bail!("Pass either TEXT or --file, not both"),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            std::fs::read_to_string(&expanded)
                .with_context(|| format!("Failed to read input file '{}'", expanded))
        }
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_input_prefers_argument() {
        let text = read_input(Some("Pierre Vinken".to_string()), None).unwrap();
        assert_eq!(text, "Pierre Vinken");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Mr. Vinken is chairman.").unwrap();
        assert_eq!(
            read_input(None, Some(&path)).unwrap(),
            "Mr. Vinken is chairman."
        );
    }

    #[test]
    fn test_read_input_rejects_both_sources() {
        let path = PathBuf::from("input.txt");
        assert!(read_input(Some("x".to_string()), Some(&path)).is_err());
    }

    #[test]
    fn test_build_client_endpoint_override() {
        let config = Config::default();
        let client = build_client(&config, Some("http://nlp.example:9000/")).unwrap();
        assert_eq!(client.base_url(), "http://nlp.example:9000");
    }
}
