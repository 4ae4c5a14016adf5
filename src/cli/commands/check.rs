//! Server readiness check.

use console::style;

use crate::corenlp::CoreNlpClient;

/// Report whether the CoreNLP server accepts work.
pub async fn cmd_check(client: &CoreNlpClient) -> anyhow::Result<()> {
    if client.is_ready().await {
        println!(
            "{} CoreNLP server ready at {}",
            style("✓").green(),
            client.base_url()
        );
        Ok(())
    } else {
        println!(
            "{} CoreNLP server not reachable at {}",
            style("✗").red(),
            client.base_url()
        );
        println!(
            "  Start one with: java -mx4g edu.stanford.nlp.pipeline.StanfordCoreNLPServer -port 9000"
        );
        anyhow::bail!("CoreNLP server is not ready")
    }
}
