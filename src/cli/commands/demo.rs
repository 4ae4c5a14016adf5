//! The guided tour: every operation over two fixed paragraphs.

use std::io::Write;

use anyhow::Context;

use crate::corenlp::CoreNlpClient;
use crate::report;
use crate::tasks;

use crate::cli::helpers::with_spinner;

/// Paragraph used for tokenization through parsing.
pub const VINKEN_TEXT: &str = "Pierre Vinken, 61 years old, will join the board as a nonexecutive director Nov. 29. \
Mr. Vinken is chairman of Elsevier N.V., the Dutch publishing group. \
Rudolph Agnew, 55 years old and former chairman of Consolidated Gold Fields PLC, \
was named a director of this British industrial conglomerate.";

/// Paragraph used for the coreference sections.
pub const CHEN_TEXT: &str = "Victoria Chen, Chief Financial Officer of Megabucks Banking Corp since 2004, saw her pay jump 20%, \
to $1.3 million, as the 37-year-old also became the Denver-based financial-services company 92s \
president. It has been ten years since she came to Megabucks from rival Lotsabucks.";

/// Run every operation in sequence and print each section.
pub async fn cmd_demo(client: &CoreNlpClient) -> anyhow::Result<()> {
    render(client, &mut std::io::stdout()).await
}

/// Run every operation in sequence, writing each section to `out` as soon
/// as it is ready.
pub async fn render<W: Write>(client: &CoreNlpClient, out: &mut W) -> anyhow::Result<()> {
    tracing::info!("Running demo against {}", client.base_url());

    let tokens = with_spinner("Tokenizing", tasks::tokenize(client, VINKEN_TEXT))
        .await
        .context("Tokenization failed")?;
    write!(out, "{}", report::section(&report::bracketed(&tokens)))?;

    let sentences = with_spinner(
        "Splitting sentences",
        tasks::sentence_split(client, VINKEN_TEXT),
    )
    .await
    .context("Sentence splitting failed")?;
    write!(out, "{}", report::section(&report::bracketed(&sentences)))?;

    let pos_tags = with_spinner("Tagging parts of speech", tasks::pos_tagging(client, VINKEN_TEXT))
        .await
        .context("POS tagging failed")?;
    write!(out, "{}", report::section(&report::tagged(&tokens, &pos_tags)))?;

    let lemmas = with_spinner("Lemmatizing", tasks::lemmatize(client, VINKEN_TEXT))
        .await
        .context("Lemmatization failed")?;
    write!(out, "{}", report::section(&report::bracketed(&lemmas)))?;

    let ner_tags = with_spinner("Recognizing entities", tasks::ner(client, VINKEN_TEXT))
        .await
        .context("Named-entity recognition failed")?;
    write!(out, "{}", report::section(&report::tagged(&tokens, &ner_tags)))?;

    let trees = with_spinner("Parsing", tasks::parse(client, VINKEN_TEXT))
        .await
        .context("Parsing failed")?;
    write!(out, "{}", report::section(&report::trees(&trees)))?;

    let chains = with_spinner(
        "Resolving coreference",
        tasks::coreference_resolution(client, CHEN_TEXT),
    )
    .await
    .context("Coreference resolution failed")?;
    write!(out, "{}", report::section(&report::chains(&chains)))?;

    let mentions = with_spinner(
        "Collecting mentions",
        tasks::coreference_mentions(client, CHEN_TEXT),
    )
    .await
    .context("Coreference mention lookup failed")?;
    write!(out, "{}", report::section(&report::mentions(&mentions)))?;

    out.flush()?;
    Ok(())
}
