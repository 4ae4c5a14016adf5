//! Run one operation over user-supplied text.

use anyhow::Context;

use crate::cli::helpers::with_spinner;
use crate::corenlp::{Annotation, Annotators, CoreNlpClient};
use crate::report;
use crate::tasks;

/// Operation selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Task {
    /// Token texts
    Tokenize,
    /// Sentence texts
    Ssplit,
    /// Token/part-of-speech pairs
    Pos,
    /// Lemmas
    Lemma,
    /// Token/named-entity pairs
    Ner,
    /// Constituency trees
    Parse,
    /// Coreference chains
    Coref,
    /// Coreference mentions per sentence
    Mentions,
    /// Per-token table for any annotator list
    Annotate,
}

pub async fn cmd_run(
    client: &CoreNlpClient,
    task: Task,
    text: &str,
    annotators: Option<&str>,
) -> anyhow::Result<()> {
    if annotators.is_some() && task != Task::Annotate {
        anyhow::bail!("--annotators only applies to the 'annotate' task");
    }

    let body = match task {
        Task::Tokenize => {
            report::bracketed(&with_spinner("Tokenizing", tasks::tokenize(client, text)).await?)
        }
        Task::Ssplit => report::bracketed(
            &with_spinner("Splitting sentences", tasks::sentence_split(client, text)).await?,
        ),
        Task::Pos => {
            let tokens = with_spinner("Tokenizing", tasks::tokenize(client, text)).await?;
            let tags =
                with_spinner("Tagging parts of speech", tasks::pos_tagging(client, text)).await?;
            report::tagged(&tokens, &tags)
        }
        Task::Lemma => {
            report::bracketed(&with_spinner("Lemmatizing", tasks::lemmatize(client, text)).await?)
        }
        Task::Ner => {
            let tokens = with_spinner("Tokenizing", tasks::tokenize(client, text)).await?;
            let tags = with_spinner("Recognizing entities", tasks::ner(client, text)).await?;
            report::tagged(&tokens, &tags)
        }
        Task::Parse => report::trees(&with_spinner("Parsing", tasks::parse(client, text)).await?),
        Task::Coref => report::chains(
            &with_spinner(
                "Resolving coreference",
                tasks::coreference_resolution(client, text),
            )
            .await?,
        ),
        Task::Mentions => report::mentions(
            &with_spinner(
                "Collecting mentions",
                tasks::coreference_mentions(client, text),
            )
            .await?,
        ),
        Task::Annotate => {
            let annotators = match annotators {
                Some(list) => list
                    .parse::<Annotators>()
                    .context("Invalid --annotators list")?,
                None => Annotators::coref(),
            };
            let pipeline = client.pipeline(annotators);
            let annotation = with_spinner("Annotating", pipeline.annotate(text)).await?;
            describe(&annotation)
        }
    };

    print!("{}", report::section(&body));
    Ok(())
}

/// Table of every token field the pipeline filled in, then trees and chains.
fn describe(annotation: &Annotation) -> String {
    let mut out = String::new();
    let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    for sentence in annotation.sentences() {
        out.push_str(&format!(
            "Sentence {}: {}\n",
            sentence.index + 1,
            annotation.sentence_text(sentence)
        ));
        for token in &sentence.tokens {
            out.push_str(&format!(
                "  {:>3}  {:<20} {:<20} {:<6} {}\n",
                token.index,
                token.word,
                dash(&token.lemma),
                dash(&token.pos),
                dash(&token.ner)
            ));
        }
        if let Ok(tree) = sentence.tree() {
            out.push_str(&format!("  {}\n", tree));
        }
    }

    if annotation.sentences().is_empty() {
        out.push_str(&report::bracketed(
            &annotation
                .tokens()
                .iter()
                .map(|t| t.word.as_str())
                .collect::<Vec<_>>(),
        ));
        out.push('\n');
    }

    out.push_str(&report::chains(&annotation.coref_chains()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lists_token_fields() {
        let body = r#"{"sentences": [{"index": 0, "parse": "(ROOT (NP (NNP Elsevier)))", "tokens": [
            {"index": 1, "word": "Elsevier", "lemma": "Elsevier", "pos": "NNP", "ner": "ORGANIZATION",
             "characterOffsetBegin": 0, "characterOffsetEnd": 8}
        ]}]}"#;
        let annotation = Annotation::from_json("Elsevier", body).unwrap();
        let text = describe(&annotation);

        assert!(text.starts_with("Sentence 1: Elsevier\n"));
        assert!(text.contains("NNP"));
        assert!(text.contains("ORGANIZATION"));
        assert!(text.contains("(ROOT (NP (NNP Elsevier)))"));
    }

    #[test]
    fn test_describe_without_sentences() {
        let body = r#"{"tokens": [{"index": 1, "word": "Hi"}, {"index": 2, "word": "!"}]}"#;
        let annotation = Annotation::from_json("Hi!", body).unwrap();
        assert_eq!(describe(&annotation), "[Hi] [!] \n");
    }
}
