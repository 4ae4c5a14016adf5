//! The demo operations: configure a pipeline, annotate, extract one field
//! per token / sentence / document, and project it into plain values.

use crate::corenlp::{
    Annotation, Annotators, CoreNlpClient, CoreNlpError, CorefChain, ParseTree, Token,
};

/// Mentions found in one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceMentions {
    pub sentence: String,
    pub mentions: Vec<String>,
}

async fn annotate(
    client: &CoreNlpClient,
    annotators: Annotators,
    text: &str,
) -> Result<Annotation, CoreNlpError> {
    client.pipeline(annotators).annotate(text).await
}

fn per_token<'a, F>(annotation: &'a Annotation, field: F) -> Result<Vec<String>, CoreNlpError>
where
    F: Fn(&'a Token) -> Result<&'a str, CoreNlpError>,
{
    annotation
        .tokens()
        .into_iter()
        .map(|token| field(token).map(str::to_string))
        .collect()
}

/// Token texts.
pub async fn tokenize(client: &CoreNlpClient, text: &str) -> Result<Vec<String>, CoreNlpError> {
    let annotation = annotate(client, Annotators::tokenize(), text).await?;
    Ok(annotation
        .tokens()
        .into_iter()
        .map(|t| t.word.clone())
        .collect())
}

/// Sentence texts.
pub async fn sentence_split(
    client: &CoreNlpClient,
    text: &str,
) -> Result<Vec<String>, CoreNlpError> {
    let annotation = annotate(client, Annotators::sentence_split(), text).await?;
    Ok(annotation
        .sentences()
        .iter()
        .map(|s| annotation.sentence_text(s))
        .collect())
}

/// Part-of-speech tag for every token.
pub async fn pos_tagging(client: &CoreNlpClient, text: &str) -> Result<Vec<String>, CoreNlpError> {
    let annotation = annotate(client, Annotators::pos(), text).await?;
    per_token(&annotation, Token::pos)
}

/// Lemma for every token.
pub async fn lemmatize(client: &CoreNlpClient, text: &str) -> Result<Vec<String>, CoreNlpError> {
    let annotation = annotate(client, Annotators::lemma(), text).await?;
    per_token(&annotation, Token::lemma)
}

/// Named-entity tag for every token (`O` outside entities).
pub async fn ner(client: &CoreNlpClient, text: &str) -> Result<Vec<String>, CoreNlpError> {
    let annotation = annotate(client, Annotators::ner(), text).await?;
    per_token(&annotation, Token::ner)
}

/// Constituency parse for every sentence.
pub async fn parse(client: &CoreNlpClient, text: &str) -> Result<Vec<ParseTree>, CoreNlpError> {
    let annotation = annotate(client, Annotators::parse(), text).await?;
    annotation.sentences().iter().map(|s| s.tree()).collect()
}

/// Coreference chains ordered by chain id.
pub async fn coreference_resolution(
    client: &CoreNlpClient,
    text: &str,
) -> Result<Vec<CorefChain>, CoreNlpError> {
    let annotation = annotate(client, Annotators::coref(), text).await?;
    Ok(annotation.coref_chains())
}

/// Keeps mentions that nothing else refers to as one-mention chains.
const KEEP_SINGLETONS: (&str, &str) = ("coref.removeSingletonClusters", "false");

/// Coreference mentions grouped by the sentence they occur in.
///
/// Singleton clusters are requested from the server so that every mention
/// found in a sentence is listed, not only those that corefer.
pub async fn coreference_mentions(
    client: &CoreNlpClient,
    text: &str,
) -> Result<Vec<SentenceMentions>, CoreNlpError> {
    let (key, value) = KEEP_SINGLETONS;
    let annotation = client
        .pipeline(Annotators::coref())
        .with_property(key, value)
        .annotate(text)
        .await?;
    Ok(group_mentions(&annotation))
}

/// Every sentence in document order, each with the mentions whose
/// sentence number points at it.
pub fn group_mentions(annotation: &Annotation) -> Vec<SentenceMentions> {
    let chains = annotation.coref_chains();

    annotation
        .sentences()
        .iter()
        .map(|sentence| {
            let sent_num = sentence.index + 1;
            let mut found: Vec<_> = chains
                .iter()
                .flat_map(|c| c.mentions.iter())
                .filter(|m| m.sent_num == sent_num)
                .collect();
            found.sort_by_key(|m| (m.start_index, m.end_index));

            SentenceMentions {
                sentence: annotation.sentence_text(sentence),
                mentions: found.into_iter().map(|m| m.text.clone()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Victoria Chen saw her pay jump. She came to Megabucks.";

    fn annotation() -> Annotation {
        let body = r#"{
          "sentences": [
            {"index": 0, "tokens": [
              {"index": 1, "word": "Victoria", "characterOffsetBegin": 0, "characterOffsetEnd": 8},
              {"index": 6, "word": ".", "characterOffsetBegin": 30, "characterOffsetEnd": 31}
            ]},
            {"index": 1, "tokens": [
              {"index": 1, "word": "She", "characterOffsetBegin": 32, "characterOffsetEnd": 35},
              {"index": 5, "word": ".", "characterOffsetBegin": 53, "characterOffsetEnd": 54}
            ]}
          ],
          "corefs": {
            "1": [
              {"id": 1, "text": "Victoria Chen", "startIndex": 1, "endIndex": 3, "sentNum": 1, "isRepresentativeMention": true},
              {"id": 3, "text": "She", "startIndex": 1, "endIndex": 2, "sentNum": 2}
            ],
            "2": [
              {"id": 2, "text": "her pay", "startIndex": 4, "endIndex": 6, "sentNum": 1}
            ],
            "5": [
              {"id": 5, "text": "her", "startIndex": 4, "endIndex": 5, "sentNum": 1}
            ]
          }
        }"#;
        Annotation::from_json(TEXT, body).unwrap()
    }

    #[test]
    fn test_group_mentions_by_sentence() {
        let groups = group_mentions(&annotation());
        assert_eq!(
            groups,
            vec![
                SentenceMentions {
                    sentence: "Victoria Chen saw her pay jump.".to_string(),
                    mentions: vec![
                        "Victoria Chen".to_string(),
                        "her".to_string(),
                        "her pay".to_string()
                    ],
                },
                SentenceMentions {
                    sentence: "She came to Megabucks.".to_string(),
                    mentions: vec!["She".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_group_mentions_keeps_sentences_without_mentions() {
        let body = r#"{"sentences": [{"index": 0, "tokens": [
            {"index": 1, "word": "Rain", "characterOffsetBegin": 0, "characterOffsetEnd": 4},
            {"index": 2, "word": ".", "characterOffsetBegin": 4, "characterOffsetEnd": 5}
        ]}]}"#;
        let ann = Annotation::from_json("Rain.", body).unwrap();
        let groups = group_mentions(&ann);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sentence, "Rain.");
        assert!(groups[0].mentions.is_empty());
    }

    #[test]
    fn test_per_token_reports_first_missing_field() {
        let body = r#"{"sentences": [{"index": 0, "tokens": [
            {"index": 1, "word": "Rain", "ner": "O"},
            {"index": 2, "word": "."}
        ]}]}"#;
        let ann = Annotation::from_json("Rain.", body).unwrap();
        let err = per_token(&ann, Token::ner).unwrap_err();
        match err {
            CoreNlpError::MissingAnnotation { field, location } => {
                assert_eq!(field, "ner");
                assert!(location.contains("token 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
