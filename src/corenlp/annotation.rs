//! Read-only view over the JSON annotation graph returned by the server.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::coref::{CorefChain, CorefMention};
use super::tree::ParseTree;
use super::CoreNlpError;

/// A single token with whatever per-token annotations the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// 1-based position within its sentence
    pub index: usize,
    pub word: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub ner: Option<String>,
    /// Offsets count UTF-16 code units of the submitted text
    #[serde(default)]
    pub character_offset_begin: usize,
    #[serde(default)]
    pub character_offset_end: usize,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
}

impl Token {
    pub fn pos(&self) -> Result<&str, CoreNlpError> {
        self.required("pos", self.pos.as_deref())
    }

    pub fn lemma(&self) -> Result<&str, CoreNlpError> {
        self.required("lemma", self.lemma.as_deref())
    }

    pub fn ner(&self) -> Result<&str, CoreNlpError> {
        self.required("ner", self.ner.as_deref())
    }

    fn required<'a>(
        &self,
        field: &'static str,
        value: Option<&'a str>,
    ) -> Result<&'a str, CoreNlpError> {
        value.ok_or_else(|| CoreNlpError::MissingAnnotation {
            field,
            location: format!("token {} ('{}')", self.index, self.word),
        })
    }

    fn surface(&self) -> &str {
        if self.original_text.is_empty() {
            &self.word
        } else {
            &self.original_text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sentence {
    /// 0-based position within the document
    pub index: usize,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub parse: Option<String>,
}

impl Sentence {
    /// The constituency parse, read from the server's bracketed string.
    pub fn tree(&self) -> Result<ParseTree, CoreNlpError> {
        let raw = self
            .parse
            .as_deref()
            .ok_or_else(|| CoreNlpError::MissingAnnotation {
                field: "parse",
                location: format!("sentence {}", self.index + 1),
            })?;
        ParseTree::parse(raw)
            .map_err(|e| CoreNlpError::Parse(format!("sentence {}: {}", self.index + 1, e)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Document {
    #[serde(default)]
    sentences: Vec<Sentence>,
    /// Present only when no sentence splitting happened
    #[serde(default)]
    tokens: Option<Vec<Token>>,
    #[serde(default)]
    corefs: BTreeMap<u32, Vec<CorefMention>>,
}

/// Submitted text together with the server's annotation of it.
#[derive(Debug, Clone)]
pub struct Annotation {
    text: String,
    document: Document,
}

impl Annotation {
    /// Decode a server response body for `text`.
    pub fn from_json(text: impl Into<String>, body: &str) -> Result<Self, CoreNlpError> {
        let document: Document =
            serde_json::from_str(body).map_err(|e| CoreNlpError::Parse(e.to_string()))?;
        Ok(Self {
            text: text.into(),
            document,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> Vec<&Token> {
        match &self.document.tokens {
            Some(tokens) => tokens.iter().collect(),
            None => self
                .document
                .sentences
                .iter()
                .flat_map(|s| s.tokens.iter())
                .collect(),
        }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.document.sentences
    }

    /// The stretch of the submitted text a sentence covers.
    pub fn sentence_text(&self, sentence: &Sentence) -> String {
        let (first, last) = match (sentence.tokens.first(), sentence.tokens.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return String::new(),
        };

        match slice_utf16(
            &self.text,
            first.character_offset_begin,
            last.character_offset_end,
        ) {
            Some(slice) => slice.to_string(),
            None => {
                tracing::debug!(
                    "Offsets {}..{} do not fit the text, rebuilding sentence {} from tokens",
                    first.character_offset_begin,
                    last.character_offset_end,
                    sentence.index
                );
                join_tokens(&sentence.tokens)
            }
        }
    }

    /// Coreference chains in ascending id order.
    pub fn coref_chains(&self) -> Vec<CorefChain> {
        self.document
            .corefs
            .iter()
            .map(|(id, mentions)| CorefChain {
                id: *id,
                mentions: mentions.clone(),
            })
            .collect()
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(token.surface());
        if i + 1 < tokens.len() {
            out.push_str(if token.after.is_empty() { " " } else { &token.after });
        }
    }
    out
}

/// Slice `text` by UTF-16 code unit offsets.
fn slice_utf16(text: &str, begin: usize, end: usize) -> Option<&str> {
    if begin > end {
        return None;
    }

    let mut begin_byte = None;
    let mut end_byte = None;
    let mut units = 0;

    for (byte, c) in text.char_indices() {
        if units == begin {
            begin_byte = Some(byte);
        }
        if units == end {
            end_byte = Some(byte);
            break;
        }
        units += c.len_utf16();
    }
    if units == begin && begin_byte.is_none() {
        begin_byte = Some(text.len());
    }
    if units == end && end_byte.is_none() {
        end_byte = Some(text.len());
    }

    Some(&text[begin_byte?..end_byte?])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Mr. Vinken is chairman. He retired.";

    const BODY: &str = r#"{
      "docId": "ignored",
      "sentences": [
        {"index": 0, "parse": "(ROOT (S (NP (NNP Mr.) (NNP Vinken)) (VP (VBZ is) (NP (NN chairman))) (. .)))",
         "tokens": [
          {"index": 1, "word": "Mr.", "originalText": "Mr.", "lemma": "Mr.", "pos": "NNP", "ner": "O", "characterOffsetBegin": 0, "characterOffsetEnd": 3, "before": "", "after": " "},
          {"index": 2, "word": "Vinken", "originalText": "Vinken", "lemma": "Vinken", "pos": "NNP", "ner": "PERSON", "characterOffsetBegin": 4, "characterOffsetEnd": 10, "before": " ", "after": " "},
          {"index": 3, "word": "is", "originalText": "is", "lemma": "be", "pos": "VBZ", "ner": "O", "characterOffsetBegin": 11, "characterOffsetEnd": 13, "before": " ", "after": " "},
          {"index": 4, "word": "chairman", "originalText": "chairman", "lemma": "chairman", "pos": "NN", "ner": "TITLE", "characterOffsetBegin": 14, "characterOffsetEnd": 22, "before": " ", "after": ""},
          {"index": 5, "word": ".", "originalText": ".", "lemma": ".", "pos": ".", "ner": "O", "characterOffsetBegin": 22, "characterOffsetEnd": 23, "before": "", "after": " "}
        ]},
        {"index": 1,
         "tokens": [
          {"index": 1, "word": "He", "originalText": "He", "characterOffsetBegin": 24, "characterOffsetEnd": 26, "before": " ", "after": " "},
          {"index": 2, "word": "retired", "originalText": "retired", "characterOffsetBegin": 27, "characterOffsetEnd": 34, "before": " ", "after": ""},
          {"index": 3, "word": ".", "originalText": ".", "characterOffsetBegin": 34, "characterOffsetEnd": 35, "before": "", "after": ""}
        ]}
      ],
      "corefs": {
        "4": [{"id": 4, "text": "He", "startIndex": 1, "endIndex": 2, "sentNum": 2}],
        "2": [{"id": 1, "text": "Mr. Vinken", "startIndex": 1, "endIndex": 3, "sentNum": 1, "isRepresentativeMention": true}]
      }
    }"#;

    #[test]
    fn test_tokens_flatten_sentences() {
        let ann = Annotation::from_json(TEXT, BODY).unwrap();
        let words: Vec<&str> = ann.tokens().iter().map(|t| t.word.as_str()).collect();
        assert_eq!(
            words,
            vec!["Mr.", "Vinken", "is", "chairman", ".", "He", "retired", "."]
        );
    }

    #[test]
    fn test_document_level_tokens_win() {
        let body = r#"{"tokens": [{"index": 1, "word": "Hi"}], "sentences": []}"#;
        let ann = Annotation::from_json("Hi", body).unwrap();
        assert_eq!(ann.tokens().len(), 1);
        assert!(ann.sentences().is_empty());
    }

    #[test]
    fn test_sentence_text_from_offsets() {
        let ann = Annotation::from_json(TEXT, BODY).unwrap();
        let texts: Vec<String> = ann
            .sentences()
            .iter()
            .map(|s| ann.sentence_text(s))
            .collect();
        assert_eq!(texts, vec!["Mr. Vinken is chairman.", "He retired."]);
    }

    #[test]
    fn test_sentence_text_falls_back_to_tokens() {
        let ann = Annotation::from_json("short", BODY).unwrap();
        assert_eq!(ann.sentence_text(&ann.sentences()[1]), "He retired .");
    }

    #[test]
    fn test_missing_fields_are_errors() {
        let ann = Annotation::from_json(TEXT, BODY).unwrap();
        let second = &ann.sentences()[1];

        let err = second.tokens[0].pos().unwrap_err();
        assert!(matches!(
            err,
            CoreNlpError::MissingAnnotation { field: "pos", .. }
        ));
        assert!(matches!(
            second.tree(),
            Err(CoreNlpError::MissingAnnotation { field: "parse", .. })
        ));
        assert_eq!(ann.sentences()[0].tokens[2].lemma().unwrap(), "be");
    }

    #[test]
    fn test_coref_chains_sorted_by_id() {
        let ann = Annotation::from_json(TEXT, BODY).unwrap();
        let ids: Vec<u32> = ann.coref_chains().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            Annotation::from_json(TEXT, "<html>busy</html>"),
            Err(CoreNlpError::Parse(_))
        ));
    }

    #[test]
    fn test_slice_utf16() {
        // "é" is one code unit, the emoji is two
        let text = "é 😀 ok";
        assert_eq!(slice_utf16(text, 0, 1), Some("é"));
        assert_eq!(slice_utf16(text, 2, 4), Some("😀"));
        assert_eq!(slice_utf16(text, 5, 7), Some("ok"));
        assert_eq!(slice_utf16(text, 3, 4), None);
        assert_eq!(slice_utf16(text, 5, 9), None);
        assert_eq!(slice_utf16(text, 7, 7), Some(""));
    }
}
