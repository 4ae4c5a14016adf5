//! Coreference chains as reported by the `coref` annotator.

use std::fmt;

use serde::Deserialize;

/// One mention inside a coreference chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorefMention {
    pub id: u32,
    pub text: String,
    /// PROPER, NOMINAL, PRONOMINAL or LIST
    #[serde(rename = "type", default)]
    pub mention_type: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub animacy: String,
    /// 1-based token index of the first token
    pub start_index: usize,
    /// 1-based token index one past the last token
    pub end_index: usize,
    #[serde(default)]
    pub head_index: usize,
    /// 1-based sentence number
    pub sent_num: usize,
    #[serde(default)]
    pub is_representative_mention: bool,
}

impl fmt::Display for CorefMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" in sentence {}", self.text, self.sent_num)
    }
}

/// Mentions believed to refer to the same entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorefChain {
    pub id: u32,
    pub mentions: Vec<CorefMention>,
}

impl CorefChain {
    /// The mention the server flagged as representative, else the first one.
    pub fn representative(&self) -> Option<&CorefMention> {
        self.mentions
            .iter()
            .find(|m| m.is_representative_mention)
            .or_else(|| self.mentions.first())
    }
}

impl fmt::Display for CorefChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CHAIN{}-[", self.id)?;
        for (i, mention) in self.mentions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", mention)?;
        }
        f.write_str("]")
    }
}
