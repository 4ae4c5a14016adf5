//! Pipeline stage names and the ordered stage lists handed to the server.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named stage in the CoreNLP pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotator {
    Tokenize,
    Ssplit,
    Pos,
    Lemma,
    Ner,
    Parse,
    Mention,
    Coref,
}

impl Annotator {
    pub const ALL: [Annotator; 8] = [
        Annotator::Tokenize,
        Annotator::Ssplit,
        Annotator::Pos,
        Annotator::Lemma,
        Annotator::Ner,
        Annotator::Parse,
        Annotator::Mention,
        Annotator::Coref,
    ];

    /// Stage name as CoreNLP spells it.
    pub fn name(self) -> &'static str {
        match self {
            Annotator::Tokenize => "tokenize",
            Annotator::Ssplit => "ssplit",
            Annotator::Pos => "pos",
            Annotator::Lemma => "lemma",
            Annotator::Ner => "ner",
            Annotator::Parse => "parse",
            Annotator::Mention => "mention",
            Annotator::Coref => "coref",
        }
    }
}

impl fmt::Display for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotatorError {
    #[error("Unknown annotator: {0}")]
    Unknown(String),
    #[error("Annotator list is empty")]
    Empty,
}

impl FromStr for Annotator {
    type Err = AnnotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Annotator::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| AnnotatorError::Unknown(s.trim().to_string()))
    }
}

/// Ordered, duplicate-free list of pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotators(Vec<Annotator>);

impl Annotators {
    pub fn new(stages: &[Annotator]) -> Self {
        let mut list = Vec::with_capacity(stages.len());
        for stage in stages {
            if !list.contains(stage) {
                list.push(*stage);
            }
        }
        Self(list)
    }

    pub fn iter(&self) -> impl Iterator<Item = Annotator> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, stage: Annotator) -> bool {
        self.0.contains(&stage)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokenize() -> Self {
        Self::new(&[Annotator::Tokenize])
    }

    pub fn sentence_split() -> Self {
        Self::new(&[Annotator::Tokenize, Annotator::Ssplit])
    }

    pub fn pos() -> Self {
        Self::new(&[Annotator::Tokenize, Annotator::Ssplit, Annotator::Pos])
    }

    pub fn lemma() -> Self {
        Self::new(&[
            Annotator::Tokenize,
            Annotator::Ssplit,
            Annotator::Pos,
            Annotator::Lemma,
        ])
    }

    pub fn ner() -> Self {
        Self::new(&[
            Annotator::Tokenize,
            Annotator::Ssplit,
            Annotator::Pos,
            Annotator::Lemma,
            Annotator::Ner,
        ])
    }

    pub fn parse() -> Self {
        Self::new(&[
            Annotator::Tokenize,
            Annotator::Ssplit,
            Annotator::Pos,
            Annotator::Lemma,
            Annotator::Parse,
        ])
    }

    /// Full stack needed for coreference: NER and parses feed mention detection.
    pub fn coref() -> Self {
        Self::new(&Annotator::ALL)
    }
}

impl FromStr for Annotators {
    type Err = AnnotatorError;

    /// Parse a comma-separated list such as `"tokenize, ssplit, pos"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stages = s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Annotator::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        if stages.is_empty() {
            return Err(AnnotatorError::Empty);
        }
        Ok(Self::new(&stages))
    }
}

impl fmt::Display for Annotators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|a| a.name()).collect();
        f.write_str(&names.join(","))
    }
}
