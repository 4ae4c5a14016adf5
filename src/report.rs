//! Console formatting for annotation results.

use crate::corenlp::{CorefChain, ParseTree};
use crate::tasks::SentenceMentions;

/// Line printed after every section.
pub const SEPARATOR: &str = "=====================================================";

/// `[a] [b] ` - every item bracketed and followed by a space.
pub fn bracketed<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("[{}] ", item.as_ref()))
        .collect()
}

/// `[token/TAG] ...` pairs. Lists of different length pair up to the shorter one.
pub fn tagged<S: AsRef<str>, T: AsRef<str>>(tokens: &[S], tags: &[T]) -> String {
    if tokens.len() != tags.len() {
        tracing::warn!(
            "Token and tag counts differ ({} vs {}), pairing the first {}",
            tokens.len(),
            tags.len(),
            tokens.len().min(tags.len())
        );
    }
    tokens
        .iter()
        .zip(tags)
        .map(|(token, tag)| format!("[{}/{}] ", token.as_ref(), tag.as_ref()))
        .collect()
}

/// One square-bracketed tree per line.
pub fn trees(trees: &[ParseTree]) -> String {
    trees
        .iter()
        .map(|tree| format!("{}\n", tree.to_square_brackets()))
        .collect()
}

/// One `CHAIN` line per chain.
pub fn chains(chains: &[CorefChain]) -> String {
    chains.iter().map(|chain| format!("{}\n", chain)).collect()
}

/// A header line per sentence followed by its bracketed mentions.
pub fn mentions(groups: &[SentenceMentions]) -> String {
    groups
        .iter()
        .map(|group| {
            format!(
                "Mentions for [{}]\n{}\n",
                group.sentence,
                bracketed(&group.mentions)
            )
        })
        .collect()
}

/// Section body, a line break, then the separator. Bodies that already end
/// in a newline therefore get a blank line before the separator.
pub fn section(body: &str) -> String {
    format!("{}\n{}\n", body, SEPARATOR)
}
