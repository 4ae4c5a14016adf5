//! Constituency parse trees in Penn Treebank bracket notation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Empty tree")]
    Empty,
    #[error("Unclosed bracket opened at byte {0}")]
    Unclosed(usize),
    #[error("Unexpected ')' at byte {0}")]
    UnexpectedClose(usize),
    #[error("Trailing input at byte {0}")]
    Trailing(usize),
}

/// A node of a constituency parse. Leaves (words) have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub label: String,
    pub children: Vec<ParseTree>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'a> {
    Open(usize),
    Close(usize),
    Atom(usize, &'a str),
}

fn lex(input: &str) -> Vec<Lexeme<'_>> {
    let mut out = Vec::new();
    let mut atom_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        let breaks = c == '(' || c == ')' || c.is_whitespace();
        if breaks {
            if let Some(start) = atom_start.take() {
                out.push(Lexeme::Atom(start, &input[start..i]));
            }
            match c {
                '(' => out.push(Lexeme::Open(i)),
                ')' => out.push(Lexeme::Close(i)),
                _ => {}
            }
        } else if atom_start.is_none() {
            atom_start = Some(i);
        }
    }
    if let Some(start) = atom_start {
        out.push(Lexeme::Atom(start, &input[start..]));
    }
    out
}

impl ParseTree {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn node(label: impl Into<String>, children: Vec<ParseTree>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Parse a bracketed tree. Any whitespace layout is accepted, so the
    /// server's multi-line pretty print reads the same as a one-liner.
    pub fn parse(input: &str) -> Result<Self, TreeError> {
        let lexemes = lex(input);
        if lexemes.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut pos = 0;
        let tree = Self::read(&lexemes, &mut pos)?;
        match lexemes.get(pos) {
            None => Ok(tree),
            Some(Lexeme::Open(at)) | Some(Lexeme::Close(at)) | Some(Lexeme::Atom(at, _)) => {
                Err(TreeError::Trailing(*at))
            }
        }
    }

    fn read(lexemes: &[Lexeme<'_>], pos: &mut usize) -> Result<Self, TreeError> {
        match lexemes.get(*pos) {
            None => Err(TreeError::Empty),
            Some(Lexeme::Atom(_, text)) => {
                *pos += 1;
                Ok(Self::leaf(*text))
            }
            Some(Lexeme::Close(at)) => Err(TreeError::UnexpectedClose(*at)),
            Some(Lexeme::Open(open_at)) => {
                let open_at = *open_at;
                *pos += 1;

                // Penn files sometimes wrap the root in an unlabeled bracket: "( (S ...))"
                let label = match lexemes.get(*pos) {
                    Some(Lexeme::Atom(_, text)) => {
                        *pos += 1;
                        (*text).to_string()
                    }
                    _ => String::new(),
                };

                let mut children = Vec::new();
                loop {
                    match lexemes.get(*pos) {
                        None => return Err(TreeError::Unclosed(open_at)),
                        Some(Lexeme::Close(_)) => {
                            *pos += 1;
                            break;
                        }
                        Some(_) => children.push(Self::read(lexemes, pos)?),
                    }
                }
                Ok(Self::node(label, children))
            }
        }
    }

    /// Words at the leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_leaf() {
            out.push(&self.label);
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }

    /// One-line rendering with square brackets in place of parentheses.
    pub fn to_square_brackets(&self) -> String {
        self.to_string().replace('(', "[").replace(')', "]")
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return f.write_str(&self.label);
        }
        write!(f, "({}", self.label)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        f.write_str(")")
    }
}

impl FromStr for ParseTree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRETTY: &str = "(ROOT\n  (S\n    (NP (NNP Mr.) (NNP Vinken))\n    (VP (VBZ is)\n      (NP (NN chairman)))\n    (. .)))";

    #[test]
    fn test_parse_pretty_printed_tree() {
        let tree = ParseTree::parse(PRETTY).unwrap();
        assert_eq!(tree.label, "ROOT");
        assert_eq!(
            tree.to_string(),
            "(ROOT (S (NP (NNP Mr.) (NNP Vinken)) (VP (VBZ is) (NP (NN chairman))) (. .)))"
        );
        assert_eq!(tree.leaves(), vec!["Mr.", "Vinken", "is", "chairman", "."]);
    }

    #[test]
    fn test_square_brackets() {
        let tree = ParseTree::parse("(ROOT (NP (NNP Elsevier)))").unwrap();
        assert_eq!(tree.to_square_brackets(), "[ROOT [NP [NNP Elsevier]]]");
    }

    #[test]
    fn test_unlabeled_root() {
        let tree = ParseTree::parse("( (S (VB Go)))").unwrap();
        assert_eq!(tree.label, "");
        assert_eq!(tree.leaves(), vec!["Go"]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ParseTree::parse("   "), Err(TreeError::Empty));
        assert_eq!(ParseTree::parse("(ROOT (S x)"), Err(TreeError::Unclosed(0)));
        assert_eq!(ParseTree::parse(")"), Err(TreeError::UnexpectedClose(0)));
        assert_eq!(ParseTree::parse("(A b) (C d)"), Err(TreeError::Trailing(6)));
    }
}
