//! Tag Scanner
//!
//! Fast extraction of tag tokens from a line of markup.
//! One compiled regex per tag set, reused for every line.

use crate::tags::TagSet;
use anyhow::{Context, Result};
use regex::Regex;

/// Whether a token opens or closes an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name`
    Open,
    /// `</name`
    Close,
}

/// A recognized tag occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    pub kind: TagKind,
    pub name: String,
    /// 1-based line number
    pub line: usize,
}

impl TagToken {
    pub fn open(name: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TagKind::Open,
            name: name.into(),
            line,
        }
    }

    pub fn close(name: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TagKind::Close,
            name: name.into(),
            line,
        }
    }
}

/// Scanner for the tags of one `TagSet`
#[derive(Debug, Clone)]
pub struct TagScanner {
    pattern: Regex,
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new(&TagSet::builtin()).expect("builtin tag pattern compiles")
    }
}

impl TagScanner {
    /// Compile a scanner recognizing exactly the names in `tags`
    pub fn new(tags: &TagSet) -> Result<Self> {
        let pattern = build_pattern(tags);
        log::trace!("Tag pattern: {}", pattern);
        let pattern = Regex::new(&pattern).context("failed to compile tag pattern")?;
        Ok(Self { pattern })
    }

    /// Extract all tag tokens on a line, left to right
    ///
    /// Matching is by prefix: `<` and an optional `/` followed by a
    /// recognized name. No closing `>` is required and anything after the
    /// name is ignored, so `<div id="a">`, `<div` and `<divider>` all yield
    /// an open `div` token.
    pub fn scan_line(&self, line: &str, line_num: usize) -> Vec<TagToken> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| {
                let name = caps.get(2)?.as_str();
                let kind = match caps.get(1) {
                    Some(slash) if !slash.as_str().is_empty() => TagKind::Close,
                    _ => TagKind::Open,
                };
                Some(TagToken {
                    kind,
                    name: name.to_string(),
                    line: line_num,
                })
            })
            .collect()
    }
}

/// Build `<(/?)(a|b|...)` with names ordered longest first
///
/// Regex alternation is leftmost-first, so a name that is a prefix of
/// another (`head` / `header`) must come after it.
fn build_pattern(tags: &TagSet) -> String {
    let mut names: Vec<&str> = tags.names().iter().map(|s| s.as_str()).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    format!("<(/?)({})", alternation)
}
