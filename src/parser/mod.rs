//! Tag Parser
//!
//! Recognition of open and close tags for the tracked element names.
//! This is prefix matching against a whitelist, not markup tokenization:
//! attributes, comments and text content are never looked at.

pub mod scanner;

pub use scanner::{TagKind, TagScanner, TagToken};

/// Scan a single line using the built-in tag set
///
/// Builds a fresh scanner on every call. Callers scanning many lines should
/// hold on to a `TagScanner` instead.
pub fn scan_line(line: &str, line_num: usize) -> Vec<TagToken> {
    TagScanner::default().scan_line(line, line_num)
}

/// Split document text into physical lines
///
/// Accepts `\n`, `\r\n` and a lone `\r` as terminators. A final terminator
/// does not start an extra empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(idx) => {
                let line = &rest[..idx];
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
