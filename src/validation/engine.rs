//! Validation Engine
//!
//! Single-pass nesting check: scan each line for tag tokens, match close
//! tags against a stack of open elements, and report whatever is still open
//! at end of input. The engine never fails; every problem is a finding.

use crate::parser::{split_lines, TagKind, TagScanner, TagToken};
use crate::tags::TagSet;
use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Category of a nesting finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    UnexpectedClose,
    Mismatched,
    UnclosedAtEof,
}

/// A nesting finding, in the order it was detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    /// Close tag with nothing open
    UnexpectedClose { line: usize, name: String },
    /// Close tag not matching the innermost open element; that element is
    /// discarded
    Mismatched {
        line: usize,
        expected: String,
        found: String,
        opened_at: usize,
    },
    /// Element still open when the input ended
    UnclosedAtEof { name: String, opened_at: usize },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnexpectedClose { .. } => DiagnosticKind::UnexpectedClose,
            Diagnostic::Mismatched { .. } => DiagnosticKind::Mismatched,
            Diagnostic::UnclosedAtEof { .. } => DiagnosticKind::UnclosedAtEof,
        }
    }

    /// Line the finding was detected on; `None` for end-of-input findings
    pub fn line(&self) -> Option<usize> {
        match self {
            Diagnostic::UnexpectedClose { line, .. } | Diagnostic::Mismatched { line, .. } => {
                Some(*line)
            }
            Diagnostic::UnclosedAtEof { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnexpectedClose { line, name } => {
                write!(f, "Unexpected closing tag </{}> at line {}", name, line)
            }
            Diagnostic::Mismatched {
                line,
                expected,
                found,
                ..
            } => write!(
                f,
                "Mismatched tag. Expected </{}> but found </{}> at line {}",
                expected, found, line
            ),
            Diagnostic::UnclosedAtEof { name, opened_at } => {
                write!(f, "Unclosed tag <{}> opened at line {}", name, opened_at)
            }
        }
    }
}

/// An element whose close tag has not been matched yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenElement {
    pub name: String,
    pub line: usize,
}

/// Currently open elements, outermost at the bottom
#[derive(Debug, Default)]
pub struct NestingStack {
    frames: Vec<OpenElement>,
}

impl NestingStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: OpenElement) {
        log::trace!("push <{}> (line {})", element.name, element.line);
        self.frames.push(element);
    }

    pub fn pop(&mut self) -> Option<OpenElement> {
        let element = self.frames.pop();
        if let Some(element) = &element {
            log::trace!("pop <{}> (line {})", element.name, element.line);
        }
        element
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate from outermost to innermost
    pub fn iter(&self) -> impl Iterator<Item = &OpenElement> {
        self.frames.iter()
    }
}

/// Result of validating a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every recognized element opened and closed in order
    pub fn is_balanced(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind() == kind).count()
    }

    /// Elements left open at end of input, outermost first
    pub fn unclosed(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind() == DiagnosticKind::UnclosedAtEof)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::debug!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Nesting validator for one tag set
///
/// Holds no per-run state, so one validator can check any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    scanner: TagScanner,
}

impl Validator {
    pub fn new(tags: &TagSet) -> Result<Self> {
        Ok(Self {
            scanner: TagScanner::new(tags)?,
        })
    }

    /// Validate a sequence of lines (line numbers start at 1)
    pub fn validate<I, S>(&self, lines: I) -> ValidationResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = ValidationResult::new();
        let mut stack = NestingStack::new();
        let mut line_count = 0;

        for (idx, line) in lines.into_iter().enumerate() {
            line_count = idx + 1;
            for token in self.scanner.scan_line(line.as_ref(), line_count) {
                apply_token(token, &mut stack, &mut result);
            }
        }

        for element in stack.iter() {
            result.report(Diagnostic::UnclosedAtEof {
                name: element.name.clone(),
                opened_at: element.line,
            });
        }

        log::debug!(
            "Checked {} lines: {} diagnostics, {} unclosed",
            line_count,
            result.diagnostics.len(),
            stack.depth()
        );

        result
    }

    /// Validate document text, split on `\n`, `\r\n` or a lone `\r`
    pub fn validate_document(&self, content: &str) -> ValidationResult {
        self.validate(split_lines(content))
    }
}

fn apply_token(token: TagToken, stack: &mut NestingStack, result: &mut ValidationResult) {
    match token.kind {
        TagKind::Open => stack.push(OpenElement {
            name: token.name,
            line: token.line,
        }),
        TagKind::Close => match stack.pop() {
            None => result.report(Diagnostic::UnexpectedClose {
                line: token.line,
                name: token.name,
            }),
            Some(open) if open.name == token.name => {}
            // One mismatch consumes exactly one frame; no deeper search
            Some(open) => result.report(Diagnostic::Mismatched {
                line: token.line,
                expected: open.name,
                found: token.name,
                opened_at: open.line,
            }),
        },
    }
}

/// Validate lines against the built-in tag set
pub fn validate<I, S>(lines: I) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Validator::default().validate(lines).diagnostics
}

/// Validate document text against a tag set
pub fn validate_document(content: &str, tags: &TagSet) -> Result<ValidationResult> {
    Ok(Validator::new(tags)?.validate_document(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_balanced());

        result.report(Diagnostic::UnexpectedClose {
            line: 1,
            name: "div".to_string(),
        });
        assert!(!result.is_balanced());
        assert_eq!(result.count(DiagnosticKind::UnexpectedClose), 1);
        assert_eq!(result.count(DiagnosticKind::Mismatched), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(validate(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_nesting_stack_order() {
        let mut stack = NestingStack::new();
        assert!(stack.pop().is_none());

        stack.push(OpenElement {
            name: "html".to_string(),
            line: 1,
        });
        stack.push(OpenElement {
            name: "body".to_string(),
            line: 2,
        });
        assert_eq!(stack.depth(), 2);

        let names: Vec<_> = stack.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["html", "body"]);

        assert_eq!(stack.pop().map(|e| e.name), Some("body".to_string()));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_mismatch_discards_one_frame() {
        // The </div> pops <section>; the real <div> then remains open
        let diagnostics = validate(["<div>", "<section>", "</div>"]);

        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::Mismatched {
                    line: 3,
                    expected: "section".to_string(),
                    found: "div".to_string(),
                    opened_at: 2,
                },
                Diagnostic::UnclosedAtEof {
                    name: "div".to_string(),
                    opened_at: 1,
                },
            ]
        );
    }

    #[test]
    fn test_stray_close_cascades() {
        let diagnostics = validate(["<main>", "</div>", "</main>"]);

        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::Mismatched {
                    line: 2,
                    expected: "main".to_string(),
                    found: "div".to_string(),
                    opened_at: 1,
                },
                Diagnostic::UnexpectedClose {
                    line: 3,
                    name: "main".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_diagnostic_messages() {
        let unexpected = Diagnostic::UnexpectedClose {
            line: 3,
            name: "div".to_string(),
        };
        assert_eq!(unexpected.to_string(), "Unexpected closing tag </div> at line 3");
        assert_eq!(unexpected.line(), Some(3));

        let mismatched = Diagnostic::Mismatched {
            line: 2,
            expected: "div".to_string(),
            found: "section".to_string(),
            opened_at: 1,
        };
        assert_eq!(
            mismatched.to_string(),
            "Mismatched tag. Expected </div> but found </section> at line 2"
        );

        let unclosed = Diagnostic::UnclosedAtEof {
            name: "main".to_string(),
            opened_at: 1,
        };
        assert_eq!(unclosed.to_string(), "Unclosed tag <main> opened at line 1");
        assert_eq!(unclosed.line(), None);
        assert_eq!(unclosed.kind(), DiagnosticKind::UnclosedAtEof);
    }

    #[test]
    fn test_validate_document_crlf() {
        let result = Validator::default().validate_document("<div>\r\n</section>\r\n");
        assert_eq!(result.count(DiagnosticKind::Mismatched), 1);
        assert_eq!(result.diagnostics[0].line(), Some(2));
    }

    #[test]
    fn test_validate_document_bare_cr() {
        let result = Validator::default().validate_document("<div>\r</section>\r");
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::Mismatched {
                line: 2,
                expected: "div".to_string(),
                found: "section".to_string(),
                opened_at: 1,
            }]
        );
    }

    #[test]
    fn test_custom_tag_set() {
        let tags = TagSet::new(["nav"]).expect("valid set");
        let result = validate_document("<nav>\n<div>\n</nav>", &tags).expect("validate");
        assert!(result.is_balanced());
    }
}
