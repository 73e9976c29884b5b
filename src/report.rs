//! Diagnostic Output
//!
//! Renders validation results for the terminal (text) or for tools (JSON).

use crate::validation::{Diagnostic, DiagnosticKind, ValidationResult};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validation outcome for one input file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: ValidationResult,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    balanced: bool,
    diagnostics: &'a [Diagnostic],
}

/// Write reports in the requested format
pub fn render(out: &mut impl Write, format: OutputFormat, reports: &[FileReport]) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, reports),
        OutputFormat::Json => render_json(out, reports),
    }
}

/// Plain text, one finding per line
///
/// Findings detected while scanning come first. Elements left open are
/// grouped under a single header, outermost first. With several files each
/// block is introduced by a `==> path <==` line.
pub fn render_text(out: &mut impl Write, reports: &[FileReport]) -> Result<()> {
    let with_headers = reports.len() > 1;

    for report in reports {
        if with_headers {
            writeln!(out, "==> {} <==", report.path.display())?;
            if report.result.is_balanced() {
                writeln!(out, "OK")?;
                continue;
            }
        }

        for diagnostic in &report.result.diagnostics {
            if diagnostic.kind() != DiagnosticKind::UnclosedAtEof {
                writeln!(out, "Error: {}", diagnostic)?;
            }
        }

        let mut unclosed = report.result.unclosed().peekable();
        if unclosed.peek().is_some() {
            writeln!(out, "Error: Unclosed tags at end of file:")?;
            for diagnostic in unclosed {
                if let Diagnostic::UnclosedAtEof { name, opened_at } = diagnostic {
                    writeln!(out, " - <{}> (opened at line {})", name, opened_at)?;
                }
            }
        }
    }

    Ok(())
}

/// Pretty-printed JSON array, one object per file
pub fn render_json(out: &mut impl Write, reports: &[FileReport]) -> Result<()> {
    let json: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| JsonReport {
            path: report.path.display().to_string(),
            balanced: report.result.is_balanced(),
            diagnostics: &report.result.diagnostics,
        })
        .collect();

    writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    fn report(path: &str, lines: &[&str]) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            result: ValidationResult {
                diagnostics: validate(lines),
            },
        }
    }

    fn text(reports: &[FileReport]) -> String {
        let mut buf = Vec::new();
        render_text(&mut buf, reports).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_text_single_balanced_file_prints_nothing() {
        assert_eq!(text(&[report("a.html", &["<div>", "</div>"])]), "");
    }

    #[test]
    fn test_text_findings() {
        let output = text(&[report(
            "a.html",
            &["</body>", "<html>", "<main>", "<div>", "</section>"],
        )]);

        assert_eq!(
            output,
            "Error: Unexpected closing tag </body> at line 1\n\
             Error: Mismatched tag. Expected </div> but found </section> at line 5\n\
             Error: Unclosed tags at end of file:\n \
             - <html> (opened at line 2)\n \
             - <main> (opened at line 3)\n"
        );
    }

    #[test]
    fn test_text_multiple_files_have_headers() {
        let output = text(&[
            report("ok.html", &["<div></div>"]),
            report("bad.html", &["</div>"]),
        ]);

        assert_eq!(
            output,
            "==> ok.html <==\nOK\n==> bad.html <==\nError: Unexpected closing tag </div> at line 1\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        render_json(&mut buf, &[report("a.html", &["<div>", "</section>"])]).expect("render");

        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value[0]["path"], "a.html");
        assert_eq!(value[0]["balanced"], false);

        let diagnostic = &value[0]["diagnostics"][0];
        assert_eq!(diagnostic["kind"], "Mismatched");
        assert_eq!(diagnostic["line"], 2);
        assert_eq!(diagnostic["expected"], "div");
        assert_eq!(diagnostic["found"], "section");
        assert_eq!(diagnostic["opened_at"], 1);
    }
}
