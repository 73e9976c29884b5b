//! Command Runner
//!
//! Reads each input document, validates it and hands the results to the
//! report renderer.

use crate::config::Config;
use crate::report::{self, FileReport};
use crate::validation::Validator;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Validate one file from disk
pub fn check_file(path: &Path, validator: &Validator) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let result = validator.validate_document(&content);
    log::info!(
        "{}: {}",
        path.display(),
        if result.is_balanced() {
            "balanced".to_string()
        } else {
            format!("{} diagnostics", result.diagnostics.len())
        }
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        result,
    })
}

/// Check every configured path and write the report
///
/// Findings are never errors; only unreadable input or a failed write
/// makes this return `Err`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let tags = config.load_tag_set()?;
    let description = tags
        .description()
        .map(|d| format!(", {}", d))
        .unwrap_or_default();
    log::debug!(
        "Tracking {} tags ({}{}): {}",
        tags.len(),
        tags.name().unwrap_or("custom"),
        description,
        tags.names().join(", ")
    );

    let validator = Validator::new(&tags)?;
    let reports = config
        .paths
        .iter()
        .map(|path| check_file(path, &validator))
        .collect::<Result<Vec<_>>>()?;

    report::render(out, config.format, &reports)?;
    out.flush()?;
    Ok(())
}
