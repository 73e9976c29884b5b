//! Tag Nesting Check
//!
//! A fast structural lint for markup documents: verifies that a fixed set of
//! block-level container tags open and close in properly nested order.
//!
//! This library provides:
//! - Whitelist-based tag scanning
//! - Stack-based nesting validation with line-numbered diagnostics
//! - Text and JSON reporting
//! - Configuration management

pub mod cli;
pub mod config;
pub mod parser;
pub mod report;
pub mod tags;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{TagKind, TagScanner, TagToken};
pub use tags::TagSet;
pub use validation::{validate, validate_document, Diagnostic, DiagnosticKind, Validator};
