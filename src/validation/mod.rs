//! Validation Engine
//!
//! Stack-based nesting checks, separated from tag scanning and reporting.

pub mod engine;

pub use engine::{validate, validate_document, Diagnostic, DiagnosticKind, Validator};

// Re-export common types
pub use engine::{NestingStack, OpenElement, ValidationResult};
