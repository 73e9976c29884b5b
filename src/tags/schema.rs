//! Tag Set Schema Types
//!
//! Serde types for tag-set TOML files.

use serde::Deserialize;

/// Root tag-set file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TagSetFile {
    pub tags: TagSetSection,
}

/// The `[tags]` table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TagSetSection {
    pub name: Option<String>,
    pub description: Option<String>,
    pub elements: Vec<String>,
}
