//! Recognized Tags
//!
//! The fixed whitelist of nestable element names the checker tracks.
//! A `TagSet` is built once and handed to the scanner; it never changes
//! during a run.

pub mod schema;

use anyhow::{bail, Context, Result};
use std::path::Path;

pub use schema::{TagSetFile, TagSetSection};

/// Element names tracked when no other set is configured
pub const BUILTIN_TAGS: &[&str] = &["div", "main", "aside", "header", "section", "html", "body"];

/// Immutable, ordered set of recognized tag names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    name: Option<String>,
    description: Option<String>,
    names: Vec<String>,
}

impl Default for TagSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TagSet {
    /// The built-in block container set
    pub fn builtin() -> Self {
        Self {
            name: Some("builtin".to_string()),
            description: Some("block-level container elements".to_string()),
            names: BUILTIN_TAGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a tag set from explicit names.
    ///
    /// Duplicates are dropped, keeping the first occurrence. Names are
    /// case-sensitive and must not contain characters that could never
    /// appear in a tag name.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            validate_name(&name)?;
            if !unique.contains(&name) {
                unique.push(name);
            }
        }

        if unique.is_empty() {
            bail!("tag set must contain at least one element name");
        }

        Ok(Self {
            name: None,
            description: None,
            names: unique,
        })
    }

    /// Parse a tag set from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TagSetFile = toml::from_str(content).context("invalid tag set TOML")?;
        let mut set = Self::new(file.tags.elements)?;
        set.name = file.tags.name;
        set.description = file.tags.description;
        Ok(set)
    }

    /// Load a tag set from a TOML file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tag set file {}", path.display()))?;
        let set = Self::from_toml_str(&content)
            .with_context(|| format!("failed to load tag set from {}", path.display()))?;
        log::debug!("Loaded {} tag names from {}", set.len(), path.display());
        Ok(set)
    }

    /// Optional descriptive name (from the TOML file or `builtin`)
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("tag name must not be empty");
    }
    if let Some(c) = name
        .chars()
        .find(|c| matches!(c, '<' | '>' | '/') || c.is_whitespace())
    {
        bail!("tag name '{}' contains invalid character {:?}", name, c);
    }
    Ok(())
}
