//! Configuration management for the nesting checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Tag set selection (CLI list, TOML file, user config, built-in)

use crate::report::OutputFormat;
use crate::tags::TagSet;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for nestcheck
#[derive(Debug, Parser)]
#[command(name = "nestcheck")]
#[command(about = "Check that block-level markup tags open and close in nested order")]
#[command(version)]
pub struct Args {
    /// Documents to check
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Explicit list of tag names to track
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated tag names to track (e.g., 'div,nav,footer')"
    )]
    pub tags: Option<Vec<String>>,

    /// TOML file defining the tag names to track
    #[arg(long, help = "TOML file with a [tags] elements list")]
    pub tags_file: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level, written to stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Where the tag set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSource {
    CommandLine(Vec<String>),
    File(PathBuf),
    Builtin,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub tag_source: TagSource,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            paths: args.paths,
            tag_source: resolve_tag_source(args.tags, args.tags_file, user_tags_file()),
            format: args.format,
            log_level: args.log_level,
        })
    }

    /// Build the tag set this run should track
    pub fn load_tag_set(&self) -> Result<TagSet> {
        match &self.tag_source {
            TagSource::CommandLine(names) => TagSet::new(names.iter().cloned()),
            TagSource::File(path) => TagSet::from_file(path),
            TagSource::Builtin => Ok(TagSet::builtin()),
        }
    }
}

/// Default user tag file, if one exists: `<config_dir>/nestcheck/tags.toml`
pub fn user_tags_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("nestcheck").join("tags.toml");
    path.is_file().then_some(path)
}

fn resolve_tag_source(
    cli_tags: Option<Vec<String>>,
    tags_file: Option<PathBuf>,
    user_file: Option<PathBuf>,
) -> TagSource {
    if let Some(names) = cli_tags {
        TagSource::CommandLine(names)
    } else if let Some(path) = tags_file.or(user_file) {
        TagSource::File(path)
    } else {
        TagSource::Builtin
    }
}
