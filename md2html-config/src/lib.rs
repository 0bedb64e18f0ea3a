//! Shared configuration loader for the md2html toolchain.
//!
//! `defaults/md2html.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`Md2HtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md2html_convert::formats::markdown::{HeadingOverflow, MarkdownOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/md2html.default.toml");

/// Top-level configuration consumed by md2html applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2HtmlConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Conversion-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub markdown: MarkdownRulesConfig,
}

/// Mirrors the knobs exposed by the Markdown parser.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownRulesConfig {
    pub strict_list_markers: bool,
    pub heading_overflow: HeadingOverflowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HeadingOverflowConfig {
    #[serde(rename = "verbatim")]
    Verbatim,
    #[serde(rename = "clamp")]
    Clamp,
}

impl From<HeadingOverflowConfig> for HeadingOverflow {
    fn from(config: HeadingOverflowConfig) -> Self {
        match config {
            HeadingOverflowConfig::Verbatim => HeadingOverflow::Verbatim,
            HeadingOverflowConfig::Clamp => HeadingOverflow::Clamp,
        }
    }
}

impl From<MarkdownRulesConfig> for MarkdownOptions {
    fn from(config: MarkdownRulesConfig) -> Self {
        MarkdownOptions {
            strict_list_markers: config.strict_list_markers,
            heading_overflow: config.heading_overflow.into(),
        }
    }
}

impl From<&MarkdownRulesConfig> for MarkdownOptions {
    fn from(config: &MarkdownRulesConfig) -> Self {
        MarkdownOptions {
            strict_list_markers: config.strict_list_markers,
            heading_overflow: config.heading_overflow.into(),
        }
    }
}

/// Controls the line-level inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub lines: InspectLinesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectLinesConfig {
    pub show_numbers: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Md2HtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2HtmlConfig, ConfigError> {
    Loader::new().build()
}
