//! Markdown format implementation
//!
//! This module implements the inbound half of the converter: a line-oriented
//! Markdown dialect parsed into the block IR.
//!
//! # Element Mapping Table
//!
//! | Markdown line            | Block            | Notes                                   |
//! |--------------------------|------------------|-----------------------------------------|
//! | `# Text` … `###### Text` | Heading          | marker run length → level 1-6           |
//! | `#######` and longer     | Raw or Heading 6 | per the heading overflow policy         |
//! | `- Text`                 | List (unordered) | adjacent items grouped into one block   |
//! | `* Text`                 | List (ordered)   | adjacent items grouped into one block   |
//! | blank                    | —                | terminates whatever block is open       |
//! | anything else            | Paragraph        | consecutive lines grouped, fully trimmed|
//!
//! The dialect is deliberately small: no nested lists, no code fences, no
//! links or images, no blockquotes. A line that matches no marker rule is
//! always paragraph text, so parsing is total.
//!
//! # Policy knobs
//!
//! Two behaviors vary across real-world corpora of this dialect and are
//! exposed as [`MarkdownOptions`]:
//!
//! - `strict_list_markers`: when set, `-`/`*` must be followed by a space to
//!   start an item. A bare marker with nothing after it is still an empty
//!   item under both policies.
//! - `heading_overflow`: what to do with a marker run longer than six —
//!   pass the line through verbatim (default) or clamp to level 6.

pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;

/// Policy for heading marker runs longer than six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingOverflow {
    /// Emit the line unchanged, outside any block.
    #[default]
    Verbatim,
    /// Treat the line as a level-6 heading.
    Clamp,
}

/// Parsing knobs for the Markdown dialect.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Require a space between a list marker and its content.
    pub strict_list_markers: bool,
    /// Handling of heading marker runs outside 1..=6.
    pub heading_overflow: HeadingOverflow,
}

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Line-oriented Markdown dialect"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_with_options(
            source,
            &MarkdownOptions::default(),
        ))
    }
}
