//! HTML format implementation
//!
//! Serialize-only: the block IR is rendered as an HTML fragment. There is no
//! document wrapper, no styling and no escaping of source text; the output
//! is exactly the emitted element lines joined with newlines.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Document;

/// Format implementation for HTML fragments
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment output"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_html(doc))
    }
}
