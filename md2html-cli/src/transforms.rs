//! CLI-specific transforms
//!
//! This module defines the transform combinations available from the inspect
//! command. Each transform is a stage + format combination (e.g.
//! "lines-json", "blocks-treeviz").
//!
//! ## Transform Pipeline
//!
//! The converter has two observable stages:
//!
//! 1. **Line classification** - Raw text → one classification per line
//!    - `lines-simple`: classification names, optionally numbered
//!    - `lines-json`: classifications with payloads as JSON
//!
//! 2. **Block assembly** - Classified lines → block IR
//!    - `blocks-json`: the block IR as JSON
//!    - `blocks-treeviz`: tree visualization with icons (default)

use md2html_convert::formats::markdown::parser::{classify_line, parse_with_options, LineClass};
use md2html_convert::formats::markdown::MarkdownOptions;
use md2html_convert::formats::treeviz::to_treeviz_str;
use md2html_convert::ir::{Block, Document};

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "lines-simple",
    "lines-json",
    "blocks-json",
    "blocks-treeviz",
];

/// Execute a named transform on a source text
///
/// # Arguments
///
/// * `source` - The Markdown source to transform
/// * `transform_name` - The transform to apply (e.g., "lines-json")
/// * `options` - Parsing policies, shared with the convert command
/// * `show_line_numbers` - Number the lines of the lines-simple view
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &MarkdownOptions,
    show_line_numbers: bool,
) -> Result<String, String> {
    match transform_name {
        "lines-simple" => Ok(lines_to_simple(source, options, show_line_numbers)),
        "lines-json" => serde_json::to_string_pretty(&lines_to_json(source, options))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "blocks-json" => {
            let doc = parse_with_options(source, options);
            serde_json::to_string_pretty(&blocks_to_json(&doc))
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "blocks-treeviz" => {
            let doc = parse_with_options(source, options);
            Ok(to_treeviz_str(&doc))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn lines_to_simple(source: &str, options: &MarkdownOptions, show_line_numbers: bool) -> String {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let name = classify_line(line, options).simple_name();
            if show_line_numbers {
                format!("{:02} {name}", index + 1)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert per-line classifications to a JSON-serializable format
fn lines_to_json(source: &str, options: &MarkdownOptions) -> serde_json::Value {
    use serde_json::json;

    json!(source
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let class = classify_line(line, options);
            let kind = class.simple_name();
            match class {
                LineClass::Blank => json!({
                    "line": index + 1,
                    "kind": kind,
                }),
                LineClass::Heading { level, text } => json!({
                    "line": index + 1,
                    "kind": kind,
                    "level": level,
                    "text": text,
                }),
                LineClass::UnorderedItem(text)
                | LineClass::OrderedItem(text)
                | LineClass::Raw(text)
                | LineClass::Text(text) => json!({
                    "line": index + 1,
                    "kind": kind,
                    "text": text,
                }),
            }
        })
        .collect::<Vec<_>>())
}

/// Convert the block IR to a JSON-serializable format
fn blocks_to_json(doc: &Document) -> serde_json::Value {
    use serde_json::json;

    json!(doc
        .blocks
        .iter()
        .map(|block| match block {
            Block::Heading { level, text } => json!({
                "type": "heading",
                "level": level,
                "text": text,
            }),
            Block::List { ordered, items } => json!({
                "type": "list",
                "ordered": ordered,
                "items": items,
            }),
            Block::Paragraph { lines } => json!({
                "type": "paragraph",
                "lines": lines,
            }),
            Block::Raw(line) => json!({
                "type": "raw",
                "line": line,
            }),
        })
        .collect::<Vec<_>>())
}
