//! HTML serialization (block IR → HTML fragment)
//!
//! Each block maps to a fixed run of output lines: container tags stand on
//! their own lines, list items and paragraph text each get one line, and
//! paragraph lines are separated by a `<br/>` line. Inline substitution is
//! applied to every piece of text at this point, never to Raw lines.
//!
//! The fragment is the emitted lines joined with `\n`, with no trailing
//! newline. Serialization cannot fail, and running it twice over the same
//! document yields byte-identical output.

use crate::inline::apply_inline_styles;
use crate::ir::{Block, Document};

/// Render the block IR as an HTML fragment.
pub fn serialize_to_html(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Heading { level, text } => {
                lines.push(format!(
                    "<h{level}>{}</h{level}>",
                    apply_inline_styles(text)
                ));
            }
            Block::List { ordered, items } => {
                lines.push(open_tag(*ordered).to_string());
                for item in items {
                    lines.push(format!("<li>{}</li>", apply_inline_styles(item)));
                }
                lines.push(close_tag(*ordered).to_string());
            }
            Block::Paragraph { lines: text_lines } => {
                lines.push("<p>".to_string());
                for (i, text) in text_lines.iter().enumerate() {
                    if i > 0 {
                        lines.push("<br/>".to_string());
                    }
                    lines.push(apply_inline_styles(text));
                }
                lines.push("</p>".to_string());
            }
            Block::Raw(raw) => lines.push(raw.clone()),
        }
    }

    lines.join("\n")
}

fn open_tag(ordered: bool) -> &'static str {
    if ordered {
        "<ol>"
    } else {
        "<ul>"
    }
}

fn close_tag(ordered: bool) -> &'static str {
    if ordered {
        "</ol>"
    } else {
        "</ul>"
    }
}
