//! Treeviz formatter for the block IR
//!
//! A visual, line-based rendering of the parsed blocks, used by the CLI
//! inspect command. The node structure is encoded with tree connectors and
//! each node carries an icon and a label truncated to 30 characters:
//!
//!     ⧉ document
//!     ├─ § h1 Title
//!     ├─ ¶ 2 lines
//!     │  ├─ ↵ This paragraph has two li…
//!     │  └─ ↵ and this is the second.
//!     └─ ☰ 2 items
//!        ├─ • first
//!        └─ • second
//!
//! Icons
//!     Document: ⧉
//!     Heading: §
//!     Paragraph: ¶
//!     TextLine: ↵
//!     List: ☰
//!     ListItem: •
//!     Raw line: ℣

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::{Block, Document};

const LABEL_MAX: usize = 30;

/// Format implementation for the tree visualization
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Block tree visualization"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}

/// Render the block tree as text.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = String::from("⧉ document\n");
    let count = doc.blocks.len();

    for (index, block) in doc.blocks.iter().enumerate() {
        let is_last = index == count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        match block {
            Block::Heading { level, text } => {
                let label = if text.is_empty() {
                    format!("h{level}")
                } else {
                    format!("h{level} {text}")
                };
                push_node(&mut output, "", connector, "§", &label);
            }
            Block::List { ordered, items } => {
                let kind = if *ordered { "ordered" } else { "unordered" };
                let label = format!("{kind}, {} item{}", items.len(), plural(items.len()));
                push_node(&mut output, "", connector, "☰", &label);
                push_children(&mut output, child_prefix, "•", items);
            }
            Block::Paragraph { lines } => {
                let label = format!("{} line{}", lines.len(), plural(lines.len()));
                push_node(&mut output, "", connector, "¶", &label);
                push_children(&mut output, child_prefix, "↵", lines);
            }
            Block::Raw(raw) => push_node(&mut output, "", connector, "℣", raw),
        }
    }

    output
}

fn push_node(output: &mut String, prefix: &str, connector: &str, icon: &str, label: &str) {
    let line = format!("{prefix}{connector} {icon} {}", truncate_label(label));
    output.push_str(line.trim_end());
    output.push('\n');
}

fn push_children(output: &mut String, prefix: &str, icon: &str, children: &[String]) {
    let count = children.len();
    for (index, child) in children.iter().enumerate() {
        let connector = if index == count - 1 { "└─" } else { "├─" };
        push_node(output, prefix, connector, icon, child);
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(LABEL_MAX).collect();
    truncated.push('…');
    truncated
}
