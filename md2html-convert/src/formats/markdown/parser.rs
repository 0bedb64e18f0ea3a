//! Markdown parsing (line classification + block transducer)
//!
//! Pipeline: source text → per-line classification → block IR.
//!
//! The transducer is a single forward scan. The only state is the block
//! currently being accumulated ([`OpenBlock`]); a line whose classification
//! does not extend that block flushes it first. The scan ends with an
//! unconditional flush, so the produced document never has a half-open list
//! or paragraph no matter how the input ends.

use super::{HeadingOverflow, MarkdownOptions};
use crate::ir::{Block, Document};

/// Classification of one input line.
///
/// Classification happens on the line with trailing whitespace removed;
/// leading whitespace defeats marker recognition and makes the line
/// paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after right-trim.
    Blank,
    /// A `#` run of length 1-6 (or any length under the clamp policy),
    /// followed by a space or end-of-line.
    Heading { level: usize, text: &'a str },
    /// A `-` marker line. Holds the trimmed remainder, possibly empty.
    UnorderedItem(&'a str),
    /// A `*` marker line. Holds the trimmed remainder, possibly empty.
    OrderedItem(&'a str),
    /// A `#` run longer than six under the verbatim policy; emitted as-is.
    Raw(&'a str),
    /// Paragraph text: anything the marker rules do not claim.
    Text(&'a str),
}

impl LineClass<'_> {
    /// Uppercase name used by the line-level inspect views.
    pub fn simple_name(&self) -> &'static str {
        match self {
            LineClass::Blank => "BLANK_LINE",
            LineClass::Heading { .. } => "HEADING_LINE",
            LineClass::UnorderedItem(_) => "UNORDERED_ITEM_LINE",
            LineClass::OrderedItem(_) => "ORDERED_ITEM_LINE",
            LineClass::Raw(_) => "RAW_LINE",
            LineClass::Text(_) => "TEXT_LINE",
        }
    }
}

/// Classify one raw input line.
pub fn classify_line<'a>(line: &'a str, options: &MarkdownOptions) -> LineClass<'a> {
    let line = line.trim_end();
    if line.is_empty() {
        return LineClass::Blank;
    }

    if line.starts_with('#') {
        let run = line.bytes().take_while(|&b| b == b'#').count();
        let rest = &line[run..];
        if rest.is_empty() || rest.starts_with(' ') {
            if (1..=6).contains(&run) {
                return LineClass::Heading {
                    level: run,
                    text: rest.trim(),
                };
            }
            return match options.heading_overflow {
                HeadingOverflow::Verbatim => LineClass::Raw(line),
                HeadingOverflow::Clamp => LineClass::Heading {
                    level: 6,
                    text: rest.trim(),
                },
            };
        }
        // Marker run glued to text is not a heading
        return LineClass::Text(line);
    }

    if let Some(rest) = line.strip_prefix('-') {
        if let Some(item) = list_item_content(rest, options) {
            return LineClass::UnorderedItem(item);
        }
        return LineClass::Text(line);
    }

    if let Some(rest) = line.strip_prefix('*') {
        if let Some(item) = list_item_content(rest, options) {
            return LineClass::OrderedItem(item);
        }
        return LineClass::Text(line);
    }

    LineClass::Text(line)
}

/// The remainder of a list-marker line, or None if the marker does not count
/// as one under the current policy. A bare marker is an empty item under
/// both policies.
fn list_item_content<'a>(rest: &'a str, options: &MarkdownOptions) -> Option<&'a str> {
    if options.strict_list_markers && !(rest.is_empty() || rest.starts_with(' ')) {
        return None;
    }
    Some(rest.trim())
}

/// The block currently being accumulated by the transducer.
#[derive(Debug)]
enum OpenBlock {
    None,
    List { ordered: bool, items: Vec<String> },
    Paragraph { lines: Vec<String> },
}

impl OpenBlock {
    /// Close whatever is open and append it to the finished blocks.
    fn flush_into(&mut self, blocks: &mut Vec<Block>) {
        match std::mem::replace(self, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::List { ordered, items } => blocks.push(Block::List { ordered, items }),
            OpenBlock::Paragraph { lines } => blocks.push(Block::Paragraph { lines }),
        }
    }
}

/// Parse Markdown source into the block IR.
pub fn parse_with_options(source: &str, options: &MarkdownOptions) -> Document {
    let mut blocks = Vec::new();
    let mut open = OpenBlock::None;

    for line in source.lines() {
        match classify_line(line, options) {
            LineClass::Blank => open.flush_into(&mut blocks),
            LineClass::Heading { level, text } => {
                open.flush_into(&mut blocks);
                blocks.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineClass::Raw(raw) => {
                open.flush_into(&mut blocks);
                blocks.push(Block::Raw(raw.to_string()));
            }
            LineClass::UnorderedItem(item) => push_item(&mut open, &mut blocks, false, item),
            LineClass::OrderedItem(item) => push_item(&mut open, &mut blocks, true, item),
            LineClass::Text(text) => match &mut open {
                OpenBlock::Paragraph { lines } => lines.push(text.trim().to_string()),
                _ => {
                    open.flush_into(&mut blocks);
                    open = OpenBlock::Paragraph {
                        lines: vec![text.trim().to_string()],
                    };
                }
            },
        }
    }
    open.flush_into(&mut blocks);

    Document::with_blocks(blocks)
}

/// Extend an open same-kind list, or close whatever is open and start one.
fn push_item(open: &mut OpenBlock, blocks: &mut Vec<Block>, ordered: bool, item: &str) {
    match open {
        OpenBlock::List {
            ordered: open_kind,
            items,
        } if *open_kind == ordered => items.push(item.to_string()),
        _ => {
            open.flush_into(blocks);
            *open = OpenBlock::List {
                ordered,
                items: vec![item.to_string()],
            };
        }
    }
}
