//! Core data structures for the block-level intermediate representation.
//!
//! All entities here are transient: a [`Document`] is built by one parse
//! call, handed to a serializer, and dropped. Text is stored raw; inline
//! span substitution is applied by the HTML serializer, not here.

/// The root of a parsed document: an ordered run of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading, level 1 through 6. The text is the remainder after the
    /// marker run, trimmed.
    Heading { level: usize, text: String },
    /// A contiguous run of same-kind list items. Items hold the trimmed
    /// remainder after the marker; an item may be empty.
    List { ordered: bool, items: Vec<String> },
    /// One or more consecutive paragraph lines, each fully trimmed.
    Paragraph { lines: Vec<String> },
    /// A line passed through to the output unchanged (heading marker runs
    /// longer than six under the verbatim overflow policy).
    Raw(String),
}

impl Document {
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
