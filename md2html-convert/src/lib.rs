//! Markdown to HTML fragment conversion
//!
//!     This crate turns a small Markdown dialect (headings, flat lists,
//!     paragraphs, a handful of inline spans) into an HTML fragment. It powers
//!     the md2html CLI but is shell agnostic, that is no code here should
//!     suppose a shell environment, be it to std print, env vars etc.
//!
//! Architecture
//!
//!     The conversion is split in two halves around a small block-level IR
//!     (./ir.rs): the markdown parser classifies input lines and folds them
//!     into blocks, and the html serializer walks the blocks and emits the
//!     output lines. Keeping text raw in the IR and rewriting inline spans
//!     only at serialization time means the inline rules compose in their
//!     documented order no matter which block the text came from.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # Line classification + block parser
//!     │   ├── html                # Block serializer (the only real output)
//!     │   └── treeviz             # Block tree visualization (inspect views)
//!     ├── inline.rs               # Inline span substitution
//!     ├── ir.rs                   # Block-level intermediate representation
//!     └── lib.rs
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait.
//!     Formats have a parse() and/or serialize() method, a name and file
//!     extensions, see the trait def [./format.rs]. The FormatRegistry holds
//!     the built-in set and resolves names and file extensions.
//!
//!     Markdown is parse-only and html is serialize-only; round tripping is a
//!     non goal. Two of the inline rules (digest, letter stripping) are
//!     one-way rewrites, so even the text level is not reversible.
//!
//! Library Choices
//!
//!     Inline spans are rewritten with the regex crate rather than a hand
//!     written scanner; the rules are literally pattern replaces and the
//!     non-greedy matching they need comes for free. The digest span uses the
//!     RustCrypto md-5 crate with hex encoding. The digest choice is part of
//!     the output contract: MD5, rendered as 32 lowercase hex characters.

pub mod error;
pub mod format;
pub mod formats;
pub mod inline;
pub mod ir;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;

use crate::formats::markdown::MarkdownOptions;

/// Convert Markdown source to an HTML fragment in one call.
///
/// Equivalent to parsing with [`formats::markdown::parser::parse_with_options`]
/// and serializing with [`formats::html::serializer::serialize_to_html`].
pub fn markdown_to_html(source: &str, options: &MarkdownOptions) -> String {
    let doc = formats::markdown::parser::parse_with_options(source, options);
    formats::html::serializer::serialize_to_html(&doc)
}
