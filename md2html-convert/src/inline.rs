//! Inline span substitution
//!
//! Rewrites the recognized inline spans inside one line of text destined for
//! output. The four rules run in a fixed order, each over the result of the
//! previous one, scanning left-to-right for the shortest closing delimiter:
//!
//! 1. `**X**` → `<b>X</b>`
//! 2. `__X__` → `<em>X</em>`
//! 3. `[[X]]` → MD5 digest of X, 32 lowercase hex characters
//! 4. `((X))` → X with every `c`/`C` removed
//!
//! Unmatched opening delimiters are left as literal text. Source text is not
//! HTML-escaped. The digest and stripping rules are one-way; only the whole
//! conversion is deterministic, not idempotent.

use md5::{Digest, Md5};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static DIGEST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
static STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\((.+?)\)\)").unwrap());

/// Apply all inline substitution rules to one line of text.
pub fn apply_inline_styles(text: &str) -> String {
    let text = BOLD.replace_all(text, "<b>$1</b>");
    let text = EMPHASIS.replace_all(&text, "<em>$1</em>");
    let text = DIGEST.replace_all(&text, |caps: &Captures| md5_hex(&caps[1]));
    let text = STRIP.replace_all(&text, |caps: &Captures| strip_target_letters(&caps[1]));
    text.into_owned()
}

/// MD5 of the exact byte content, rendered as lowercase hex.
fn md5_hex(content: &str) -> String {
    hex::encode(Md5::digest(content.as_bytes()))
}

/// Remove every occurrence of the target letter, case-insensitively.
fn strip_target_letters(content: &str) -> String {
    content
        .chars()
        .filter(|ch| !ch.eq_ignore_ascii_case(&'c'))
        .collect()
}
