//! Export tests (Markdown → block IR → HTML fragment)
//!
//! End-to-end conversions over small documents, pinning the exact emitted
//! lines: container tags open and close on their own lines, paragraph lines
//! are joined with `<br/>`, and inline spans rewrite in their fixed order.

use insta::assert_snapshot;
use md2html_convert::format::Format;
use md2html_convert::formats::html::HtmlFormat;
use md2html_convert::formats::markdown::{HeadingOverflow, MarkdownOptions};
use md2html_convert::markdown_to_html;

fn convert(source: &str) -> String {
    markdown_to_html(source, &MarkdownOptions::default())
}

#[test]
fn html_format_is_serialize_only() {
    assert_eq!(HtmlFormat.name(), "html");
    assert!(!HtmlFormat.supports_parsing());
    assert!(HtmlFormat.supports_serialization());
    assert!(HtmlFormat.parse("# x").is_err());
}

#[test]
fn heading_then_paragraph() {
    assert_eq!(
        convert("# Title\n\nHello **world**.\n"),
        "<h1>Title</h1>\n<p>\nHello <b>world</b>.\n</p>"
    );
}

#[test]
fn unordered_then_ordered_list() {
    assert_eq!(
        convert("- a\n- b\n\n* x\n* y\n"),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<ol>\n<li>x</li>\n<li>y</li>\n</ol>"
    );
}

#[test]
fn digest_span_alone_renders_the_hex_digest() {
    assert_eq!(
        convert("[[abc]]"),
        "<p>\n900150983cd24fb0d6963f7d28e17f72\n</p>"
    );
}

#[test]
fn strip_span_alone_removes_target_letters() {
    assert_eq!(convert("((cocoa))"), "<p>\nooa\n</p>");
}

#[test]
fn bare_dash_produces_an_empty_item() {
    assert_eq!(convert("-\n"), "<ul>\n<li></li>\n</ul>");
}

#[test]
fn multi_line_paragraph_gets_break_lines() {
    assert_eq!(
        convert("first\nsecond\nthird\n"),
        "<p>\nfirst\n<br/>\nsecond\n<br/>\nthird\n</p>"
    );
}

#[test]
fn heading_text_is_inline_substituted() {
    assert_eq!(convert("## __quiet__ title\n"), "<h2><em>quiet</em> title</h2>");
}

#[test]
fn overflow_heading_passes_through_without_substitution() {
    assert_eq!(convert("####### **deep**\n"), "####### **deep**");
}

#[test]
fn overflow_heading_clamps_when_configured() {
    let options = MarkdownOptions {
        heading_overflow: HeadingOverflow::Clamp,
        ..Default::default()
    };
    assert_eq!(
        markdown_to_html("####### **deep**\n", &options),
        "<h6><b>deep</b></h6>"
    );
}

#[test]
fn empty_input_converts_to_empty_fragment() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("\n\n"), "");
}

#[test]
fn conversion_is_deterministic() {
    let source = "# T\n\n[[abc]] and ((cocoa))\n\n- item\n";
    assert_eq!(convert(source), convert(source));
}

#[test]
fn kitchensink_document() {
    let source = "\
# Title

Intro paragraph
with a second line.

## Features

- **bold** item
- plain

* first
* second

####### overflow line
";
    assert_snapshot!(convert(source), @r"
    <h1>Title</h1>
    <p>
    Intro paragraph
    <br/>
    with a second line.
    </p>
    <h2>Features</h2>
    <ul>
    <li><b>bold</b> item</li>
    <li>plain</li>
    </ul>
    <ol>
    <li>first</li>
    <li>second</li>
    </ol>
    ####### overflow line
    ");
}
