//! Import tests for the Markdown format (Markdown → block IR)
//!
//! These tests exercise parsing through the Format trait the way the CLI
//! does, plus the option-taking entry point for the policy knobs.

use md2html_convert::format::Format;
use md2html_convert::formats::markdown::parser::parse_with_options;
use md2html_convert::formats::markdown::{HeadingOverflow, MarkdownFormat, MarkdownOptions};
use md2html_convert::ir::Block;

#[test]
fn format_metadata_and_capabilities() {
    assert_eq!(MarkdownFormat.name(), "markdown");
    assert_eq!(MarkdownFormat.file_extensions(), &["md", "markdown"]);
    assert!(MarkdownFormat.supports_parsing());
    assert!(!MarkdownFormat.supports_serialization());
}

#[test]
fn parse_via_format_trait_uses_default_options() {
    let doc = MarkdownFormat.parse("-tight\n####### deep\n").unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::List {
                ordered: false,
                items: vec!["tight".to_string()],
            },
            Block::Raw("####### deep".to_string()),
        ]
    );
}

#[test]
fn every_heading_level_parses() {
    let source = "# a\n## b\n### c\n#### d\n##### e\n###### f\n";
    let doc = MarkdownFormat.parse(source).unwrap();
    let levels: Vec<usize> = doc
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading { level, .. } => *level,
            other => panic!("expected heading, got {other:?}"),
        })
        .collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn marker_only_lines_produce_empty_elements() {
    let doc = MarkdownFormat.parse("-\n*\n#\n").unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::List {
                ordered: false,
                items: vec![String::new()],
            },
            Block::List {
                ordered: true,
                items: vec![String::new()],
            },
            Block::Heading {
                level: 1,
                text: String::new(),
            },
        ]
    );
}

#[test]
fn clamp_policy_turns_overflow_into_h6() {
    let options = MarkdownOptions {
        heading_overflow: HeadingOverflow::Clamp,
        ..Default::default()
    };
    let doc = parse_with_options("######## deep\n", &options);
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 6,
            text: "deep".to_string(),
        }]
    );
}

#[test]
fn strict_markers_turn_tight_items_into_paragraph_text() {
    let options = MarkdownOptions {
        strict_list_markers: true,
        ..Default::default()
    };
    let doc = parse_with_options("-tight\n", &options);
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            lines: vec!["-tight".to_string()],
        }]
    );
}

#[test]
fn mixed_document_produces_expected_block_sequence() {
    let source = "# Title\n\nintro\ncontinues\n\n- one\n- two\n* first\ntrailing\n";
    let doc = MarkdownFormat.parse(source).unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "Title".to_string(),
            },
            Block::Paragraph {
                lines: vec!["intro".to_string(), "continues".to_string()],
            },
            Block::List {
                ordered: false,
                items: vec!["one".to_string(), "two".to_string()],
            },
            Block::List {
                ordered: true,
                items: vec!["first".to_string()],
            },
            Block::Paragraph {
                lines: vec!["trailing".to_string()],
            },
        ]
    );
}

#[test]
fn crlf_input_parses_like_lf_input() {
    let lf = MarkdownFormat.parse("# Title\n\ntext\n").unwrap();
    let crlf = MarkdownFormat.parse("# Title\r\n\r\ntext\r\n").unwrap();
    assert_eq!(lf, crlf);
}
