//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; each test parses one and compares the
//! JSON rendering of its blocks against an expectation written inline.


use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::models::{Block, ListType};
use crate::parsing::{ParseOptions, UnterminatedFence, parse_document, parse_document_with};

fn parse_fixture(name: &str) -> Value {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(md.as_str());
    invariants::check(&md, &doc);

    serde_json::to_value(doc.content()).unwrap()
}

// Fixture-based tests

#[test]
fn fixture_headings() {
    assert_eq!(
        parse_fixture("headings"),
        json!([
            {"type": "heading", "level": 1, "text": "Heading 1", "id": "heading-1"},
            {"type": "heading", "level": 2, "text": "Heading 2", "id": "heading-2"},
            {"type": "heading", "level": 3, "text": "Heading 3", "id": "heading-3"},
            {"type": "paragraph", "text": "####### too deep"},
            {"type": "paragraph", "text": "#missing space"},
        ])
    );
}

#[test]
fn fixture_mixed_lists() {
    assert_eq!(
        parse_fixture("mixed_lists"),
        json!([
            {"type": "list", "listType": "unordered", "items": ["Bullet 1", "Bullet 2", "Bullet 3"]},
            {"type": "list", "listType": "ordered", "items": ["Number 1", "Number 2"]},
            {"type": "list", "listType": "unordered", "items": ["After two blanks"]},
        ])
    );
}

#[test]
fn fixture_code_fences() {
    assert_eq!(
        parse_fixture("code_fences"),
        json!([
            {"type": "code", "language": "javascript", "content": ["const x = 5;", "console.log(x);"]},
            {"type": "code", "language": "text", "content": ["# not a heading", "", "- not a list", "    indented"]},
            {"type": "paragraph", "text": "After."},
        ])
    );
}

#[test]
fn fixture_rules_and_quotes() {
    assert_eq!(
        parse_fixture("rules_and_quotes"),
        json!([
            {"type": "hr"},
            {"type": "hr"},
            {"type": "hr"},
            {"type": "blockquote", "text": "This is a quote"},
            {"type": "blockquote", "text": "Another line"},
            {"type": "paragraph", "text": ">not a quote"},
        ])
    );
}

#[test]
fn fixture_full_document() {
    assert_eq!(
        parse_fixture("full_document"),
        json!([
            {"type": "heading", "level": 1, "text": "Project Notes", "id": "project-notes"},
            {"type": "paragraph", "text": "Some intro text."},
            {"type": "heading", "level": 2, "text": "Tasks", "id": "tasks"},
            {"type": "list", "listType": "unordered", "items": ["Write parser", "Write tests"]},
            {"type": "heading", "level": 2, "text": "Example", "id": "example"},
            {"type": "code", "language": "rust", "content": ["fn main() {", "    println!(\"hi\");", "}"]},
            {"type": "blockquote", "text": "Remember to ship."},
            {"type": "hr"},
            {"type": "paragraph", "text": "The end."},
        ])
    );
}

// Property tests

#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.content().is_empty());
    assert_eq!(doc.raw(), "");
    assert!(doc.metadata().is_empty());
}

#[test]
fn none_is_empty_document() {
    let doc = parse_document(None);
    assert!(doc.content().is_empty());
    assert_eq!(doc.raw(), "");
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n\n");
    assert!(doc.content().is_empty());
    assert_eq!(doc.raw(), "\n\n\n");
}

#[test]
fn skips_empty_lines() {
    let doc = parse_document("\n\n# Title\n\n\n\nParagraph\n\n\n");
    assert_eq!(doc.content().len(), 2);
}

#[test]
fn raw_is_passed_through() {
    let inputs = [
        "# Heading\n",
        "- a\n- b",
        "```\nunterminated",
        "  trailing spaces  \r\n",
        "# 你好世界 🌍\n\nТекст на русском",
    ];
    for input in inputs {
        assert_eq!(parse_document(input).raw(), input, "raw mismatch for {input:?}");
    }
}

#[test]
fn lists_split_by_type() {
    let doc = parse_document("- a\n- b\n\n1. c\n2. d");
    assert_eq!(
        doc.content(),
        &[
            Block::List {
                list_type: ListType::Unordered,
                items: vec!["a".to_string(), "b".to_string()],
            },
            Block::List {
                list_type: ListType::Ordered,
                items: vec!["c".to_string(), "d".to_string()],
            },
        ]
    );
}

#[test]
fn code_fence_with_language() {
    let doc = parse_document("```js\ncode\n```");
    assert_eq!(
        doc.content(),
        &[Block::Code {
            language: "js".to_string(),
            content: vec!["code".to_string()],
        }]
    );
}

#[test]
fn unterminated_fence_is_flushed() {
    let doc = parse_document("```\nonly code");
    assert_eq!(
        doc.content(),
        &[Block::Code {
            language: "text".to_string(),
            content: vec!["only code".to_string()],
        }]
    );
}

#[test]
fn unterminated_fence_drop_option() {
    let options = ParseOptions {
        unterminated_fence: UnterminatedFence::Drop,
        ..ParseOptions::default()
    };
    let doc = parse_document_with("```\nonly code", &options);
    assert!(doc.content().is_empty());
}

#[test]
fn unicode_passes_through() {
    let doc = parse_document("# 你好世界 🌍\n\nТекст на русском");
    let Block::Heading { text, .. } = &doc.content()[0] else {
        panic!("expected heading, got {:?}", doc.content()[0]);
    };
    assert_eq!(text, "你好世界 🌍");
    assert_eq!(
        doc.content()[1],
        Block::Paragraph {
            text: "Текст на русском".to_string()
        }
    );
}

#[test]
fn crlf_line_endings() {
    let doc = parse_document("# Title\r\n- a\r\n- b\r\n");
    assert_eq!(doc.content().len(), 2);
    assert_eq!(
        doc.content()[1],
        Block::List {
            list_type: ListType::Unordered,
            items: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn crlf_inside_code_fence_is_normalized() {
    let doc = parse_document("```js\r\nlet a = 1;\r\n  indented\t\r\n```\r\nafter\r\n");
    assert_eq!(
        doc.content(),
        &[
            Block::Code {
                language: "js".to_string(),
                content: vec!["let a = 1;".to_string(), "  indented\t".to_string()],
            },
            Block::Paragraph {
                text: "after".to_string()
            },
        ]
    );
    assert_eq!(doc.raw(), "```js\r\nlet a = 1;\r\n  indented\t\r\n```\r\nafter\r\n");
}

#[test]
fn long_paragraph_line() {
    let md = format!("# Title\n\n{}", "Paragraph. ".repeat(1000));
    let doc = parse_document(md.as_str());
    assert_eq!(doc.content().len(), 2);
}

#[test]
fn thousand_item_list() {
    let md = (0..1000)
        .map(|i| format!("- item {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let doc = parse_document(md.as_str());

    assert_eq!(doc.content().len(), 1);
    let Block::List { list_type, items } = &doc.content()[0] else {
        panic!("expected list");
    };
    assert_eq!(*list_type, ListType::Unordered);
    assert_eq!(items.len(), 1000);
    assert_eq!(items[999], "item 999");
}

#[test]
fn normalize_option_cleans_before_parsing() {
    let input = "• first\n• second\n\n\n\nEnd.## Summary";
    let options = ParseOptions {
        normalize: true,
        ..ParseOptions::default()
    };
    let doc = parse_document_with(input, &options);

    assert_eq!(doc.raw(), input);
    assert_eq!(
        serde_json::to_value(doc.content()).unwrap(),
        json!([
            {"type": "list", "listType": "unordered", "items": ["first", "second"]},
            {"type": "paragraph", "text": "End."},
            {"type": "heading", "level": 2, "text": "Summary", "id": "summary"},
        ])
    );
}
