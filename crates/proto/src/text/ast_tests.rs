// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn scalar(node: &Node) -> &Literal {
    match &node.value {
        NodeValue::Scalar(literal) => literal,
        other => panic!("expected scalar, got {other:?}"),
    }
}

#[test]
fn test_parse_scalars_and_separators() {
    let block = parse("a: 1, b: \"x\"; c: TRUE").unwrap();
    let names: Vec<_> = block.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(scalar(&block.nodes[0]), &Literal::Number("1".into()));
    assert_eq!(scalar(&block.nodes[1]), &Literal::Str(b"x".to_vec()));
    assert_eq!(scalar(&block.nodes[2]), &Literal::Ident("TRUE".into()));
}

#[test]
fn test_parse_records_colon_before_message() {
    let block = parse("with: { x: 1 } without { x: 2 }").unwrap();
    assert!(block.nodes[0].colon);
    assert!(!block.nodes[1].colon);
    assert!(matches!(block.nodes[1].value, NodeValue::Message(_)));
}

#[test]
fn test_parse_angle_bracket_message() {
    let block = parse("m < x: 1 >").unwrap();
    let NodeValue::Message(inner) = &block.nodes[0].value else {
        panic!("expected message");
    };
    assert_eq!(inner.nodes[0].name, "x");
}

#[test]
fn test_parse_concatenates_adjacent_strings() {
    let block = parse(r#"s: 'ab' "c\n""#).unwrap();
    assert_eq!(scalar(&block.nodes[0]), &Literal::Str(b"abc\n".to_vec()));
}

#[test]
fn test_parse_negative_values() {
    let block = parse("a: -5 b: -inf c: -1.5e-3").unwrap();
    assert_eq!(scalar(&block.nodes[0]), &Literal::Number("-5".into()));
    assert_eq!(scalar(&block.nodes[1]), &Literal::Ident("-inf".into()));
    assert_eq!(scalar(&block.nodes[2]), &Literal::Number("-1.5e-3".into()));
}

#[test]
fn test_parse_lists() {
    let block = parse("l: [1, 2] m: [{ a: 1 }, { a: 2 }] e: []").unwrap();
    let NodeValue::List(items) = &block.nodes[0].value else {
        panic!("expected list");
    };
    assert_eq!(items.len(), 2);
    let NodeValue::List(items) = &block.nodes[1].value else {
        panic!("expected list");
    };
    assert!(matches!(items[1], ListItem::Message(_)));
    assert_eq!(block.nodes[2].value, NodeValue::List(Vec::new()));
}

#[test]
fn test_parse_keeps_comments() {
    let block = parse("# leading\na: 1 # after\nb {\n  # inner\n}\n# trailing\n").unwrap();
    assert_eq!(block.nodes[0].comments, vec!["# leading"]);
    assert_eq!(block.nodes[1].comments, vec!["# after"]);
    let NodeValue::Message(inner) = &block.nodes[1].value else {
        panic!("expected message");
    };
    assert_eq!(inner.trailing_comments, vec!["# inner"]);
    assert_eq!(block.trailing_comments, vec!["# trailing"]);
}

#[test]
fn test_parse_string_escapes() {
    let block = parse(r#"s: "\t\x41\101\u00e9\\""#).unwrap();
    assert_eq!(
        scalar(&block.nodes[0]),
        &Literal::Str("\tAAé\\".as_bytes().to_vec())
    );
}

#[test]
fn test_parse_reports_position() {
    let err = parse("a: 1\nb: ?").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at line 2, column 4: unexpected character '?'"
    );
}

#[test]
fn test_parse_rejects_malformed_input() {
    for input in ["a: {", "a", "a: \"open", "a: 1 }", "a: [1 2]", "a: \"\\q\""] {
        assert!(
            matches!(parse(input), Err(ProtoError::Syntax { .. })),
            "accepted {input:?}"
        );
    }
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse("").unwrap(), Block::default());
    assert_eq!(parse("  \n\t").unwrap(), Block::default());
}
