// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic pretty-printer for the text format.
//!
//! Output depends only on the parsed tree, never on the spacing of the input,
//! so reformatting is idempotent.

use super::ast::{parse, Block, ListItem, Literal, Node, NodeValue};
use crate::error::ProtoError;
use std::fmt::Write as _;

const INDENT: &str = "  ";

/// Formatter switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Always put nested message fields on their own lines.
    pub expand_all_children: bool,
    /// Drop colons wherever the grammar allows (before message values).
    pub skip_all_colons: bool,
    /// Split string literals after each embedded newline.
    pub wrap_strings_after_newlines: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            expand_all_children: true,
            skip_all_colons: true,
            wrap_strings_after_newlines: true,
        }
    }
}

/// Parse and pretty-print text format input.
pub fn format(input: &str, config: &FormatConfig) -> Result<String, ProtoError> {
    let block = parse(input)?;
    Ok(print(&block, config))
}

/// Pretty-print a parsed tree. Non-empty output ends with one newline.
pub fn print(block: &Block, config: &FormatConfig) -> String {
    let mut printer = Printer {
        out: String::new(),
        config,
    };
    printer.block(block, 0);
    printer.out
}

struct Printer<'c> {
    out: String,
    config: &'c FormatConfig,
}

impl Printer<'_> {
    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn block(&mut self, block: &Block, depth: usize) {
        for node in &block.nodes {
            self.node(node, depth);
        }
        for comment in &block.trailing_comments {
            self.line(depth, comment);
        }
    }

    fn message_colon(&self, node: &Node) -> &'static str {
        if node.colon && !self.config.skip_all_colons {
            ":"
        } else {
            ""
        }
    }

    fn node(&mut self, node: &Node, depth: usize) {
        for comment in &node.comments {
            self.line(depth, comment);
        }
        match &node.value {
            NodeValue::Scalar(literal) => self.scalar_node(&node.name, literal, depth),
            NodeValue::Message(block) => {
                let colon = self.message_colon(node);
                self.indent(depth);
                let _ = write!(self.out, "{}{} ", node.name, colon);
                self.message_body(block, depth);
                self.out.push('\n');
            }
            NodeValue::List(items) => self.list_node(node, items, depth),
        }
    }

    fn scalar_node(&mut self, name: &str, literal: &Literal, depth: usize) {
        if let Literal::Str(bytes) = literal {
            let segments = split_after_newlines(bytes);
            if self.config.wrap_strings_after_newlines && segments.len() > 1 {
                self.line(depth, &format!("{name}:"));
                for segment in segments {
                    self.line(depth + 1, &quote(segment));
                }
                return;
            }
        }
        self.line(depth, &format!("{name}: {}", render_literal(literal)));
    }

    /// Write `{ ... }` starting at the current column, without a final newline.
    fn message_body(&mut self, block: &Block, depth: usize) {
        if block.nodes.is_empty() && block.trailing_comments.is_empty() {
            self.out.push_str("{}");
        } else if !self.config.expand_all_children && self.inline_ok(block) {
            self.out.push_str("{ ");
            let fields: Vec<String> = block
                .nodes
                .iter()
                .filter_map(|node| match &node.value {
                    NodeValue::Scalar(literal) => {
                        Some(format!("{}: {}", node.name, render_literal(literal)))
                    }
                    _ => None,
                })
                .collect();
            self.out.push_str(&fields.join(" "));
            self.out.push_str(" }");
        } else {
            self.out.push_str("{\n");
            self.block(block, depth + 1);
            self.indent(depth);
            self.out.push('}');
        }
    }

    fn inline_ok(&self, block: &Block) -> bool {
        block.trailing_comments.is_empty()
            && block.nodes.iter().all(|node| {
                node.comments.is_empty()
                    && match &node.value {
                        NodeValue::Scalar(Literal::Str(bytes)) => {
                            !self.config.wrap_strings_after_newlines
                                || split_after_newlines(bytes).len() < 2
                        }
                        NodeValue::Scalar(_) => true,
                        _ => false,
                    }
            })
    }

    fn list_node(&mut self, node: &Node, items: &[ListItem], depth: usize) {
        let scalars: Option<Vec<String>> = items
            .iter()
            .map(|item| match item {
                ListItem::Scalar(literal) => Some(render_literal(literal)),
                ListItem::Message(_) => None,
            })
            .collect();
        if let Some(scalars) = scalars {
            self.line(depth, &format!("{}: [{}]", node.name, scalars.join(", ")));
            return;
        }

        let colon = self.message_colon(node);
        self.line(depth, &format!("{}{} [", node.name, colon));
        for (i, item) in items.iter().enumerate() {
            self.indent(depth + 1);
            match item {
                ListItem::Scalar(literal) => self.out.push_str(&render_literal(literal)),
                ListItem::Message(block) => self.message_body(block, depth + 1),
            }
            if i + 1 < items.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        self.line(depth, "]");
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::Str(bytes) => quote(bytes),
        Literal::Number(n) => n.clone(),
        Literal::Ident(i) => i.clone(),
    }
}

/// Split after every `\n`; a trailing empty piece is dropped.
fn split_after_newlines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut segments: Vec<&[u8]> = bytes.split_inclusive(|b| *b == b'\n').collect();
    if segments.is_empty() {
        segments.push(bytes);
    }
    segments
}

/// Quote bytes as a double-quoted literal. Valid UTF-8 is kept verbatim
/// except for control characters; invalid bytes become octal escapes.
pub(crate) fn quote(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    let mut rest = bytes;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                push_escaped(&mut out, s);
                break;
            }
            Err(err) => {
                let valid = err.valid_up_to();
                push_escaped(
                    &mut out,
                    std::str::from_utf8(&rest[..valid]).unwrap_or_default(),
                );
                let bad = err.error_len().unwrap_or(rest.len() - valid);
                for b in &rest[valid..valid + bad] {
                    let _ = write!(out, "\\{b:03o}");
                }
                rest = &rest[valid + bad..];
            }
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    let _ = write!(out, "\\{b:03o}");
                }
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
