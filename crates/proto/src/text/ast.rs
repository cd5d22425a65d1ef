// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema-free syntax tree for the text format.
//!
//! The tree keeps comments so the formatter can reproduce them; the decoder
//! ignores them.

use super::lexer::{syntax_error, tokenize, Pos, Token};
use crate::error::ProtoError;

/// A message body: fields plus comments after the last field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub nodes: Vec<Node>,
    pub trailing_comments: Vec<String>,
}

/// One `name: value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub comments: Vec<String>,
    pub name: String,
    /// Whether a colon followed the name in the source.
    pub colon: bool,
    pub value: NodeValue,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Scalar(Literal),
    Message(Block),
    List(Vec<ListItem>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Scalar(Literal),
    Message(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Adjacent string literals are concatenated.
    Str(Vec<u8>),
    Number(String),
    Ident(String),
}

impl Literal {
    pub fn describe(&self) -> String {
        match self {
            Literal::Str(bytes) => format!("string {:?}", String::from_utf8_lossy(bytes)),
            Literal::Number(n) => format!("number {n}"),
            Literal::Ident(i) => format!("identifier {i}"),
        }
    }
}

/// Parse text format input into a syntax tree.
pub fn parse(input: &str) -> Result<Block, ProtoError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, index: 0 };
    let block = parser.block(None)?;
    Ok(block)
}

struct Parser {
    tokens: Vec<(Token, Pos)>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(t, _)| t)
    }

    fn pos(&self) -> Pos {
        match self.tokens.get(self.index).or_else(|| self.tokens.last()) {
            Some((_, pos)) => *pos,
            None => Pos { line: 1, column: 1 },
        }
    }

    fn next(&mut self) -> Option<(Token, Pos)> {
        let item = self.tokens.get(self.index).cloned();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn comments(&mut self) -> Vec<String> {
        let mut comments = Vec::new();
        while let Some(Token::Comment(text)) = self.peek() {
            comments.push(text.clone());
            self.index += 1;
        }
        comments
    }

    /// Parse fields until `close` (or end of input at top level).
    fn block(&mut self, close: Option<char>) -> Result<Block, ProtoError> {
        let mut block = Block::default();
        loop {
            let comments = self.comments();
            let pos = self.pos();
            match self.next() {
                None => {
                    if let Some(c) = close {
                        return Err(syntax_error(pos, format!("expected {c:?} before end of input")));
                    }
                    block.trailing_comments = comments;
                    return Ok(block);
                }
                Some((Token::Close(c), pos)) => {
                    if Some(c) != close {
                        return Err(syntax_error(pos, format!("unexpected {c:?}")));
                    }
                    block.trailing_comments = comments;
                    return Ok(block);
                }
                Some((Token::Ident(name), pos)) => {
                    let mut node = self.field(name, pos)?;
                    node.comments = comments;
                    block.nodes.push(node);
                    if matches!(self.peek(), Some(Token::Comma | Token::Semicolon)) {
                        self.index += 1;
                    }
                }
                Some((token, pos)) => {
                    return Err(syntax_error(pos, format!("expected field name, found {token:?}")))
                }
            }
        }
    }

    fn field(&mut self, name: String, pos: Pos) -> Result<Node, ProtoError> {
        let colon = matches!(self.peek(), Some(Token::Colon));
        if colon {
            self.index += 1;
        }
        let value = match self.peek() {
            Some(Token::Open(_)) => NodeValue::Message(self.message()?),
            Some(Token::LBracket) => NodeValue::List(self.list()?),
            _ if colon => NodeValue::Scalar(self.literal()?),
            _ => {
                return Err(syntax_error(
                    self.pos(),
                    format!("expected ':' or '{{' after field {name}"),
                ))
            }
        };
        Ok(Node {
            comments: Vec::new(),
            name,
            colon,
            value,
            pos,
        })
    }

    fn message(&mut self) -> Result<Block, ProtoError> {
        match self.next() {
            Some((Token::Open(open), _)) => {
                let close = if open == '<' { '>' } else { '}' };
                self.block(Some(close))
            }
            _ => Err(syntax_error(self.pos(), "expected '{'")),
        }
    }

    fn list(&mut self) -> Result<Vec<ListItem>, ProtoError> {
        self.index += 1;
        let mut items = Vec::new();
        loop {
            self.comments();
            match self.peek() {
                Some(Token::RBracket) => {
                    self.index += 1;
                    return Ok(items);
                }
                Some(Token::Open(_)) => items.push(ListItem::Message(self.message()?)),
                _ => items.push(ListItem::Scalar(self.literal()?)),
            }
            self.comments();
            match self.next() {
                Some((Token::Comma, _)) => {}
                Some((Token::RBracket, _)) => return Ok(items),
                _ => return Err(syntax_error(self.pos(), "expected ',' or ']' in list")),
            }
        }
    }

    fn literal(&mut self) -> Result<Literal, ProtoError> {
        let pos = self.pos();
        match self.next() {
            Some((Token::Str(mut bytes), _)) => {
                while let Some(Token::Str(more)) = self.peek() {
                    bytes.extend_from_slice(more);
                    self.index += 1;
                }
                Ok(Literal::Str(bytes))
            }
            Some((Token::Number(n), _)) => Ok(Literal::Number(n)),
            Some((Token::Ident(i), _)) => Ok(Literal::Ident(i)),
            Some((Token::Minus, _)) => match self.next() {
                Some((Token::Number(n), _)) => Ok(Literal::Number(format!("-{n}"))),
                Some((Token::Ident(i), _)) => Ok(Literal::Ident(format!("-{i}"))),
                _ => Err(syntax_error(pos, "expected number after '-'")),
            },
            Some((token, pos)) => Err(syntax_error(pos, format!("expected value, found {token:?}"))),
            None => Err(syntax_error(pos, "expected value before end of input")),
        }
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
