// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer for the text format.

use crate::error::ProtoError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    /// Numeric literal as written, sign included.
    Number(String),
    /// Unescaped string literal bytes.
    Str(Vec<u8>),
    /// Comment text including the leading `#`.
    Comment(String),
    Colon,
    Comma,
    Semicolon,
    Minus,
    /// `{` or `<`.
    Open(char),
    /// `}` or `>`.
    Close(char),
    LBracket,
    RBracket,
}

/// One-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

pub(crate) fn syntax_error(pos: Pos, message: impl Into<String>) -> ProtoError {
    ProtoError::Syntax {
        line: pos.line,
        column: pos.column,
        message: message.into(),
    }
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<(Token, Pos)>, ProtoError> {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn pos(&self) -> Pos {
        Pos {
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.offset + ahead).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.offset += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if b & 0xC0 != 0x80 {
            // Count characters, not UTF-8 continuation bytes.
            self.column += 1;
        }
        Some(b)
    }

    fn run(mut self) -> Result<Vec<(Token, Pos)>, ProtoError> {
        let mut tokens = Vec::new();
        while let Some(b) = self.peek() {
            let pos = self.pos();
            let token = match b {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.bump();
                    continue;
                }
                b'#' => Token::Comment(self.comment()),
                b':' => self.single(Token::Colon),
                b',' => self.single(Token::Comma),
                b';' => self.single(Token::Semicolon),
                b'{' | b'<' => self.single(Token::Open(b as char)),
                b'}' | b'>' => self.single(Token::Close(b as char)),
                b'[' => self.single(Token::LBracket),
                b']' => self.single(Token::RBracket),
                b'-' => self.single(Token::Minus),
                b'"' | b'\'' => Token::Str(self.string(pos)?),
                b'0'..=b'9' | b'.' => Token::Number(self.number()),
                b if b.is_ascii_alphabetic() || b == b'_' => Token::Ident(self.ident()),
                other => {
                    return Err(syntax_error(
                        pos,
                        format!("unexpected character {:?}", other as char),
                    ))
                }
            };
            tokens.push((token, pos));
        }
        Ok(tokens)
    }

    fn single(&mut self, token: Token) -> Token {
        self.bump();
        token
    }

    fn comment(&mut self) -> String {
        let start = self.offset;
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.bump();
        }
        String::from_utf8_lossy(&self.bytes[start..self.offset])
            .trim_end()
            .to_string()
    }

    fn ident(&mut self) -> String {
        let start = self.offset;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' {
                self.bump();
            } else {
                break;
            }
        }
        String::from_utf8_lossy(&self.bytes[start..self.offset]).into_owned()
    }

    fn number(&mut self) -> String {
        let start = self.offset;
        let hex = self.peek() == Some(b'0') && matches!(self.peek_at(1), Some(b'x' | b'X'));
        while let Some(b) = self.peek() {
            let exponent_sign = !hex
                && (b == b'+' || b == b'-')
                && matches!(self.bytes.get(self.offset - 1), Some(b'e' | b'E'));
            if b.is_ascii_alphanumeric() || b == b'.' || exponent_sign {
                self.bump();
            } else {
                break;
            }
        }
        String::from_utf8_lossy(&self.bytes[start..self.offset]).into_owned()
    }

    fn string(&mut self, start: Pos) -> Result<Vec<u8>, ProtoError> {
        let quote = self.bump();
        let mut out = Vec::new();
        loop {
            let pos = self.pos();
            match self.bump() {
                None | Some(b'\n') => return Err(syntax_error(start, "unterminated string")),
                Some(b) if Some(b) == quote => return Ok(out),
                Some(b'\\') => self.escape(pos, &mut out)?,
                Some(b) => out.push(b),
            }
        }
    }

    fn escape(&mut self, pos: Pos, out: &mut Vec<u8>) -> Result<(), ProtoError> {
        let Some(b) = self.bump() else {
            return Err(syntax_error(pos, "unterminated escape sequence"));
        };
        match b {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'v' => out.push(0x0B),
            b'\\' | b'\'' | b'"' | b'?' => out.push(b),
            b'0'..=b'7' => {
                let mut value = u32::from(b - b'0');
                for _ in 0..2 {
                    match self.peek() {
                        Some(d @ b'0'..=b'7') => {
                            self.bump();
                            value = value * 8 + u32::from(d - b'0');
                        }
                        _ => break,
                    }
                }
                let byte = u8::try_from(value)
                    .map_err(|_| syntax_error(pos, "octal escape out of range"))?;
                out.push(byte);
            }
            b'x' | b'X' => {
                let value = self.hex_digits(pos, 1, 2)?;
                // At most two hex digits, always fits in a byte.
                out.push((value & 0xFF) as u8);
            }
            b'u' => self.unicode(pos, 4, out)?,
            b'U' => self.unicode(pos, 8, out)?,
            other => {
                return Err(syntax_error(
                    pos,
                    format!("unknown escape sequence \\{}", other as char),
                ))
            }
        }
        Ok(())
    }

    fn hex_digits(&mut self, pos: Pos, min: usize, max: usize) -> Result<u32, ProtoError> {
        let mut value = 0u32;
        let mut count = 0;
        while count < max {
            match self.peek().and_then(|b| (b as char).to_digit(16)) {
                Some(d) => {
                    self.bump();
                    value = value * 16 + d;
                    count += 1;
                }
                None => break,
            }
        }
        if count < min {
            return Err(syntax_error(pos, "expected hex digits in escape sequence"));
        }
        Ok(value)
    }

    fn unicode(&mut self, pos: Pos, digits: usize, out: &mut Vec<u8>) -> Result<(), ProtoError> {
        let value = self.hex_digits(pos, digits, digits)?;
        let c = char::from_u32(value)
            .ok_or_else(|| syntax_error(pos, format!("invalid code point U+{value:X}")))?;
        let mut buf = [0u8; 4];
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }
}
