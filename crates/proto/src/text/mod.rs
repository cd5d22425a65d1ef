// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The text format ("textproto").
//!
//! [`encode`] produces a compact single-line rendering whose spacing is not
//! meant to be stable; [`format`] turns any text format input into the
//! canonical multi-line layout. [`decode`] accepts both.

pub mod ast;
mod format;
mod lexer;

pub use format::{format, print, FormatConfig};
pub use lexer::Pos;

use crate::descriptor::{FieldDescriptor, Kind, MessageDescriptor};
use crate::error::ProtoError;
use crate::value::{DynamicMessage, Value};
use ast::{Block, ListItem, Literal, NodeValue};
use format::quote;
use std::collections::HashSet;
use std::str::FromStr;

/// Decoder switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Skip fields the schema does not know instead of failing.
    pub discard_unknown: bool,
}

/// Compact text encoding of a message.
pub fn encode(message: &DynamicMessage) -> String {
    let mut out = String::new();
    write_message(&mut out, message);
    out
}

/// Encode and pretty-print with the default [`FormatConfig`].
pub fn to_string_pretty(message: &DynamicMessage) -> Result<String, ProtoError> {
    format(&encode(message), &FormatConfig::default())
}

fn write_message(out: &mut String, message: &DynamicMessage) {
    for (field, value) in message.fields() {
        match value {
            Value::List(items) => {
                for item in items {
                    write_field(out, field, item);
                }
            }
            other => write_field(out, field, other),
        }
    }
}

fn write_field(out: &mut String, field: &FieldDescriptor, value: &Value) {
    if !out.is_empty() && !out.ends_with('{') {
        out.push(' ');
    }
    out.push_str(field.name);
    out.push_str(": ");
    write_value(out, field, value);
}

fn write_value(out: &mut String, field: &FieldDescriptor, value: &Value) {
    match value {
        Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Value::I32(v) => out.push_str(&v.to_string()),
        Value::I64(v) => out.push_str(&v.to_string()),
        Value::U32(v) => out.push_str(&v.to_string()),
        Value::U64(v) => out.push_str(&v.to_string()),
        Value::F32(v) => out.push_str(&float_text(f64::from(*v), v.to_string())),
        Value::F64(v) => out.push_str(&float_text(*v, v.to_string())),
        Value::String(v) => out.push_str(&quote(v.as_bytes())),
        Value::Bytes(v) => out.push_str(&quote(v)),
        Value::Enum(n) => match field.kind {
            Kind::Enum(desc) => match desc.name_of(*n) {
                Some(name) => out.push_str(name),
                None => out.push_str(&n.to_string()),
            },
            _ => out.push_str(&n.to_string()),
        },
        Value::Message(m) => {
            out.push('{');
            write_message(out, m);
            out.push('}');
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, field, item);
            }
            out.push(']');
        }
    }
}

fn float_text(v: f64, finite: String) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        finite
    }
}

/// Decode text format input against a schema.
pub fn decode(
    input: &str,
    descriptor: &'static MessageDescriptor,
    options: &DecodeOptions,
) -> Result<DynamicMessage, ProtoError> {
    let block = ast::parse(input)?;
    convert_block(&block, descriptor, options)
}

fn convert_block(
    block: &Block,
    descriptor: &'static MessageDescriptor,
    options: &DecodeOptions,
) -> Result<DynamicMessage, ProtoError> {
    let mut message = DynamicMessage::new(descriptor);
    let mut seen = HashSet::new();

    for node in &block.nodes {
        let Some(field) = descriptor.field_by_name(&node.name) else {
            if options.discard_unknown {
                continue;
            }
            return Err(ProtoError::UnknownField {
                message: descriptor.full_name,
                field: node.name.clone(),
            });
        };

        match &node.value {
            NodeValue::List(items) => {
                if !field.repeated {
                    return Err(ProtoError::invalid(
                        field.name,
                        "a single value",
                        "a list",
                    ));
                }
                for item in items {
                    let value = match item {
                        ListItem::Scalar(literal) => scalar(field, literal)?,
                        ListItem::Message(inner) => message_value(field, inner, options)?,
                    };
                    message.push(field.number, value);
                }
            }
            NodeValue::Scalar(literal) => {
                let value = scalar(field, literal)?;
                add(&mut message, &mut seen, field, value)?;
            }
            NodeValue::Message(inner) => {
                let value = message_value(field, inner, options)?;
                add(&mut message, &mut seen, field, value)?;
            }
        }
    }

    Ok(message)
}

fn add(
    message: &mut DynamicMessage,
    seen: &mut HashSet<u32>,
    field: &FieldDescriptor,
    value: Value,
) -> Result<(), ProtoError> {
    if field.repeated {
        message.push(field.number, value);
    } else if !seen.insert(field.number) {
        return Err(ProtoError::DuplicateField {
            field: field.name.to_string(),
        });
    } else {
        message.set(field.number, value);
    }
    Ok(())
}

fn message_value(
    field: &FieldDescriptor,
    block: &Block,
    options: &DecodeOptions,
) -> Result<Value, ProtoError> {
    match field.kind {
        Kind::Message(descriptor) => Ok(Value::Message(convert_block(
            block,
            descriptor(),
            options,
        )?)),
        other => Err(ProtoError::invalid(field.name, other.name(), "a message")),
    }
}

fn scalar(field: &FieldDescriptor, literal: &Literal) -> Result<Value, ProtoError> {
    let mismatch = || ProtoError::invalid(field.name, field.kind.name(), literal.describe());

    let value = match field.kind {
        Kind::Bool => match literal {
            Literal::Ident(i) if matches!(i.as_str(), "true" | "True" | "t") => Value::Bool(true),
            Literal::Ident(i) if matches!(i.as_str(), "false" | "False" | "f") => {
                Value::Bool(false)
            }
            Literal::Number(n) if n == "1" => Value::Bool(true),
            Literal::Number(n) if n == "0" => Value::Bool(false),
            _ => return Err(mismatch()),
        },
        Kind::Int32 => Value::I32(integer(literal).ok_or_else(mismatch)?),
        Kind::Int64 => Value::I64(integer(literal).ok_or_else(mismatch)?),
        Kind::Uint32 => Value::U32(integer(literal).ok_or_else(mismatch)?),
        Kind::Uint64 => Value::U64(integer(literal).ok_or_else(mismatch)?),
        Kind::Float => Value::F32(
            float(literal, f32::INFINITY, f32::NEG_INFINITY, f32::NAN).ok_or_else(mismatch)?,
        ),
        Kind::Double => Value::F64(
            float(literal, f64::INFINITY, f64::NEG_INFINITY, f64::NAN).ok_or_else(mismatch)?,
        ),
        Kind::String => match literal {
            Literal::Str(bytes) => {
                Value::String(String::from_utf8(bytes.clone()).map_err(|_| {
                    ProtoError::InvalidUtf8 {
                        field: field.name.to_string(),
                    }
                })?)
            }
            _ => return Err(mismatch()),
        },
        Kind::Bytes => match literal {
            Literal::Str(bytes) => Value::Bytes(bytes.clone()),
            _ => return Err(mismatch()),
        },
        Kind::Enum(desc) => match literal {
            Literal::Ident(name) => Value::Enum(desc.number_of(name).ok_or_else(mismatch)?),
            Literal::Number(_) => Value::Enum(integer(literal).ok_or_else(mismatch)?),
            Literal::Str(_) => return Err(mismatch()),
        },
        Kind::Message(_) => return Err(mismatch()),
    };
    Ok(value)
}

/// Decimal or `0x` hexadecimal integer, optionally negative.
pub(crate) fn parse_integer(text: &str) -> Option<i128> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let value = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i128>().ok()?,
    };
    Some(if negative { -value } else { value })
}

fn integer<T: TryFrom<i128>>(literal: &Literal) -> Option<T> {
    match literal {
        Literal::Number(n) => T::try_from(parse_integer(n)?).ok(),
        _ => None,
    }
}

fn float<F: FromStr>(literal: &Literal, inf: F, neg_inf: F, nan: F) -> Option<F> {
    match literal {
        Literal::Number(n) => {
            let n = n.strip_suffix(['f', 'F']).unwrap_or(n);
            if n.starts_with("0x") || n.starts_with("-0x") {
                return None;
            }
            n.parse().ok()
        }
        Literal::Ident(i) => match i.to_ascii_lowercase().as_str() {
            "inf" | "infinity" => Some(inf),
            "-inf" | "-infinity" => Some(neg_inf),
            "nan" | "-nan" => Some(nan),
            _ => None,
        },
        Literal::Str(_) => None,
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
