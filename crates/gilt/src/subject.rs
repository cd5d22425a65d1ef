// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Values that can be stored in golden files.
//!
//! Codecs dispatch on the [`Form`] a value exposes rather than on its
//! concrete type. Most types are plain serde data and keep the default
//! [`Form::Data`]; byte buffers, strings, rune sequences, text-encodable types
//! and structured messages expose their capability so codecs can treat them
//! specially.

use crate::error::Result;
use gilt_proto::wrappers::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, StringValue,
    UInt32Value, UInt64Value,
};
use gilt_proto::{DynamicMessage, Message};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

/// Types with their own text encoding.
pub trait TextMarshal {
    fn marshal_text(&self) -> Result<Vec<u8>>;
}

/// Types that decode from their own text encoding.
pub trait TextUnmarshal {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()>;
}

/// Read-only view of a value's encoding capability.
pub enum Form<'a> {
    Bytes(&'a [u8]),
    Str(&'a str),
    Runes(&'a [char]),
    Text(&'a dyn TextMarshal),
    Message(&'a dyn Message),
    Data,
}

/// Mutable view used when decoding into a value.
pub enum FormMut<'a> {
    Bytes(&'a mut Vec<u8>),
    Str(&'a mut String),
    Runes(&'a mut Vec<char>),
    Text(&'a mut dyn TextUnmarshal),
    Message(&'a mut dyn Message),
    Data,
}

impl fmt::Debug for Form<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Form::Bytes(_) => "Bytes",
            Form::Str(_) => "Str",
            Form::Runes(_) => "Runes",
            Form::Text(_) => "Text",
            Form::Message(_) => "Message",
            Form::Data => "Data",
        })
    }
}

/// A value that can be asserted against a golden file.
///
/// `Default` provides the fresh destination every decode starts from.
/// Implement it with an empty body for plain serde types, or use
/// [`text_subject!`](crate::text_subject) and
/// [`message_subject!`](crate::message_subject).
pub trait Subject: Serialize + DeserializeOwned + fmt::Debug + PartialEq + Default + 'static {
    fn form(&self) -> Form<'_> {
        Form::Data
    }

    fn form_mut(&mut self) -> FormMut<'_> {
        FormMut::Data
    }
}

impl Subject for String {
    fn form(&self) -> Form<'_> {
        Form::Str(self)
    }

    fn form_mut(&mut self) -> FormMut<'_> {
        FormMut::Str(self)
    }
}

/// `Vec<u8>` is a byte buffer and `Vec<char>` a rune sequence; every other
/// element type is data.
impl<T: Subject> Subject for Vec<T> {
    fn form(&self) -> Form<'_> {
        let any: &dyn Any = self;
        if let Some(bytes) = any.downcast_ref::<Vec<u8>>() {
            Form::Bytes(bytes)
        } else if let Some(runes) = any.downcast_ref::<Vec<char>>() {
            Form::Runes(runes)
        } else {
            Form::Data
        }
    }

    fn form_mut(&mut self) -> FormMut<'_> {
        let any: &mut dyn Any = self;
        if any.is::<Vec<u8>>() {
            match any.downcast_mut::<Vec<u8>>() {
                Some(bytes) => FormMut::Bytes(bytes),
                None => FormMut::Data,
            }
        } else {
            match any.downcast_mut::<Vec<char>>() {
                Some(runes) => FormMut::Runes(runes),
                None => FormMut::Data,
            }
        }
    }
}

impl<T: Subject> Subject for Option<T> {}

impl<T: Subject> Subject for BTreeMap<String, T> {}

impl Subject for serde_json::Value {}

macro_rules! data_subject {
    ($($ty:ty),* $(,)?) => {
        $(impl Subject for $ty {})*
    };
}

data_subject!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Implement [`Subject`] for a type with [`TextMarshal`] and
/// [`TextUnmarshal`] implementations.
#[macro_export]
macro_rules! text_subject {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Subject for $ty {
                fn form(&self) -> $crate::subject::Form<'_> {
                    $crate::subject::Form::Text(self)
                }

                fn form_mut(&mut self) -> $crate::subject::FormMut<'_> {
                    $crate::subject::FormMut::Text(self)
                }
            }
        )*
    };
}

/// Implement [`Subject`] for a structured message type.
#[macro_export]
macro_rules! message_subject {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Subject for $ty {
                fn form(&self) -> $crate::subject::Form<'_> {
                    $crate::subject::Form::Message(self)
                }

                fn form_mut(&mut self) -> $crate::subject::FormMut<'_> {
                    $crate::subject::FormMut::Message(self)
                }
            }
        )*
    };
}

message_subject!(
    BoolValue,
    BytesValue,
    DoubleValue,
    FloatValue,
    Int32Value,
    Int64Value,
    StringValue,
    UInt32Value,
    UInt64Value,
);

/// True when the value exposes the structured message capability.
pub fn is_message<T: Subject>(value: &T) -> bool {
    matches!(value.form(), Form::Message(_))
}

/// Dynamic form of a message value, if it is one.
pub fn dynamic_message<T: Subject>(value: &T) -> Option<DynamicMessage> {
    match value.form() {
        Form::Message(m) => Some(m.to_dynamic()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
