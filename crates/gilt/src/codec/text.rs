// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{decode_fresh, Codec, JsonCodec};
use crate::error::{Error, Result};
use crate::subject::{Form, FormMut, Subject};

/// Stores values as plain text.
///
/// Handles byte buffers, strings, rune sequences and types with their own
/// text encoding. Anything else goes to the fallback codec, if one is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec<F = JsonCodec> {
    pub fallback: Option<F>,
}

impl TextCodec {
    /// Text codec without a fallback.
    pub fn new() -> Self {
        Self { fallback: None }
    }
}

impl<F: Codec> TextCodec<F> {
    pub fn with_fallback(fallback: F) -> Self {
        Self {
            fallback: Some(fallback),
        }
    }
}

impl<F: Codec> Codec for TextCodec<F> {
    fn marshal<T: Subject>(&self, value: &T) -> Result<Vec<u8>> {
        match value.form() {
            Form::Bytes(bytes) => return Ok(bytes.to_vec()),
            Form::Str(s) => return Ok(s.as_bytes().to_vec()),
            Form::Runes(runes) => return Ok(runes.iter().collect::<String>().into_bytes()),
            Form::Text(text) => return text.marshal_text(),
            Form::Message(_) | Form::Data => {}
        }

        match &self.fallback {
            Some(fallback) => fallback.marshal(value),
            None => Err(Error::UnsupportedType {
                operation: "marshalling as text",
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    fn unmarshal_into<T: Subject>(&self, data: &[u8], dest: &mut T) -> Result<()> {
        match dest.form_mut() {
            FormMut::Bytes(bytes) => {
                *bytes = data.to_vec();
                return Ok(());
            }
            FormMut::Str(s) => {
                *s = std::str::from_utf8(data)?.to_string();
                return Ok(());
            }
            FormMut::Runes(runes) => {
                *runes = std::str::from_utf8(data)?.chars().collect();
                return Ok(());
            }
            FormMut::Text(_) | FormMut::Message(_) | FormMut::Data => {}
        }

        if let Form::Text(_) = dest.form() {
            return decode_fresh(dest, |form| match form {
                FormMut::Text(text) => text.unmarshal_text(data),
                _ => Ok(()),
            });
        }

        match &self.fallback {
            Some(fallback) => fallback.unmarshal_into(data, dest),
            None => Err(Error::UnsupportedType {
                operation: "unmarshalling text into",
                type_name: std::any::type_name::<T>(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
