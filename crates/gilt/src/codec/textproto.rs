// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{decode_fresh, Codec};
use crate::error::{Error, Result};
use crate::subject::{Form, FormMut, Subject};
use gilt_proto::text::{self, DecodeOptions, FormatConfig};

/// Stores structured messages in the text format.
///
/// The encoder's compact output is reformatted with a deterministic
/// pretty-printer, so files stay stable across encoder changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextProtoCodec {
    pub unmarshal_options: DecodeOptions,
    pub format: FormatConfig,
}

impl TextProtoCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for TextProtoCodec {
    fn marshal<T: Subject>(&self, value: &T) -> Result<Vec<u8>> {
        let Form::Message(message) = value.form() else {
            return Err(Error::InvalidValue(format!(
                "only structured messages can be marshalled as textproto, got {}",
                std::any::type_name::<T>()
            )));
        };
        let compact = text::encode(&message.to_dynamic());
        Ok(text::format(&compact, &self.format)?.into_bytes())
    }

    fn unmarshal_into<T: Subject>(&self, data: &[u8], dest: &mut T) -> Result<()> {
        let descriptor = match dest.form() {
            Form::Message(message) => message.descriptor(),
            _ => {
                return Err(Error::InvalidValue(format!(
                    "only structured messages can be unmarshalled from textproto, got {}",
                    std::any::type_name::<T>()
                )))
            }
        };
        let input = std::str::from_utf8(data)?;
        let dynamic = text::decode(input, descriptor, &self.unmarshal_options)?;
        decode_fresh(dest, |form| match form {
            FormMut::Message(message) => Ok(message.merge_dynamic(&dynamic)?),
            _ => Ok(()),
        })
    }
}

#[cfg(test)]
#[path = "textproto_tests.rs"]
mod tests;
