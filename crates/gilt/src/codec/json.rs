// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{decode_fresh, Codec};
use crate::error::Result;
use crate::subject::{Form, FormMut, Subject};
use gilt_proto::json::{self, JsonMessage, MarshalOptions, UnmarshalOptions};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Stores values as JSON.
///
/// Structured messages go through the message JSON mapping, everything else
/// through serde. Output is always pretty-printed with two-space indentation
/// and ends with a single newline, independent of the encoder's own layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pub marshal_options: MarshalOptions,
    pub unmarshal_options: UnmarshalOptions,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for JsonCodec {
    fn marshal<T: Subject>(&self, value: &T) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"  "));

        match value.form() {
            Form::Message(message) => {
                let dynamic = message.to_dynamic();
                JsonMessage::new(&dynamic, self.marshal_options).serialize(&mut serializer)?;
            }
            _ => value.serialize(&mut serializer)?,
        }

        if !out.is_empty() {
            out.push(b'\n');
        }
        Ok(out)
    }

    fn unmarshal_into<T: Subject>(&self, data: &[u8], dest: &mut T) -> Result<()> {
        let descriptor = match dest.form() {
            Form::Message(message) => Some(message.descriptor()),
            _ => None,
        };
        let Some(descriptor) = descriptor else {
            *dest = serde_json::from_slice(data)?;
            return Ok(());
        };

        let dynamic = json::from_slice(data, descriptor, &self.unmarshal_options)?;
        decode_fresh(dest, |form| match form {
            FormMut::Message(message) => Ok(message.merge_dynamic(&dynamic)?),
            _ => Ok(()),
        })
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
