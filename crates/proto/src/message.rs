// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The structured message capability.

use crate::descriptor::MessageDescriptor;
use crate::error::ProtoError;
use crate::value::DynamicMessage;
use std::fmt;

/// Implemented by schema-defined structured messages.
///
/// Encoders work on the [`DynamicMessage`] a message produces; decoders build
/// a dynamic message from the schema and hand it back through
/// [`merge_dynamic`](Message::merge_dynamic).
pub trait Message: fmt::Debug {
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// Snapshot of the set fields.
    fn to_dynamic(&self) -> DynamicMessage;

    /// Overwrite fields present in `message`; absent fields take their
    /// default value.
    fn merge_dynamic(&mut self, message: &DynamicMessage) -> Result<(), ProtoError>;
}

impl Message for DynamicMessage {
    fn descriptor(&self) -> &'static MessageDescriptor {
        DynamicMessage::descriptor(self)
    }

    fn to_dynamic(&self) -> DynamicMessage {
        self.clone()
    }

    fn merge_dynamic(&mut self, message: &DynamicMessage) -> Result<(), ProtoError> {
        if message.descriptor() != DynamicMessage::descriptor(self) {
            return Err(ProtoError::InvalidValue {
                field: self.descriptor().full_name.to_string(),
                expected: "a message of the same type",
                found: message.descriptor().full_name.to_string(),
            });
        }
        *self = message.clone();
        Ok(())
    }
}
