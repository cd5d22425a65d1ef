// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known single-value wrapper messages.

use crate::descriptor::{FieldDescriptor, Kind, MessageDescriptor};
use crate::error::ProtoError;
use crate::message::Message;
use crate::value::{DynamicMessage, Value};
use serde::{Deserialize, Serialize};

macro_rules! wrapper {
    ($(#[$doc:meta])* $name:ident, $full:literal, $ty:ty, $kind:ident, $variant:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub value: $ty,
        }

        impl $name {
            pub fn new(value: impl Into<$ty>) -> Self {
                Self { value: value.into() }
            }

            /// Static schema of this message type.
            pub fn schema() -> &'static MessageDescriptor {
                static FIELDS: [FieldDescriptor; 1] =
                    [FieldDescriptor::new("value", 1, Kind::$kind)];
                static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
                    full_name: $full,
                    fields: &FIELDS,
                };
                &DESCRIPTOR
            }
        }

        impl Message for $name {
            fn descriptor(&self) -> &'static MessageDescriptor {
                Self::schema()
            }

            fn to_dynamic(&self) -> DynamicMessage {
                let mut message = DynamicMessage::new(Self::schema());
                message.set(1, Value::$variant(self.value.clone()));
                message
            }

            fn merge_dynamic(&mut self, message: &DynamicMessage) -> Result<(), ProtoError> {
                if message.descriptor() != Self::schema() {
                    return Err(ProtoError::InvalidValue {
                        field: $full.to_string(),
                        expected: "a message of the same type",
                        found: message.descriptor().full_name.to_string(),
                    });
                }
                self.value = match message.get(1) {
                    Some(Value::$variant(v)) => v.clone(),
                    Some(other) => {
                        return Err(ProtoError::invalid(
                            "value",
                            Kind::$kind.name(),
                            other.type_name(),
                        ))
                    }
                    None => <$ty>::default(),
                };
                Ok(())
            }
        }
    };
}

wrapper!(
    /// Wrapper for a `string`.
    StringValue, "google.protobuf.StringValue", String, String, String
);
wrapper!(
    /// Wrapper for `bytes`.
    BytesValue, "google.protobuf.BytesValue", Vec<u8>, Bytes, Bytes
);
wrapper!(
    /// Wrapper for an `int32`.
    Int32Value, "google.protobuf.Int32Value", i32, Int32, I32
);
wrapper!(
    /// Wrapper for an `int64`.
    Int64Value, "google.protobuf.Int64Value", i64, Int64, I64
);
wrapper!(
    /// Wrapper for a `uint32`.
    UInt32Value, "google.protobuf.UInt32Value", u32, Uint32, U32
);
wrapper!(
    /// Wrapper for a `uint64`.
    UInt64Value, "google.protobuf.UInt64Value", u64, Uint64, U64
);
wrapper!(
    /// Wrapper for a `bool`.
    BoolValue, "google.protobuf.BoolValue", bool, Bool, Bool
);
wrapper!(
    /// Wrapper for a `float`.
    FloatValue, "google.protobuf.FloatValue", f32, Float, F32
);
wrapper!(
    /// Wrapper for a `double`.
    DoubleValue, "google.protobuf.DoubleValue", f64, Double, F64
);

#[cfg(test)]
#[path = "wrappers_tests.rs"]
mod tests;
