// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON mapping for structured messages.
//!
//! 64-bit integers are written as strings, bytes as standard base64, enums by
//! name and non-finite floats as `"NaN"`, `"Infinity"` or `"-Infinity"`.
//! Field order follows the schema.

use crate::descriptor::{FieldDescriptor, Kind, MessageDescriptor};
use crate::error::ProtoError;
use crate::text::parse_integer;
use crate::value::{DynamicMessage, Value};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value as Json;

/// Encoder switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarshalOptions {
    /// Use schema field names instead of lowerCamelCase JSON names.
    pub use_proto_names: bool,
}

/// Decoder switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnmarshalOptions {
    /// Skip fields the schema does not know instead of failing.
    pub discard_unknown: bool,
}

/// Serializable view of a message, usable with any serde serializer.
#[derive(Debug, Clone, Copy)]
pub struct JsonMessage<'a> {
    message: &'a DynamicMessage,
    options: MarshalOptions,
}

impl<'a> JsonMessage<'a> {
    pub fn new(message: &'a DynamicMessage, options: MarshalOptions) -> Self {
        Self { message, options }
    }
}

impl Serialize for JsonMessage<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.message.len()))?;
        for (field, value) in self.message.fields() {
            let key = if self.options.use_proto_names {
                field.name.to_string()
            } else {
                field.json_name()
            };
            map.serialize_entry(
                &key,
                &JsonValue {
                    field,
                    value,
                    options: self.options,
                },
            )?;
        }
        map.end()
    }
}

struct JsonValue<'a> {
    field: &'static FieldDescriptor,
    value: &'a Value,
    options: MarshalOptions,
}

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::I64(v) => serializer.collect_str(v),
            Value::U64(v) => serializer.collect_str(v),
            Value::F32(v) if v.is_finite() => serializer.serialize_f32(*v),
            Value::F32(v) => float(serializer, f64::from(*v)),
            Value::F64(v) => float(serializer, *v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Bytes(v) => serializer.serialize_str(&STANDARD.encode(v)),
            Value::Enum(n) => match self.field.kind {
                Kind::Enum(desc) => match desc.name_of(*n) {
                    Some(name) => serializer.serialize_str(name),
                    None => serializer.serialize_i32(*n),
                },
                _ => serializer.serialize_i32(*n),
            },
            Value::Message(m) => JsonMessage::new(m, self.options).serialize(serializer),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&JsonValue {
                        field: self.field,
                        value: item,
                        options: self.options,
                    })?;
                }
                seq.end()
            }
        }
    }
}

fn float<S: Serializer>(serializer: S, v: f64) -> Result<S::Ok, S::Error> {
    if v.is_nan() {
        serializer.serialize_str("NaN")
    } else if v.is_infinite() {
        serializer.serialize_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        serializer.serialize_f64(v)
    }
}

/// Encode a message as a `serde_json::Value`.
pub fn to_value(message: &DynamicMessage, options: MarshalOptions) -> Result<Json, ProtoError> {
    Ok(serde_json::to_value(JsonMessage::new(message, options))?)
}

/// Decode JSON bytes against a schema.
pub fn from_slice(
    input: &[u8],
    descriptor: &'static MessageDescriptor,
    options: &UnmarshalOptions,
) -> Result<DynamicMessage, ProtoError> {
    let json: Json = serde_json::from_slice(input)?;
    from_value(&json, descriptor, options)
}

/// Decode a parsed JSON document against a schema.
///
/// Both JSON names and schema names are accepted; `null` leaves a field unset.
pub fn from_value(
    json: &Json,
    descriptor: &'static MessageDescriptor,
    options: &UnmarshalOptions,
) -> Result<DynamicMessage, ProtoError> {
    let Json::Object(object) = json else {
        return Err(ProtoError::invalid(
            descriptor.full_name,
            "an object",
            describe(json),
        ));
    };

    let mut message = DynamicMessage::new(descriptor);
    for (key, value) in object {
        let Some(field) = descriptor.field_by_json_name(key) else {
            if options.discard_unknown {
                continue;
            }
            return Err(ProtoError::UnknownField {
                message: descriptor.full_name,
                field: key.clone(),
            });
        };
        if value.is_null() {
            continue;
        }
        if field.repeated {
            let Json::Array(items) = value else {
                return Err(ProtoError::invalid(field.name, "an array", describe(value)));
            };
            for item in items {
                message.push(field.number, element(field, item, options)?);
            }
        } else {
            message.set(field.number, element(field, value, options)?);
        }
    }
    Ok(message)
}

fn element(
    field: &FieldDescriptor,
    json: &Json,
    options: &UnmarshalOptions,
) -> Result<Value, ProtoError> {
    let mismatch = || ProtoError::invalid(field.name, field.kind.name(), describe(json));

    let value = match field.kind {
        Kind::Bool => Value::Bool(json.as_bool().ok_or_else(mismatch)?),
        Kind::Int32 => Value::I32(integer(json).ok_or_else(mismatch)?),
        Kind::Int64 => Value::I64(integer(json).ok_or_else(mismatch)?),
        Kind::Uint32 => Value::U32(integer(json).ok_or_else(mismatch)?),
        Kind::Uint64 => Value::U64(integer(json).ok_or_else(mismatch)?),
        Kind::Float => Value::F32(floating(json).ok_or_else(mismatch)? as f32),
        Kind::Double => Value::F64(floating(json).ok_or_else(mismatch)?),
        Kind::String => Value::String(json.as_str().ok_or_else(mismatch)?.to_string()),
        Kind::Bytes => {
            let text = json.as_str().ok_or_else(mismatch)?;
            Value::Bytes(STANDARD.decode(text).map_err(|source| ProtoError::Base64 {
                field: field.name.to_string(),
                source,
            })?)
        }
        Kind::Enum(desc) => match json {
            Json::String(name) => Value::Enum(desc.number_of(name).ok_or_else(mismatch)?),
            _ => Value::Enum(integer(json).ok_or_else(mismatch)?),
        },
        Kind::Message(descriptor) => Value::Message(from_value(json, descriptor(), options)?),
    };
    Ok(value)
}

fn integer<T: TryFrom<i128>>(json: &Json) -> Option<T> {
    let wide = match json {
        Json::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(v), _) => i128::from(v),
            (None, Some(v)) => i128::from(v),
            _ => return None,
        },
        Json::String(s) => parse_integer(s)?,
        _ => return None,
    };
    T::try_from(wide).ok()
}

fn floating(json: &Json) -> Option<f64> {
    match json {
        Json::Number(n) => n.as_f64(),
        Json::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            other => other.parse().ok(),
        },
        _ => None,
    }
}

fn describe(json: &Json) -> String {
    match json {
        Json::Null => "null".to_string(),
        Json::Bool(b) => format!("bool {b}"),
        Json::Number(n) => format!("number {n}"),
        Json::String(s) => format!("string {s:?}"),
        Json::Array(_) => "an array".to_string(),
        Json::Object(_) => "an object".to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
