// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static message schemas.
//!
//! Descriptors are plain `'static` data so message types can declare them in a
//! `static` item. Nested message kinds refer to their schema through a function
//! pointer, which keeps recursive messages expressible.

use std::fmt;

/// Schema of a structured message.
pub struct MessageDescriptor {
    /// Fully qualified name, e.g. `google.protobuf.StringValue`.
    pub full_name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// Look up a field by its number.
    pub fn field(&self, number: u32) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.number == number)
    }

    /// Look up a field by its schema name.
    pub fn field_by_name(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by its schema name or its JSON name.
    pub fn field_by_json_name(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.field_by_name(name)
            .or_else(|| self.fields.iter().find(|f| f.json_name() == name))
    }
}

impl PartialEq for MessageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl fmt::Debug for MessageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("full_name", &self.full_name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Schema of one message field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub number: u32,
    pub kind: Kind,
    pub repeated: bool,
}

impl FieldDescriptor {
    /// Singular field.
    pub const fn new(name: &'static str, number: u32, kind: Kind) -> Self {
        Self {
            name,
            number,
            kind,
            repeated: false,
        }
    }

    /// Repeated field.
    pub const fn repeated(name: &'static str, number: u32, kind: Kind) -> Self {
        Self {
            name,
            number,
            kind,
            repeated: true,
        }
    }

    /// lowerCamelCase name used by the JSON mapping.
    pub fn json_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut upper = false;
        for c in self.name.chars() {
            if c == '_' {
                upper = true;
            } else if upper {
                out.push(c.to_ascii_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Value kind of a field.
#[derive(Clone, Copy)]
pub enum Kind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    String,
    Bytes,
    Enum(&'static EnumDescriptor),
    Message(fn() -> &'static MessageDescriptor),
}

impl Kind {
    /// Short human readable name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Enum(_) => "enum",
            Kind::Message(_) => "message",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Enum(e) => write!(f, "Enum({})", e.full_name),
            Kind::Message(m) => write!(f, "Message({})", m().full_name),
            other => f.write_str(other.name()),
        }
    }
}

/// Schema of an enum: names paired with numbers.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub full_name: &'static str,
    pub values: &'static [(&'static str, i32)],
}

impl EnumDescriptor {
    pub fn name_of(&self, number: i32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(_, n)| *n == number)
            .map(|(name, _)| *name)
    }

    pub fn number_of(&self, name: &str) -> Option<i32> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, number)| *number)
    }
}
