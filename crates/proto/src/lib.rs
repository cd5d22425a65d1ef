// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema-described structured messages for gilt.
//!
//! Message types describe themselves with a static [`MessageDescriptor`] and
//! convert to and from a [`DynamicMessage`]. On top of that this crate
//! provides the two encodings golden files use:
//!
//! - [`text`]: the human-readable text format with a deterministic formatter
//! - [`json`]: the canonical JSON mapping

pub mod descriptor;
pub mod error;
pub mod json;
pub mod message;
pub mod text;
pub mod value;
pub mod wrappers;

pub use descriptor::{EnumDescriptor, FieldDescriptor, Kind, MessageDescriptor};
pub use error::ProtoError;
pub use message::Message;
pub use value::{DynamicMessage, Value};

#[cfg(test)]
mod test_fixtures;
