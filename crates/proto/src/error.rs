// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for message encoding and decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("unknown field {field:?} in message {message}")]
    UnknownField {
        message: &'static str,
        field: String,
    },

    #[error("field {field} expects {expected}, found {found}")]
    InvalidValue {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("non-repeated field {field} is specified multiple times")]
    DuplicateField { field: String },

    #[error("field {field} is not valid UTF-8")]
    InvalidUtf8 { field: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base64 in field {field}: {source}")]
    Base64 {
        field: String,
        #[source]
        source: base64::DecodeError,
    },
}

impl ProtoError {
    pub(crate) fn invalid(field: &str, expected: &'static str, found: impl Into<String>) -> Self {
        ProtoError::InvalidValue {
            field: field.to_string(),
            expected,
            found: found.into(),
        }
    }
}
