// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for golden-file assertions.

use std::any::Any;
use std::io;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error from user code (text marshalling, panicking comparers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid golden file name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{operation} {type_name} is not supported")]
    UnsupportedType {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("value differs after marshalling and unmarshalling: {0}")]
    RoundtripMismatch(#[source] Box<Error>),

    #[error("golden file {name:?} is missing: {source}")]
    GoldenMissing {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("unmarshalling golden file {name:?} failed: {source}")]
    GoldenDecodeFailed {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("values are not equal (-want +got):\n{diff}")]
    ValueDifference { diff: String },

    #[error("updating files is not supported: {storage}")]
    UpdateNotSupported { storage: String },

    #[error("reading golden file {name:?}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("writing golden file {name:?}: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Proto(#[from] gilt_proto::ProtoError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("codec error: {0}")]
    Codec(#[source] BoxError),

    #[error("comparison panicked: {0}")]
    ComparisonPanicked(#[source] BoxError),

    #[error("gilt can only be initialized once")]
    AlreadyInitialized,

    #[error("invalid update flag: {0}")]
    Flag(#[from] clap::Error),
}

impl Error {
    /// Wrap an error raised by user encoding code.
    pub fn codec(err: impl Into<BoxError>) -> Self {
        Error::Codec(err.into())
    }

    /// True for the golden file conditions update mode repairs by rewriting.
    pub fn is_repairable(&self) -> bool {
        matches!(
            self,
            Error::GoldenMissing { .. } | Error::GoldenDecodeFailed { .. }
        )
    }

    /// Convert a caught panic payload into an error.
    ///
    /// A payload that already is an [`Error`] is returned unchanged; other
    /// error payloads are kept as the source; strings are used as the message.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(err) => return *err,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<BoxError>() {
            Ok(err) => return Error::ComparisonPanicked(*err),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<io::Error>() {
            Ok(err) => return Error::ComparisonPanicked(err),
            Err(payload) => payload,
        };
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        Error::ComparisonPanicked(message.into())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
