// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping between test names and golden file identifiers.
//!
//! Everything except ASCII alphanumerics and `-_.~` is percent-encoded, so
//! identifiers never contain path separators and distinct names never share
//! an identifier. Names made only of dots have their dots encoded too, which
//! keeps `.` and `..` from addressing directories.

use crate::error::{Error, Result};

/// Golden file identifier for a test name.
pub fn escape_name(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: String::new(),
            reason: "name must not be empty".to_string(),
        });
    }
    if name.bytes().all(|b| b == b'.') {
        return Ok("%2E".repeat(name.len()));
    }
    Ok(urlencoding::encode(name).into_owned())
}

/// Test name for a golden file identifier.
pub fn unescape_name(id: &str) -> Result<String> {
    let name = urlencoding::decode(id).map_err(|err| Error::InvalidName {
        name: id.to_string(),
        reason: err.to_string(),
    })?;
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: id.to_string(),
            reason: "identifier must not be empty".to_string(),
        });
    }
    Ok(name.into_owned())
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
