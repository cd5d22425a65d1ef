// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file assertions.
//!
//! A [`Golden`] stores the expected serialized form of a value in a file and,
//! on later runs, checks that a freshly produced value serializes to an equal
//! value. With update mode enabled (see [`global`]) missing, undecodable or
//! outdated golden files are rewritten instead of failing the test.
//!
//! ```no_run
//! use gilt::{Golden, TextCodec};
//!
//! let golden = Golden::new("tests/testdata").codec(TextCodec::new());
//! golden.assert("greeting", &"hello world\n".to_string());
//! ```
//!
//! Every assertion marshals the value, decodes the bytes again and compares
//! the result with the original before touching the golden file, so a lossy
//! codec is reported as [`Error::RoundtripMismatch`] rather than as a
//! mismatch against the file.

pub mod codec;
pub mod compare;
pub mod error;
pub mod escape;
pub mod global;
pub mod golden;
pub mod report;
pub mod storage;
pub mod subject;
pub mod value;

pub use codec::{Codec, JsonCodec, TextCodec, TextProtoCodec};
pub use compare::{Cmp, CmpOption, Comparer};
pub use error::{Error, Result};
pub use escape::{escape_name, unescape_name};
pub use global::{init, with_flag_name, InitOption, DEFAULT_UPDATE_FLAG_NAME};
pub use golden::{Golden, Outcome, UpdateMode};
pub use report::{Libtest, Recorder, Reporter};
pub use storage::{DirStorage, MapStorage, Storage, WriteStorage};
pub use subject::{Subject, TextMarshal, TextUnmarshal};
pub use value::Operand;

pub use gilt_proto as proto;

#[cfg(test)]
mod test_support;
