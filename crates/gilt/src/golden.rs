// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The assertion engine.

use crate::codec::{self, Codec, JsonCodec};
use crate::compare::{Cmp, CmpOption, Comparer};
use crate::error::{Error, Result};
use crate::escape::escape_name;
use crate::global::GLOBAL;
use crate::report::{Libtest, Reporter};
use crate::storage::{DirStorage, Storage};
use crate::subject::Subject;
use crate::value::{normalize, validate, Operand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where an assertion reads the update switch from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// The process-wide switch, see [`init`](crate::init).
    #[default]
    Process,
    Enabled,
    Disabled,
}

/// What a successful assertion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The golden file matched.
    Unchanged,
    /// The golden file was created or rewritten.
    Written { bytes: usize },
}

/// Golden file assertions for one directory or storage.
///
/// ```no_run
/// use gilt::Golden;
///
/// let golden = Golden::new("tests/testdata");
/// let mut names = vec!["olivia".to_string(), "liam".to_string()];
/// names.sort();
/// golden.assert("sorted names", &names);
/// ```
#[derive(Debug, Clone)]
pub struct Golden<C = JsonCodec, P = Cmp> {
    storage: Arc<dyn Storage>,
    codec: C,
    comparer: P,
    updates: UpdateMode,
}

impl Golden {
    /// Golden files in `dir`, JSON encoded, compared with [`Cmp`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_storage(DirStorage::new(dir))
    }

    pub fn with_storage(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
            codec: JsonCodec::default(),
            comparer: Cmp::default(),
            updates: UpdateMode::Process,
        }
    }
}

impl<C, P> Golden<C, P> {
    pub fn codec<C2: Codec>(self, codec: C2) -> Golden<C2, P> {
        Golden {
            storage: self.storage,
            codec,
            comparer: self.comparer,
            updates: self.updates,
        }
    }

    pub fn comparer<P2: Comparer>(self, comparer: P2) -> Golden<C, P2> {
        Golden {
            storage: self.storage,
            codec: self.codec,
            comparer,
            updates: self.updates,
        }
    }

    /// Replace the comparer with a [`Cmp`] using `options`.
    pub fn cmp_options(self, options: Vec<CmpOption>) -> Golden<C, Cmp> {
        self.comparer(Cmp::with_options(options))
    }

    pub fn update_mode(mut self, updates: UpdateMode) -> Self {
        self.updates = updates;
        self
    }

    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    pub fn updates_enabled(&self) -> bool {
        match self.updates {
            UpdateMode::Process => GLOBAL.updates_enabled(),
            UpdateMode::Enabled => true,
            UpdateMode::Disabled => false,
        }
    }
}

impl<C: Codec, P: Comparer> Golden<C, P> {
    /// Assert that `value` matches the golden file for `name`, failing the
    /// current test otherwise.
    ///
    /// In update mode a missing, undecodable or different golden file is
    /// rewritten instead. The name is percent-escaped to form the file name.
    pub fn assert<'a, T, V>(&self, name: &str, value: V)
    where
        T: Subject,
        V: Into<Operand<'a, T>>,
    {
        self.assert_with(&Libtest, name, value);
    }

    /// [`assert`](Self::assert) reporting through `reporter`.
    pub fn assert_with<'a, T, V>(&self, reporter: &dyn Reporter, name: &str, value: V)
    where
        T: Subject,
        V: Into<Operand<'a, T>>,
    {
        if let Err(err) = self.check(name, value, reporter) {
            reporter.fail(&err.to_string());
        }
    }

    /// Run one assertion and return its result instead of reporting it.
    /// `reporter` only receives log lines.
    pub fn check<'a, T, V>(
        &self,
        name: &str,
        value: V,
        reporter: &dyn Reporter,
    ) -> Result<Outcome>
    where
        T: Subject,
        V: Into<Operand<'a, T>>,
    {
        let operand = value.into();
        validate(&operand)?;

        let (value, value_type) = normalize(operand).into_parts();
        let (Some(value), Some(value_type)) = (value, value_type) else {
            return Err(Error::InvalidValue("value must not be absent".to_string()));
        };

        let bytes = self.verified_marshal(&*value)?;
        let id = escape_name(name)?;
        let updates = self.updates_enabled();

        match self.read_golden::<T>(&id) {
            Ok(want) => match self.comparer.equal(&want, &*value) {
                Ok(()) => {
                    debug!(name = %id, %value_type, "golden file matches");
                    return Ok(Outcome::Unchanged);
                }
                Err(err) if updates => reporter.log(&err.to_string()),
                Err(err) => return Err(err),
            },
            Err(err) if updates && err.is_repairable() => {
                warn!(name = %id, error = %err, "rewriting golden file");
            }
            Err(err) => return Err(err),
        }

        self.write_golden(&id, &bytes, reporter)
    }

    /// Marshal `value` and check the codec reproduces it.
    fn verified_marshal<T: Subject>(&self, value: &T) -> Result<Vec<u8>> {
        let bytes = self.codec.marshal(value)?;
        let restored: T = codec::unmarshal(&self.codec, &bytes)
            .map_err(|err| Error::RoundtripMismatch(Box::new(err)))?;
        self.comparer
            .equal(value, &restored)
            .map_err(|err| Error::RoundtripMismatch(Box::new(err)))?;
        Ok(bytes)
    }

    fn read_golden<T: Subject>(&self, id: &str) -> Result<T> {
        let data = self.storage.read(id).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::GoldenMissing {
                    name: id.to_string(),
                    source,
                }
            } else {
                Error::Read {
                    name: id.to_string(),
                    source,
                }
            }
        })?;
        debug!(name = %id, bytes = data.len(), "read golden file");

        codec::unmarshal(&self.codec, &data).map_err(|source| Error::GoldenDecodeFailed {
            name: id.to_string(),
            source: Box::new(source),
        })
    }

    fn write_golden(&self, id: &str, bytes: &[u8], reporter: &dyn Reporter) -> Result<Outcome> {
        let Some(writer) = self.storage.as_writable() else {
            return Err(Error::UpdateNotSupported {
                storage: format!("{:?}", self.storage),
            });
        };
        writer.write(id, bytes).map_err(|source| Error::Write {
            name: id.to_string(),
            source,
        })?;

        debug!(name = %id, bytes = bytes.len(), "wrote golden file");
        reporter.log(&format!(
            "Wrote {} bytes to golden file {:?}.",
            bytes.len(),
            id
        ));
        Ok(Outcome::Written { bytes: bytes.len() })
    }
}

#[cfg(test)]
#[path = "golden_tests.rs"]
mod tests;
