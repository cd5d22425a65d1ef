// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where golden files live.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read access to named byte blobs.
///
/// A missing blob must be reported as [`io::ErrorKind::NotFound`].
pub trait Storage: fmt::Debug + Send + Sync {
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Write access, if this storage supports it.
    fn as_writable(&self) -> Option<&dyn WriteStorage> {
        None
    }
}

/// Write access to named byte blobs.
pub trait WriteStorage: Send + Sync {
    /// Create or replace the blob.
    fn write(&self, name: &str, data: &[u8]) -> io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        (**self).read(name)
    }

    fn as_writable(&self) -> Option<&dyn WriteStorage> {
        (**self).as_writable()
    }
}

/// Golden files in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Storage for DirStorage {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path(name))
    }

    fn as_writable(&self) -> Option<&dyn WriteStorage> {
        Some(self)
    }
}

impl WriteStorage for DirStorage {
    /// Writes go to a temporary file in the same directory which is then
    /// renamed over the target, so readers never see a partial file.
    fn write(&self, name: &str, data: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)?;
        file.write_all(data)?;
        file.as_file().sync_all()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        file.persist(self.path(name)).map_err(|err| err.error)?;
        Ok(())
    }
}

/// In-memory, read-only golden files.
#[derive(Default)]
pub struct MapStorage {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MapStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_file(self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    pub fn insert(&self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.write().insert(name.into(), data.into());
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl fmt::Debug for MapStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapStorage")
            .field("files", &self.files.read().keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Storage for MapStorage {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.get(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{name}: no such golden file"),
            )
        })
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
