// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gilt::proto::ProtoError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: ProtoError,
    },

    #[error("{}: not a file name", path.display())]
    InvalidPath { path: PathBuf },

    #[error(transparent)]
    Gilt(#[from] gilt::Error),

    #[error("writing output: {0}")]
    Output(#[source] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
