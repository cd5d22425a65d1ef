// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations.
//!
//! Results go to the given writer; diagnostics go to stderr.

use crate::cli::{Command, FmtArgs};
use crate::error::{CliError, CliResult};
use crate::output::print_diff;
use gilt::proto::text;
use gilt::{escape_name, unescape_name, DirStorage, WriteStorage};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// `fmt --check` found files that are not formatted.
    Unformatted,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Clean => ExitCode::SUCCESS,
            Status::Unformatted => ExitCode::from(1),
        }
    }
}

pub fn run<W: Write>(command: &Command, out: &mut W) -> CliResult<Status> {
    match command {
        Command::Fmt(args) => fmt(args, out),
        Command::Name { names } => {
            for name in names {
                writeln!(out, "{}", escape_name(name)?).map_err(CliError::Output)?;
            }
            Ok(Status::Clean)
        }
        Command::Unescape { ids } => {
            for id in ids {
                writeln!(out, "{}", unescape_name(id)?).map_err(CliError::Output)?;
            }
            Ok(Status::Clean)
        }
    }
}

/// Reformat each file, or with `--check` only report the ones that differ.
pub fn fmt<W: Write>(args: &FmtArgs, out: &mut W) -> CliResult<Status> {
    let config = args.format_config();
    let mut status = Status::Clean;

    for path in &args.files {
        let original = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        let formatted = text::format(&original, &config).map_err(|source| CliError::Format {
            path: path.clone(),
            source,
        })?;

        if formatted == original {
            debug!(path = %path.display(), "already formatted");
            continue;
        }

        if args.check {
            print_diff(&path.display().to_string(), &original, &formatted);
            writeln!(out, "{}", path.display()).map_err(CliError::Output)?;
            status = Status::Unformatted;
        } else {
            replace(path, &formatted)?;
            writeln!(out, "formatted {}", path.display()).map_err(CliError::Output)?;
        }
    }
    Ok(status)
}

/// Atomically replace `path` with `contents`.
fn replace(path: &Path, contents: &str) -> CliResult<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidPath {
            path: path.to_path_buf(),
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    DirStorage::new(dir)
        .write(name, contents.as_bytes())
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
