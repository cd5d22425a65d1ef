// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use gilt::proto::text::FormatConfig;
use std::path::PathBuf;

/// Helpers for golden test files
#[derive(Parser, Debug)]
#[command(name = "gilt", version, about = "Helpers for golden test files")]
pub struct Cli {
    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, env = "GILT_LOG", global = true, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reformat textproto golden files in place
    Fmt(FmtArgs),

    /// Print the golden file name for each test name
    Name {
        #[arg(required = true, allow_hyphen_values = true)]
        names: Vec<String>,
    },

    /// Print the test name for each golden file name
    Unescape {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FmtArgs {
    /// List files that would change and exit non-zero, without writing
    #[arg(long)]
    pub check: bool,

    /// Keep short nested messages on a single line
    #[arg(long)]
    pub compact: bool,

    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl FmtArgs {
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig {
            expand_all_children: !self.compact,
            ..FormatConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
