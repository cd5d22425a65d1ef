// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gilt` binary entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gilt_cli::cli::Cli;
use gilt_cli::commands;
use gilt_cli::output::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let stdout = io::stdout();
    match commands::run(&cli.command, &mut stdout.lock()) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(err);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `--log` or `RUST_LOG`. Silent by default.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
