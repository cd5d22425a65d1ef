// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide update mode.
//!
//! Update mode is a boolean switch read from the command line
//! (`--update_golden_files`, `--update_golden_files=false`) or from the
//! matching upper-case environment variable (`UPDATE_GOLDEN_FILES=1`). Since
//! the libtest harness rejects unknown arguments, the environment variable is
//! the usual way to enable it under `cargo test`.
//!
//! The switch is resolved once. Call [`init`] to customize it before any
//! assertion runs; otherwise the defaults are applied on first use.

use crate::error::{Error, Result};
use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, Command};
use parking_lot::{const_mutex, Mutex};
use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

/// Name of the update switch unless [`InitOption::FlagName`] overrides it.
pub const DEFAULT_UPDATE_FLAG_NAME: &str = "update_golden_files";

const FLAG_ID: &str = "update";

/// Options for [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOption {
    /// Use a different switch name. An empty name disables the switch.
    FlagName(String),
    /// Do not read a switch at all; update mode stays off.
    NoFlag,
}

/// Shorthand for [`InitOption::FlagName`].
pub fn with_flag_name(name: impl Into<String>) -> InitOption {
    InitOption::FlagName(name.into())
}

/// One-time update mode configuration.
///
/// The mutex only guards the initialization transition; afterwards the
/// value is read through atomics.
#[derive(Debug)]
pub struct GlobalOptions {
    flag_name: Mutex<Option<Cow<'static, str>>>,
    initialized: AtomicBool,
    updates_enabled: AtomicBool,
}

impl GlobalOptions {
    pub const fn new(flag_name: Option<&'static str>) -> Self {
        let flag_name = match flag_name {
            Some(name) => Some(Cow::Borrowed(name)),
            None => None,
        };
        Self {
            flag_name: const_mutex(flag_name),
            initialized: AtomicBool::new(false),
            updates_enabled: AtomicBool::new(false),
        }
    }

    /// Apply `opts` and resolve the switch from `args`.
    ///
    /// Arguments other than the switch are ignored. Fails with
    /// [`Error::AlreadyInitialized`] on a second call.
    pub fn init_from<I>(&self, opts: &[InitOption], args: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let mut flag_name = self.flag_name.lock();
        if self.initialized.load(Ordering::Acquire) {
            return Err(Error::AlreadyInitialized);
        }

        for opt in opts {
            match opt {
                InitOption::FlagName(name) if name.is_empty() => *flag_name = None,
                InitOption::FlagName(name) => *flag_name = Some(Cow::Owned(name.clone())),
                InitOption::NoFlag => *flag_name = None,
            }
        }

        let enabled = match flag_name.as_deref() {
            Some(name) => parse_flag(name, args)?,
            None => false,
        };
        self.publish(enabled);
        Ok(())
    }

    /// Whether update mode is on. Resolves the defaults from the process
    /// arguments and environment if nothing was initialized yet.
    pub fn updates_enabled(&self) -> bool {
        if !self.initialized.load(Ordering::Acquire) {
            self.init_defaults();
        }
        self.updates_enabled.load(Ordering::Acquire)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// The configured switch name, if any.
    pub fn flag_name(&self) -> Option<String> {
        self.flag_name.lock().as_deref().map(str::to_string)
    }

    fn init_defaults(&self) {
        let flag_name = self.flag_name.lock();
        if self.initialized.load(Ordering::Acquire) {
            return;
        }
        let enabled = match flag_name.as_deref() {
            Some(name) => parse_flag(name, std::env::args().skip(1)).unwrap_or_else(|err| {
                tracing::warn!(flag = name, error = %err, "ignoring invalid update flag");
                false
            }),
            None => false,
        };
        self.publish(enabled);
    }

    fn publish(&self, enabled: bool) {
        self.updates_enabled.store(enabled, Ordering::Release);
        self.initialized.store(true, Ordering::Release);
        tracing::debug!(enabled, "golden file update mode resolved");
    }
}

/// The process-wide options every [`Golden`](crate::Golden) in
/// [`UpdateMode::Process`](crate::UpdateMode::Process) reads.
pub static GLOBAL: GlobalOptions = GlobalOptions::new(Some(DEFAULT_UPDATE_FLAG_NAME));

/// Configure the process-wide update switch. Call at most once, before any
/// assertion runs.
pub fn init(opts: &[InitOption]) -> Result<()> {
    GLOBAL.init_from(opts, std::env::args().skip(1))
}

/// Environment variable read for a switch name.
pub fn env_var_name(flag_name: &str) -> String {
    flag_name.to_ascii_uppercase().replace('-', "_")
}

fn parse_flag<I>(name: &str, args: I) -> Result<bool>
where
    I: IntoIterator<Item = String>,
{
    let long = format!("--{name}");
    let with_value = format!("{long}=");
    let relevant: Vec<String> = args
        .into_iter()
        .filter(|arg| *arg == long || arg.starts_with(&with_value))
        .collect();

    let matches = Command::new("gilt")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new(FLAG_ID)
                .long(name.to_string())
                .env(env_var_name(name))
                .help("Update golden test files in-place.")
                .value_parser(BoolishValueParser::new())
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .action(ArgAction::Set),
        )
        .try_get_matches_from(relevant)?;

    Ok(matches.get_one::<bool>(FLAG_ID).copied().unwrap_or(false))
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod tests;
