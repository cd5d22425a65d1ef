// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics on stderr.

use similar::{ChangeTag, TextDiff};
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Print an error, in red when stderr is a terminal.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Print the changes formatting would make to `path`.
pub fn print_diff(path: &str, before: &str, after: &str) {
    let is_tty = io::stderr().is_terminal();
    write_diff(&mut io::stderr(), path, before, after, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31merror:\x1b[0m {msg}");
    } else {
        let _ = writeln!(writer, "error: {msg}");
    }
}

fn write_diff<W: Write>(writer: &mut W, path: &str, before: &str, after: &str, is_terminal: bool) {
    let diff = TextDiff::from_lines(before, after);
    let _ = writeln!(writer, "--- {path}");
    let _ = writeln!(writer, "+++ {path} (formatted)");
    for hunk in diff.unified_diff().context_radius(2).iter_hunks() {
        let _ = writeln!(writer, "{}", hunk.header());
        for change in hunk.iter_changes() {
            let (sign, color) = match change.tag() {
                ChangeTag::Delete => ('-', "\x1b[31m"),
                ChangeTag::Insert => ('+', "\x1b[32m"),
                ChangeTag::Equal => (' ', ""),
            };
            let line = change.value().trim_end_matches('\n');
            if is_terminal && !color.is_empty() {
                let _ = writeln!(writer, "{color}{sign}{line}\x1b[0m");
            } else {
                let _ = writeln!(writer, "{sign}{line}");
            }
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
