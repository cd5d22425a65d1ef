// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn error_text(msg: &str, is_terminal: bool) -> String {
    let mut buf = Vec::new();
    write_error(&mut buf, msg, is_terminal);
    String::from_utf8(buf).unwrap()
}

fn diff_text(before: &str, after: &str, is_terminal: bool) -> String {
    let mut buf = Vec::new();
    write_diff(&mut buf, "a.textproto", before, after, is_terminal);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_error_plain_when_not_terminal() {
    assert_eq!(error_text("bad input", false), "error: bad input\n");
}

#[test]
fn test_error_colored_on_terminal() {
    assert_eq!(
        error_text("bad input", true),
        "\x1b[31merror:\x1b[0m bad input\n"
    );
}

#[test]
fn test_diff_plain() {
    let out = diff_text("a: 1\nm { b: 2 }\n", "a: 1\nm {\n  b: 2\n}\n", false);
    assert_eq!(
        out,
        "--- a.textproto\n\
         +++ a.textproto (formatted)\n\
         @@ -1,2 +1,4 @@\n \
         a: 1\n\
         -m { b: 2 }\n\
         +m {\n\
         +  b: 2\n\
         +}\n"
    );
}

#[test]
fn test_diff_colored_on_terminal() {
    let out = diff_text("a: 1\n", "a: 2\n", true);
    assert!(out.contains("\x1b[31m-a: 1\x1b[0m\n"), "{out:?}");
    assert!(out.contains("\x1b[32m+a: 2\x1b[0m\n"), "{out:?}");
}
