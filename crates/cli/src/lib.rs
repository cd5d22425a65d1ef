// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library half of the `gilt` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
