// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error wrapper that selects the process exit code in `main`.

use std::fmt;

/// An error carrying an explicit exit code.
///
/// Errors that reach `main` without this wrapper exit with code 1.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Usage errors exit with code 2, matching clap's own parse failures.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
