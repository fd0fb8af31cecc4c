// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host environment requirements, checked before any other work.

use anyhow::{bail, Result};
use std::path::PathBuf;

// statx birth-time support landed in 4.11
const MIN_KERNEL: (u32, u32) = (4, 11);

const OS_RELEASE: &str = "/proc/sys/kernel/osrelease";

/// Overrides the release file path; set by the black-box specs.
const OS_RELEASE_ENV: &str = "VUP_OS_RELEASE";

/// Verify the running kernel is new enough to report volume birth times.
///
/// An unreadable or unparsable release string passes the check; only a
/// version known to be below the minimum fails.
pub fn check_requirements() -> Result<()> {
    let release = std::fs::read_to_string(os_release_path()).unwrap_or_default();
    check_release(&release)
}

fn os_release_path() -> PathBuf {
    std::env::var(OS_RELEASE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(OS_RELEASE))
}

fn check_release(release: &str) -> Result<()> {
    let Some((major, minor)) = parse_kernel_version(release) else {
        return Ok(());
    };
    if (major, minor) < MIN_KERNEL {
        bail!(
            "this program requires Linux {}.{} or higher (running {}.{})",
            MIN_KERNEL.0,
            MIN_KERNEL.1,
            major,
            minor
        );
    }
    Ok(())
}

/// Parse `"6.8.0-45-generic"` into `(6, 8)`.
fn parse_kernel_version(release: &str) -> Option<(u32, u32)> {
    let mut parts = release.trim().splitn(3, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts
        .next()
        .map(|p| p.chars().take_while(char::is_ascii_digit).collect::<String>())?
        .parse()
        .ok()?;
    Some((major, minor))
}

#[cfg(test)]
#[path = "env_check_tests.rs"]
mod tests;
