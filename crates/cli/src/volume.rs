// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mount-table lookup for a volume's creation timestamp.

use std::fs;
use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;
use thiserror::Error;
use vup_core::Timestamp;

const MOUNTS: &str = "/proc/self/mounts";

/// Errors from volume resolution
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("volume not found: {0}")]
    NotFound(String),
    #[error("failed to read mount table: {0}")]
    Mounts(#[source] io::Error),
    #[error("failed to stat volume '{0}': {1}")]
    Stat(String, #[source] io::Error),
}

/// Look up `name` in the mount table and return the creation timestamp of
/// its mount point.
pub fn volume_created(name: &str) -> Result<Timestamp, VolumeError> {
    let mounts = fs::read_to_string(MOUNTS).map_err(VolumeError::Mounts)?;
    let mount_point =
        find_mount(&mounts, name).ok_or_else(|| VolumeError::NotFound(name.to_string()))?;
    created_at(Path::new(&mount_point)).map_err(|e| VolumeError::Stat(mount_point, e))
}

/// Find the mount point matching `name` in `/proc/self/mounts` content.
///
/// Absolute names match the mount point exactly; bare names match the
/// final path component. Octal escapes (`\040` for space) are decoded
/// before matching.
fn find_mount(mounts: &str, name: &str) -> Option<String> {
    for line in mounts.lines() {
        let Some(raw) = line.split_whitespace().nth(1) else {
            continue;
        };
        let mount_point = decode_octal_escapes(raw);
        let matched = if name.starts_with('/') {
            mount_point == name
        } else {
            Path::new(&mount_point)
                .file_name()
                .and_then(|f| f.to_str())
                .is_some_and(|f| f == name)
        };
        if matched {
            return Some(mount_point);
        }
    }
    None
}

/// Decode the `\NNN` octal escapes the kernel uses for spaces, tabs, and
/// backslashes in mount points.
///
/// Escapes are decoded as raw bytes and converted to UTF-8 once at the
/// end, so escaped multi-byte characters come through intact.
fn decode_octal_escapes(s: &str) -> String {
    let raw = s.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        match octal_escape(&raw[i..]) {
            Some(b) => {
                out.push(b);
                i += 4;
            }
            None => {
                out.push(raw[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// The byte encoded by a `\NNN` escape at the start of `bytes`, if any.
fn octal_escape(bytes: &[u8]) -> Option<u8> {
    if bytes.len() < 4 || bytes[0] != b'\\' {
        return None;
    }
    let digits = std::str::from_utf8(&bytes[1..4]).ok()?;
    u8::from_str_radix(digits, 8).ok()
}

/// Birth time of the mount point, falling back to mtime on filesystems
/// that do not report one.
fn created_at(path: &Path) -> io::Result<Timestamp> {
    let meta = fs::metadata(path)?;
    let created = match meta.created() {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::Unsupported => meta.modified()?,
        Err(e) => return Err(e),
    };
    let since_epoch = created.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = i64::try_from(since_epoch.as_secs()).unwrap_or(i64::MAX);
    Ok(Timestamp::from_unix(secs, since_epoch.subsec_nanos()))
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;
