//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL over the invoked binary's captured output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::process::Output;

/// Run the `vup` binary with `args` and capture its output.
pub fn vup(args: &[&str]) -> Spec {
    vup_env(args, &[])
}

/// Run the `vup` binary with extra environment variables set for the
/// child process.
pub fn vup_env(args: &[&str], envs: &[(&str, &str)]) -> Spec {
    let mut cmd = assert_cmd::Command::cargo_bin("vup").unwrap();
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let output = cmd.args(args).output().unwrap();
    Spec { output }
}

/// True when `mount_point` appears in the process mount table.
///
/// Specs that rely on a real mount (the default RAM disk) bail out early
/// on hosts where it is absent instead of failing.
pub fn is_mounted(mount_point: &str) -> bool {
    std::fs::read_to_string("/proc/self/mounts")
        .map(|mounts| {
            mounts
                .lines()
                .filter_map(|line| line.split_whitespace().nth(1))
                .any(|p| p == mount_point)
        })
        .unwrap_or(false)
}

/// Captured result of one binary invocation.
pub struct Spec {
    output: Output,
}

impl Spec {
    pub fn passes(self) -> Self {
        assert!(
            self.output.status.success(),
            "expected success, got {:?}\nstderr: {}",
            self.output.status.code(),
            self.stderr()
        );
        self
    }

    pub fn fails(self) -> Self {
        assert!(
            !self.output.status.success(),
            "expected failure, got success\nstdout: {}",
            self.stdout()
        );
        self
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(expected),
            "stderr: {}",
            self.stderr()
        );
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "expected '{}' in stdout:\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(needle),
            "expected '{}' absent from stdout:\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "expected '{}' in stderr:\n{}",
            needle,
            stderr
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
