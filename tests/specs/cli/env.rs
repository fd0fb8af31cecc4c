//! Environment gate specs
//!
//! Point the binary at a fixture release file to simulate other kernels.

use crate::prelude::*;

const RELEASE_VAR: &str = "VUP_OS_RELEASE";

const OLD_RELEASE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/specs/fixtures/osrelease-old"
);

#[test]
fn old_kernel_is_rejected() {
    vup_env(&[], &[(RELEASE_VAR, OLD_RELEASE)])
        .fails()
        .code(1)
        .stderr_has("requires Linux 4.11 or higher");
}

#[test]
fn old_kernel_gate_precedes_version_flag() {
    vup_env(&["--version"], &[(RELEASE_VAR, OLD_RELEASE)])
        .fails()
        .code(1)
        .stderr_has("requires Linux 4.11 or higher");
}

#[test]
fn old_kernel_gate_precedes_argument_errors() {
    // A bad flag reports the environment diagnostic, not a usage error
    vup_env(&["--bogus"], &[(RELEASE_VAR, OLD_RELEASE)])
        .fails()
        .code(1)
        .stderr_has("requires Linux 4.11 or higher");
}

#[test]
fn unreadable_release_file_fails_open() {
    // The gate passes and the run proceeds to the volume lookup
    vup_env(
        &["--volume", "definitely-not-mounted"],
        &[(RELEASE_VAR, "/no/such/release/file")],
    )
    .fails()
    .code(1)
    .stderr_has("volume not found");
}
