//! Argument validation specs
//!
//! Verify flag handling, volume-name sanitization, and exit codes.

use crate::prelude::*;

#[test]
fn version_flag_exits_zero() {
    vup(&["--version"]).passes().stdout_has("vup");
}

#[test]
fn version_flag_skips_volume_lookup() {
    // An invalid volume after --version must not matter
    vup(&["--version", "--volume", "no-such-volume"]).passes();
}

#[test]
fn empty_volume_name_is_a_usage_error() {
    vup(&["--volume", ""])
        .fails()
        .code(2)
        .stderr_has("volume name is empty");
}

#[test]
fn colon_only_volume_name_is_empty_after_stripping() {
    vup(&["--volume", ":"])
        .fails()
        .code(2)
        .stderr_has("volume name is empty");
}

#[test]
fn overlong_volume_name_is_rejected() {
    let name = "a".repeat(31);
    vup(&["--volume", &name])
        .fails()
        .code(2)
        .stderr_has("volume name is too long");
}

#[test]
fn thirty_character_volume_name_is_accepted() {
    // Long enough to pass validation; fails later at mount lookup
    let name = "a".repeat(30);
    vup(&["--volume", &name])
        .fails()
        .code(1)
        .stderr_has("volume not found");
}

#[test]
fn trailing_colon_is_stripped_from_volume_name() {
    vup(&["--volume", "no-such-thing:"])
        .fails()
        .stderr_has("volume not found: no-such-thing");
}

#[test]
fn unknown_volume_reports_not_found() {
    vup(&["--volume", "definitely-not-mounted"])
        .fails()
        .code(1)
        .stderr_has("volume not found: definitely-not-mounted");
}

#[test]
fn full_and_short_conflict() {
    vup(&["--full", "--short"]).fails().code(2);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    vup(&["--bogus"]).fails().code(2);
}

#[test]
fn help_flag_documents_the_surface() {
    vup(&["--help"])
        .passes()
        .stdout_has("--volume")
        .stdout_has("--full")
        .stdout_has("--short")
        .stdout_has("--no-prefix");
}
