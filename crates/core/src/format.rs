// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Natural-language and compact rendering of a [`Duration`].

use crate::duration::Duration;
use std::fmt::Write;

const DAY: &str = "day";
const HOUR: &str = "hr";
const MINUTE: &str = "min";
const SECOND: &str = "sec";

const DAYS: &str = "days";
const HOURS: &str = "hrs";
const MINUTES: &str = "mins";
const SECONDS: &str = "secs";

const DAY_SHORT: &str = "d";
const HOUR_SHORT: &str = "h";
const MINUTE_SHORT: &str = "m";
const SECOND_SHORT: &str = "s";

const COMMA_JOIN: &str = ", ";
const CONJUNCTION_JOIN: &str = " and ";

/// Prefix shown by [`OutputStyle::Full`].
pub const FULL_PREFIX: &str = "The system has been running for";
/// Prefix shown by the other styles unless suppressed.
pub const PREFIX: &str = "Uptime:";

/// Output rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Prose with the long [`FULL_PREFIX`] and a closing period.
    Full,
    /// Prose with the short [`PREFIX`].
    #[default]
    Normal,
    /// Compact `1d 2h 3m 4s` rendering.
    Short,
}

/// Rendering configuration, assembled once from parsed arguments.
///
/// The formatter itself only consults `style`; `show_prefix` is for the
/// caller, which owns prefix and line-terminator emission. `Full` always
/// shows its own prefix regardless of `show_prefix`.
#[derive(Clone, Copy, Debug)]
pub struct FormatConfig {
    pub style: OutputStyle,
    pub show_prefix: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::Normal,
            show_prefix: true,
        }
    }
}

/// Render the duration clause for `config.style`.
///
/// Pure and total: the same input always yields the same string.
pub fn format_duration(duration: &Duration, config: &FormatConfig) -> String {
    match config.style {
        OutputStyle::Full | OutputStyle::Normal => prose(duration),
        OutputStyle::Short => compact(duration),
    }
}

/// Comma/conjunction-joined list of the non-zero units, largest first.
///
/// `remaining` counts the non-zero units still to print, including the one
/// about to be printed: more than one means a comma (something follows),
/// exactly one means this unit is last and gets the conjunction.
fn prose(d: &Duration) -> String {
    if d.is_zero() {
        return format!("0 {}", SECONDS);
    }

    let mut remaining = [d.days, d.hours, d.minutes, d.seconds]
        .iter()
        .filter(|v| **v != 0)
        .count();
    let mut out = String::new();

    if d.days != 0 {
        push_term(&mut out, d.days, DAY, DAYS);
        remaining -= 1;
    }

    if d.hours != 0 {
        if d.days != 0 {
            out.push_str(joiner(remaining));
        }
        push_term(&mut out, d.hours, HOUR, HOURS);
        remaining -= 1;
    }

    if d.minutes != 0 {
        if d.days != 0 || d.hours != 0 {
            out.push_str(joiner(remaining));
        }
        push_term(&mut out, d.minutes, MINUTE, MINUTES);
    }

    if d.seconds != 0 {
        // Seconds are always the last term; never preceded by a comma
        if d.days != 0 || d.hours != 0 || d.minutes != 0 {
            out.push_str(CONJUNCTION_JOIN);
        }
        push_term(&mut out, d.seconds, SECOND, SECONDS);
    }

    out
}

/// `NdNhNmNs`-style rendering, one trailing space after every term.
fn compact(d: &Duration) -> String {
    if d.is_zero() {
        return format!("0{}", SECOND_SHORT);
    }

    let mut out = String::new();
    let terms = [
        (d.days, DAY_SHORT),
        (d.hours, HOUR_SHORT),
        (d.minutes, MINUTE_SHORT),
        (d.seconds, SECOND_SHORT),
    ];
    for (value, unit) in terms {
        if value != 0 {
            let _ = write!(out, "{}{} ", value, unit);
        }
    }
    out
}

fn push_term(out: &mut String, value: u64, singular: &str, plural: &str) {
    let unit = if value == 1 { singular } else { plural };
    let _ = write!(out, "{} {}", value, unit);
}

fn joiner(remaining: usize) -> &'static str {
    if remaining > 1 {
        COMMA_JOIN
    } else {
        CONJUNCTION_JOIN
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
