// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of raw timestamp deltas into a canonical elapsed time.

use crate::timestamp::{RawDelta, MINUTES_PER_DAY, TICKS_PER_SECOND};
use thiserror::Error;

/// The reference timestamp is later than "now".
///
/// Surfaced instead of clamping to zero: a negative uptime means the
/// system clock is wrong or the wrong volume is being checked, and a
/// plausible-looking zero would hide that.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error(
    "calculated uptime is negative; check that the system clock is set \
     correctly or use --volume to check against a different volume"
)]
pub struct NegativeUptime;

/// A non-negative elapsed time in canonical decomposition.
///
/// `hours`, `minutes`, and `seconds` are within their unit's range;
/// `days` is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Duration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    /// Normalize a raw delta into days/hours/minutes/seconds.
    ///
    /// Negative ticks borrow one minute; negative minutes borrow one day.
    /// A day count still negative after both borrows means the true
    /// elapsed time is negative, which is an error.
    pub fn from_delta(delta: RawDelta) -> Result<Self, NegativeUptime> {
        let RawDelta {
            mut days,
            mut minutes,
            mut ticks,
        } = delta;

        if ticks < 0 {
            ticks += 60 * TICKS_PER_SECOND;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += MINUTES_PER_DAY;
            days -= 1;
        }
        if days < 0 {
            return Err(NegativeUptime);
        }

        Ok(Self {
            days: days as u64,
            hours: (minutes / 60) as u64,
            minutes: (minutes % 60) as u64,
            seconds: (ticks / TICKS_PER_SECOND) as u64,
        })
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
