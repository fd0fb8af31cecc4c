// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tick-granularity timestamps and their raw differences.

/// Sub-second resolution of [`Timestamp`]: 50 ticks per second.
pub const TICKS_PER_SECOND: i64 = 50;

pub(crate) const MINUTES_PER_DAY: i64 = 1440;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_DAY: i64 = 86400;
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A wall-clock instant decomposed into whole days since the Unix epoch,
/// the minute of that day, and a sub-minute remainder in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
    /// Whole days since 1970-01-01 00:00:00 UTC.
    pub days: i64,
    /// Minute of day, `0..1440`.
    pub minute: i64,
    /// Sub-minute remainder, `0..60 * TICKS_PER_SECOND`.
    pub ticks: i64,
}

impl Timestamp {
    /// Decompose seconds and nanoseconds since the Unix epoch.
    ///
    /// Negative `secs` (pre-epoch instants) still yield a minute-of-day
    /// and tick count in range; only `days` goes negative.
    pub fn from_unix(secs: i64, nanos: u32) -> Self {
        let days = secs.div_euclid(SECONDS_PER_DAY);
        let day_secs = secs.rem_euclid(SECONDS_PER_DAY);
        let sub_second = i64::from(nanos) * TICKS_PER_SECOND / NANOS_PER_SECOND;
        Self {
            days,
            minute: day_secs / SECONDS_PER_MINUTE,
            ticks: (day_secs % SECONDS_PER_MINUTE) * TICKS_PER_SECOND + sub_second,
        }
    }

    /// Componentwise difference `self - earlier`, without normalization.
    ///
    /// Minutes and ticks of the result may be negative; feed the delta to
    /// [`crate::Duration::from_delta`] to borrow them into range.
    pub fn delta(self, earlier: Timestamp) -> RawDelta {
        RawDelta {
            days: self.days - earlier.days,
            minutes: self.minute - earlier.minute,
            ticks: self.ticks - earlier.ticks,
        }
    }
}

/// An unnormalized timestamp difference.
///
/// Constructed once per run by [`Timestamp::delta`] and immediately
/// consumed by the normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawDelta {
    pub days: i64,
    /// Minute-of-day difference, roughly `-1440..1440`.
    pub minutes: i64,
    /// Sub-minute tick difference; may be negative before borrowing.
    pub ticks: i64,
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
