// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction so "now" can be injected in tests.

use crate::timestamp::Timestamp;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current [`Timestamp`].
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = i64::try_from(since_epoch.as_secs()).unwrap_or(i64::MAX);
        Timestamp::from_unix(secs, since_epoch.subsec_nanos())
    }
}

/// A clock pinned to a fixed timestamp.
#[derive(Clone, Copy, Debug)]
pub struct FakeClock(pub Timestamp);

impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
