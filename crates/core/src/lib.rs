// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vup-core: Core library for the vup volume-uptime tool
//!
//! Pure duration arithmetic and formatting. System access is confined to
//! the [`Clock`] seam; everything else takes timestamps in and hands a
//! formatted clause back out.

pub mod clock;
pub mod duration;
pub mod format;
pub mod timestamp;

pub use clock::{Clock, FakeClock, SystemClock};
pub use duration::{Duration, NegativeUptime};
pub use format::{format_duration, FormatConfig, OutputStyle, FULL_PREFIX, PREFIX};
pub use timestamp::{RawDelta, Timestamp, TICKS_PER_SECOND};
