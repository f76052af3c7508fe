//! High-resolution monotonic clock
//!
//! Raw tick source for elapsed-time measurement: read two [`Ticks`] values
//! and scale the difference by [`tick_unit_seconds`]. On Unix the counter is
//! `clock_gettime(CLOCK_MONOTONIC)`; elsewhere it falls back to
//! `std::time::Instant` against a process-lifetime origin. Either way the
//! unit is one nanosecond.
//!
//! A clock the platform cannot provide is unrecoverable for an observer
//! whose whole output is timing, so a failing read aborts the process.

#![allow(unsafe_code)] // clock_gettime() requires unsafe

use crate::domain::Ticks;

/// Current monotonic counter reading.
#[cfg(unix)]
#[must_use]
#[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
pub fn now() -> Ticks {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    assert_eq!(rc, 0, "clock_gettime(CLOCK_MONOTONIC) failed");
    Ticks((ts.tv_sec as i64) * 1_000_000_000 + (ts.tv_nsec as i64))
}

/// Current monotonic counter reading.
#[cfg(not(unix))]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn now() -> Ticks {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    let origin = *ORIGIN.get_or_init(Instant::now);
    Ticks(origin.elapsed().as_nanos() as i64)
}

/// Seconds per tick; elapsed seconds is `b.since(a) as f64 * tick_unit_seconds()`.
#[must_use]
pub fn tick_unit_seconds() -> f64 {
    1e-9
}
