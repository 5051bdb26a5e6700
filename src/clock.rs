//! Monotonic nanosecond clocks for the host loop
//!
//! The kernel never reads time itself; the host passes `now_nanos` into each
//! frame. Sample timestamps and the frame clock must share one time base.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the frame time handed to the kernel
pub trait Clock {
    /// Nanoseconds on a monotonic time base
    fn now_nanos(&self) -> i64;

    /// Block until the clock reads at least `nanos`
    fn wait_until(&self, nanos: i64);
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(i64::MAX)
    }

    fn wait_until(&self, nanos: i64) {
        let remaining = nanos.saturating_sub(self.now_nanos());
        if remaining > 0 {
            std::thread::sleep(Duration::from_nanos(remaining as u64));
        }
    }
}

/// Simulated clock for headless runs: waiting jumps straight to the target
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_nanos: i64) -> Self {
        Self {
            now: Cell::new(start_nanos),
        }
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> i64 {
        self.now.get()
    }

    fn wait_until(&self, nanos: i64) {
        // Never runs backwards
        if nanos > self.now.get() {
            self.now.set(nanos);
        }
    }
}
