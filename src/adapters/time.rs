//! Host time adapter.
//!
//! Monotonic milliseconds from `std::time::Instant`, truncated to the `u32`
//! [`Timestamp`] counter so host runs wrap exactly like a board tick counter.
//! Also usable wherever an embedded-hal delay is expected.

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;

use crate::app::ports::Clock;
use crate::time::Timestamp;

/// Time adapter for host runs.
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Microseconds since creation (monotonic, wraps at `u64::MAX`).
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }

    fn wait(&mut self, ms: u32) {
        self.delay_ms(ms);
    }
}

impl DelayNs for SystemClock {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
