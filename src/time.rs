//! Millisecond timestamps and the interval timer.
//!
//! Timestamps are a free-running `u32` millisecond counter that wraps after
//! about 49.7 days. Durations are always taken with [`elapsed`], which is
//! correct across one wrap as long as the true interval fits in a `u32`.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cell::StateCell;
use crate::signal::Signal;

/// Milliseconds since an arbitrary, fixed origin.
pub type Timestamp = u32;

/// Milliseconds from `since` to `now`, tolerant of counter wrap.
pub const fn elapsed(now: Timestamp, since: Timestamp) -> u32 {
    now.wrapping_sub(since)
}

/// State of an [`every`] timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerState {
    pub last_pulse: Timestamp,
}

/// Index of the interval-aligned window containing `t`.
const fn window(interval: u32, t: Timestamp) -> u32 {
    if interval == 0 { t } else { t / interval }
}

/// Fire with `now` the first time it is polled inside each interval-aligned
/// window. Windows are compared for inequality, so the timer keeps firing
/// after the counter wraps. With `interval == 0` it fires whenever `now`
/// has moved since the last pulse.
pub fn every(interval: u32, now: Timestamp, cell: &StateCell<TimerState>) -> Signal<Timestamp> {
    let last = cell.borrow().last_pulse;
    if window(interval, now) == window(interval, last) {
        return Signal::absent();
    }
    cell.set(TimerState { last_pulse: now });
    trace!("timer({interval}ms) fired at {now}");
    Signal::present(now)
}

/// An [`every`] timer that owns its state.
#[derive(Debug, Clone)]
pub struct Timer {
    interval: u32,
    state: StateCell<TimerState>,
}

impl Timer {
    pub fn new(interval: u32) -> Self {
        Self {
            interval,
            state: StateCell::default(),
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn poll(&self, now: Timestamp) -> Signal<Timestamp> {
        every(self.interval, now, &self.state)
    }

    pub fn state(&self) -> StateCell<TimerState> {
        self.state.clone()
    }
}
