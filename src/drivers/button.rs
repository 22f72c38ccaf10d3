//! Contact-bounce filter for a digital input.
//!
//! ## State machine
//!
//! A raw sample becomes the *candidate* level. The *confirmed* level only
//! follows once the candidate has stayed put for strictly longer than the
//! delay:
//!
//! | Sample vs state                                  | Effect                             | Emits      |
//! |--------------------------------------------------|------------------------------------|------------|
//! | differs from candidate                           | candidate restarts at `now`        | confirmed  |
//! | equals candidate, differs from confirmed, stable | confirmed = sample                 | sample     |
//! | anything else                                    | none                               | confirmed  |
//!
//! Absent samples pass through and leave the state alone. Time is measured
//! with [`elapsed`], so a bounce straddling the counter wrap still settles.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cell::StateCell;
use crate::pins::Level;
use crate::signal::Signal;
use crate::time::{Timestamp, elapsed};

/// Default stability window.
pub const DEBOUNCE_MS: u32 = 50;

/// Persistent debounce state, one per physical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceState {
    /// Level last promoted as stable.
    pub confirmed: Level,
    /// Most recent raw sample.
    pub candidate: Level,
    /// When `candidate` last changed.
    pub candidate_since: Timestamp,
}

impl DebounceState {
    pub const fn new(initial: Level) -> Self {
        Self {
            confirmed: initial,
            candidate: initial,
            candidate_since: 0,
        }
    }
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new(Level::Low)
    }
}

/// Debounce `incoming` with a stability window of `delay` ms.
pub fn debounce_delay(
    incoming: Signal<Level>,
    delay: u32,
    now: Timestamp,
    cell: &StateCell<DebounceState>,
) -> Signal<Level> {
    let Some(current) = incoming.into_option() else {
        return Signal::absent();
    };
    let mut st = cell.get();

    let out = if current != st.candidate {
        debug!("debounce: candidate {:?} -> {:?} at {}", st.candidate, current, now);
        st.candidate_since = now;
        st.confirmed
    } else if current != st.confirmed && elapsed(now, st.candidate_since) > delay {
        debug!("debounce: confirmed {:?} -> {:?} at {}", st.confirmed, current, now);
        st.confirmed = current;
        current
    } else {
        st.confirmed
    };

    st.candidate = current;
    cell.set(st);
    Signal::present(out)
}

/// [`debounce_delay`] with the default [`DEBOUNCE_MS`] window.
pub fn debounce(incoming: Signal<Level>, now: Timestamp, cell: &StateCell<DebounceState>) -> Signal<Level> {
    debounce_delay(incoming, DEBOUNCE_MS, now, cell)
}

/// Debouncer that owns its state and window.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: u32,
    state: StateCell<DebounceState>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS, Level::Low)
    }
}

impl Debouncer {
    pub fn new(delay: u32, initial: Level) -> Self {
        Self {
            delay,
            state: StateCell::new(DebounceState::new(initial)),
        }
    }

    /// Call once per poll with the raw sample.
    pub fn poll(&self, incoming: Signal<Level>, now: Timestamp) -> Signal<Level> {
        debounce_delay(incoming, self.delay, now, &self.state)
    }

    /// Current confirmed level.
    pub fn level(&self) -> Level {
        self.state.borrow().confirmed
    }

    pub fn state(&self) -> StateCell<DebounceState> {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(d: &Debouncer, samples: &[(Timestamp, Level)]) -> Vec<Level> {
        samples
            .iter()
            .filter_map(|&(t, l)| d.poll(Signal::present(l), t).into_option())
            .collect()
    }

    #[test]
    fn promotes_after_stable_window() {
        use crate::pins::Level::{High, Low};
        let d = Debouncer::new(50, Low);
        let out = feed(&d, &[(0, Low), (10, High), (40, High), (70, High)]);
        assert_eq!(out, [Low, Low, Low, High]);
    }

    #[test]
    fn bounce_restarts_window() {
        use crate::pins::Level::{High, Low};
        let d = Debouncer::new(50, Low);
        let out = feed(
            &d,
            &[(0, High), (20, Low), (30, High), (70, High), (81, High)],
        );
        // stable since 30; 70 - 30 = 40 is not enough, 81 - 30 = 51 is
        assert_eq!(out, [Low, Low, Low, Low, High]);
    }

    #[test]
    fn exactly_delay_is_not_enough() {
        let d = Debouncer::new(50, Level::Low);
        d.poll(Signal::present(Level::High), 100);
        assert_eq!(d.poll(Signal::present(Level::High), 150), Signal::present(Level::Low));
        assert_eq!(d.poll(Signal::present(Level::High), 151), Signal::present(Level::High));
    }

    #[test]
    fn absent_sample_leaves_state_alone() {
        let d = Debouncer::default();
        d.poll(Signal::present(Level::High), 5);
        let before = d.state().get();
        assert_eq!(d.poll(Signal::absent(), 500), Signal::absent());
        assert_eq!(d.state().get(), before);
    }

    #[test]
    fn promotes_across_counter_wrap() {
        let cell = StateCell::new(DebounceState::new(Level::Low));
        let t0 = u32::MAX - 20;
        debounce(Signal::present(Level::High), t0, &cell);
        assert_eq!(debounce(Signal::present(Level::High), 10, &cell), Signal::present(Level::Low));
        assert_eq!(debounce(Signal::present(Level::High), 40, &cell), Signal::present(Level::High));
        assert_eq!(cell.get().confirmed, Level::High);
    }
}
