//! Level-transition detectors.
//!
//! Each detector compares a sample with the level held in its cell, then
//! stores the sample. The cell is overwritten on every present sample,
//! whether or not an edge fired; absent samples leave it alone.

use crate::cell::StateCell;
use crate::pins::Level;
use crate::signal::Signal;

/// Store `sig`'s level and return the one it replaced.
fn advance(sig: Signal<Level>, prev: &StateCell<Level>) -> Option<(Level, Level)> {
    let now = sig.into_option()?;
    Some((prev.replace(now), now))
}

/// Fires on Low → High.
pub fn rising_edge(sig: Signal<Level>, prev: &StateCell<Level>) -> Signal<()> {
    match advance(sig, prev) {
        Some((Level::Low, Level::High)) => Signal::present(()),
        _ => Signal::absent(),
    }
}

/// Fires on High → Low.
pub fn falling_edge(sig: Signal<Level>, prev: &StateCell<Level>) -> Signal<()> {
    match advance(sig, prev) {
        Some((Level::High, Level::Low)) => Signal::present(()),
        _ => Signal::absent(),
    }
}

/// Fires on either transition, carrying the new level.
pub fn edge(sig: Signal<Level>, prev: &StateCell<Level>) -> Signal<Level> {
    match advance(sig, prev) {
        Some((before, after)) if before != after => Signal::present(after),
        _ => Signal::absent(),
    }
}

/// Edge detector that owns its previous-level cell.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    prev: StateCell<Level>,
}

impl EdgeDetector {
    pub fn new(initial: Level) -> Self {
        Self {
            prev: StateCell::new(initial),
        }
    }

    pub fn rising(&self, sig: Signal<Level>) -> Signal<()> {
        rising_edge(sig, &self.prev)
    }

    pub fn falling(&self, sig: Signal<Level>) -> Signal<()> {
        falling_edge(sig, &self.prev)
    }

    pub fn any(&self, sig: Signal<Level>) -> Signal<Level> {
        edge(sig, &self.prev)
    }

    /// Level seen on the last present sample.
    pub fn previous(&self) -> Level {
        *self.prev.borrow()
    }
}
