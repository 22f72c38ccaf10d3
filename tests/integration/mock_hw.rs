//! Mock hardware adapter for integration tests.
//!
//! Records every pin write so tests can assert on the full output history
//! without touching real GPIO. The clock only moves when the loop waits,
//! so every run is deterministic.

use std::collections::HashMap;

use sigloop::app::ports::{Clock, DigitalSink, DigitalSource};
use sigloop::error::{Error, Result};
use sigloop::pins::{Level, Pin};
use sigloop::time::Timestamp;

// ── Pin write record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinWrite {
    pub at: Timestamp,
    pub pin: Pin,
    pub level: Level,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub inputs: HashMap<Pin, Level>,
    pub writes: Vec<PinWrite>,
    /// Any access to this pin reports a hardware fault.
    pub faulty: Option<Pin>,
    now: Timestamp,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            inputs: HashMap::new(),
            writes: Vec::new(),
            faulty: None,
            now: 0,
        }
    }

    /// Stamp subsequent writes with `now`.
    pub fn at(&mut self, now: Timestamp) -> &mut Self {
        self.now = now;
        self
    }

    pub fn set_input(&mut self, pin: Pin, level: Level) {
        self.inputs.insert(pin, level);
    }

    /// Levels written to `pin`, oldest first.
    pub fn history(&self, pin: Pin) -> Vec<Level> {
        self.writes
            .iter()
            .filter(|w| w.pin == pin)
            .map(|w| w.level)
            .collect()
    }

    /// Times at which `pin` was written.
    pub fn write_times(&self, pin: Pin) -> Vec<Timestamp> {
        self.writes
            .iter()
            .filter(|w| w.pin == pin)
            .map(|w| w.at)
            .collect()
    }

    fn check(&self, pin: Pin) -> Result<()> {
        if self.faulty == Some(pin) {
            Err(Error::Hardware(pin))
        } else {
            Ok(())
        }
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalSource for MockHardware {
    fn poll_digital(&mut self, pin: Pin) -> Result<Level> {
        self.check(pin)?;
        self.inputs.get(&pin).copied().ok_or(Error::UnmappedPin(pin))
    }
}

impl DigitalSink for MockHardware {
    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()> {
        self.check(pin)?;
        self.writes.push(PinWrite {
            at: self.now,
            pin,
            level,
        });
        Ok(())
    }
}

// ── ManualClock ───────────────────────────────────────────────

/// Clock that advances only by the amounts the loop waits.
pub struct ManualClock {
    now: Timestamp,
    pub waits: u64,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn starting_at(now: Timestamp) -> Self {
        Self { now, waits: 0 }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn wait(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
        self.waits += 1;
    }
}
