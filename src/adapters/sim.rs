//! In-memory pin bank for host runs and tests.
//!
//! Inputs are set directly or replayed from a script of timed level
//! changes; outputs remember the last value written. Script times are
//! offsets from the first [`SimPins::advance`], so a run that starts just
//! before the counter wraps replays the same way as one starting at zero.
//! Every bank is bounded, so a runaway script fails with `CapacityExceeded`
//! instead of growing.

use log::trace;

use crate::app::ports::{AnalogSink, AnalogSource, DigitalSink, DigitalSource};
use crate::error::{Error, Result};
use crate::list::BoundedList;
use crate::pins::{Level, Pin};
use crate::time::{Timestamp, elapsed};

/// Pins per bank.
pub const MAX_PINS: usize = 16;
/// Steps per input script.
pub const MAX_SCRIPT_STEPS: usize = 32;
/// Scripted inputs per bank.
pub const MAX_SCRIPTS: usize = 4;

type Bank<V> = BoundedList<(Pin, V), MAX_PINS>;

/// Timed level changes for one input, as ascending offsets from the origin.
pub type Script = BoundedList<(Timestamp, Level), MAX_SCRIPT_STEPS>;

fn lookup<V: Copy>(bank: &Bank<V>, pin: Pin) -> Option<V> {
    bank.iter().find(|(p, _)| *p == pin).map(|&(_, v)| v)
}

fn upsert<V: Copy>(bank: &mut Bank<V>, pin: Pin, value: V) -> Result<()> {
    match bank.iter().position(|(p, _)| *p == pin) {
        Some(i) => bank.set_nth(i, (pin, value)),
        None => bank.push_back((pin, value)),
    }
}

/// Level a script holds `offset` ms after the origin: the last step at or
/// before it.
fn level_at(script: &Script, offset: u32) -> Option<Level> {
    script
        .iter()
        .take_while(|(t, _)| *t <= offset)
        .last()
        .map(|&(_, level)| level)
}

#[derive(Debug, Default)]
pub struct SimPins {
    digital_in: Bank<Level>,
    analog_in: Bank<u16>,
    digital_out: Bank<Level>,
    analog_out: Bank<u8>,
    scripts: BoundedList<(Pin, Script), MAX_SCRIPTS>,
    origin: Option<Timestamp>,
    writes: usize,
}

impl SimPins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, pin: Pin, level: Level) -> Result<()> {
        upsert(&mut self.digital_in, pin, level)
    }

    pub fn set_analog_input(&mut self, pin: Pin, value: u16) -> Result<()> {
        upsert(&mut self.analog_in, pin, value)
    }

    /// Replay `steps` on `pin` as time advances. The pin reads `initial`
    /// until the first step; step times count from the first `advance`.
    pub fn script(&mut self, pin: Pin, initial: Level, steps: &[(Timestamp, Level)]) -> Result<()> {
        let script = Script::from_slice(steps)?;
        self.set_input(pin, initial)?;
        self.scripts.push_back((pin, script))
    }

    /// Apply every script at time `now`. The first call fixes the origin.
    pub fn advance(&mut self, now: Timestamp) -> Result<()> {
        let origin = *self.origin.get_or_insert(now);
        let offset = elapsed(now, origin);
        for (pin, script) in &self.scripts {
            if let Some(level) = level_at(script, offset) {
                upsert(&mut self.digital_in, *pin, level)?;
            }
        }
        Ok(())
    }

    /// Last level written to `pin`, if any.
    pub fn output(&self, pin: Pin) -> Option<Level> {
        lookup(&self.digital_out, pin)
    }

    pub fn analog_output(&self, pin: Pin) -> Option<u8> {
        lookup(&self.analog_out, pin)
    }

    /// Total writes across all outputs.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DigitalSource for SimPins {
    fn poll_digital(&mut self, pin: Pin) -> Result<Level> {
        lookup(&self.digital_in, pin).ok_or(Error::UnmappedPin(pin))
    }
}

impl AnalogSource for SimPins {
    fn poll_analog(&mut self, pin: Pin) -> Result<u16> {
        lookup(&self.analog_in, pin).ok_or(Error::UnmappedPin(pin))
    }
}

impl DigitalSink for SimPins {
    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()> {
        trace!("sim: pin {pin} <- {level:?}");
        upsert(&mut self.digital_out, pin, level)?;
        self.writes += 1;
        Ok(())
    }
}

impl AnalogSink for SimPins {
    fn write_analog(&mut self, pin: Pin, value: u8) -> Result<()> {
        trace!("sim: pin {pin} <- {value}");
        upsert(&mut self.analog_out, pin, value)?;
        self.writes += 1;
        Ok(())
    }
}
