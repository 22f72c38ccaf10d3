//! embedded-hal pin banks.
//!
//! Maps board pin numbers onto concrete `embedded_hal::digital` pin objects
//! so any HAL crate's GPIO types can feed [`DigitalSource`] and
//! [`DigitalSink`]. A bank holds at most `N` pins of one type.

use embedded_hal::digital::{InputPin, OutputPin};
use log::error;

use crate::app::ports::{DigitalSink, DigitalSource};
use crate::error::{Error, Result};
use crate::list::BoundedList;
use crate::pins::{Level, Pin};

/// Look up the HAL object registered under `pin`.
fn find<P, const N: usize>(bank: &mut BoundedList<(Pin, P), N>, pin: Pin) -> Result<&mut P> {
    bank.iter_mut()
        .find(|(p, _)| *p == pin)
        .map(|(_, io)| io)
        .ok_or(Error::UnmappedPin(pin))
}

/// Bank of digital inputs.
pub struct HalInputs<P, const N: usize> {
    pins: BoundedList<(Pin, P), N>,
}

impl<P: InputPin, const N: usize> Default for HalInputs<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InputPin, const N: usize> HalInputs<P, N> {
    pub const fn new() -> Self {
        Self {
            pins: BoundedList::new(),
        }
    }

    /// Register `io` under board number `pin`.
    pub fn attach(&mut self, pin: Pin, io: P) -> Result<()> {
        self.pins.push_back((pin, io))
    }
}

impl<P: InputPin, const N: usize> DigitalSource for HalInputs<P, N> {
    fn poll_digital(&mut self, pin: Pin) -> Result<Level> {
        let io = find(&mut self.pins, pin)?;
        io.is_high().map(Level::from).map_err(|e| {
            error!("pin {pin}: read failed: {e:?}");
            Error::Hardware(pin)
        })
    }
}

/// Bank of digital outputs.
pub struct HalOutputs<P, const N: usize> {
    pins: BoundedList<(Pin, P), N>,
}

impl<P: OutputPin, const N: usize> Default for HalOutputs<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OutputPin, const N: usize> HalOutputs<P, N> {
    pub const fn new() -> Self {
        Self {
            pins: BoundedList::new(),
        }
    }

    pub fn attach(&mut self, pin: Pin, io: P) -> Result<()> {
        self.pins.push_back((pin, io))
    }
}

impl<P: OutputPin, const N: usize> DigitalSink for HalOutputs<P, N> {
    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()> {
        let io = find(&mut self.pins, pin)?;
        let res = match level {
            Level::High => io.set_high(),
            Level::Low => io.set_low(),
        };
        res.map_err(|e| {
            error!("pin {pin}: write failed: {e:?}");
            Error::Hardware(pin)
        })
    }
}
