//! Bridges between pins and signals.
//!
//! Inputs are sampled every poll, so `dig_in` and `ana_in` always fire.
//! Outputs are written only when their signal fires; an absent signal
//! leaves the pin where it was.

use crate::app::ports::{AnalogSink, AnalogSource, DigitalSink, DigitalSource};
use crate::error::Result;
use crate::pins::{Level, Pin};
use crate::signal::Signal;

/// Current level of a digital input.
pub fn dig_in(source: &mut impl DigitalSource, pin: Pin) -> Result<Signal<Level>> {
    source.poll_digital(pin).map(Signal::present)
}

/// Current reading of an analog input.
pub fn ana_in(source: &mut impl AnalogSource, pin: Pin) -> Result<Signal<u16>> {
    source.poll_analog(pin).map(Signal::present)
}

/// Drive a digital output when `s` fires.
pub fn dig_out(sink: &mut impl DigitalSink, pin: Pin, s: Signal<Level>) -> Result<()> {
    match s.into_option() {
        Some(level) => sink.write_digital(pin, level),
        None => Ok(()),
    }
}

/// Drive an analog output when `s` fires.
pub fn ana_out(sink: &mut impl AnalogSink, pin: Pin, s: Signal<u8>) -> Result<()> {
    match s.into_option() {
        Some(value) => sink.write_analog(pin, value),
        None => Ok(()),
    }
}
