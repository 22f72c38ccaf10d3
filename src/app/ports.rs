//! Port traits: the boundary between signal chains and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ io::dig_in / io::dig_out ──▶ signal chain
//! ```
//!
//! Driven adapters (embedded-hal pins, the simulated pin bank, the host
//! clock) implement these traits. The combinators consume them through
//! generics, so the core never touches hardware directly.
//!
//! All port errors are fatal [`Error`](crate::error::Error)s: an unmapped
//! pin or a HAL failure stops the loop.

use crate::error::Result;
use crate::pins::{Level, Pin};
use crate::time::Timestamp;

// ───────────────────────────────────────────────────────────────
// Source ports (hardware → signal)
// ───────────────────────────────────────────────────────────────

/// Samples digital pin levels.
pub trait DigitalSource {
    fn poll_digital(&mut self, pin: Pin) -> Result<Level>;
}

/// Samples analog pins; the reading is the raw ADC count.
pub trait AnalogSource {
    fn poll_analog(&mut self, pin: Pin) -> Result<u16>;
}

// ───────────────────────────────────────────────────────────────
// Sink ports (signal → hardware)
// ───────────────────────────────────────────────────────────────

/// Drives digital output pins.
pub trait DigitalSink {
    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()>;
}

/// Drives PWM / DAC outputs with an 8-bit duty value.
pub trait AnalogSink {
    fn write_analog(&mut self, pin: Pin, value: u8) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock with a blocking wait.
pub trait Clock {
    fn now(&self) -> Timestamp;

    /// Block for `ms` milliseconds. Not cancellable.
    fn wait(&mut self, ms: u32);
}
