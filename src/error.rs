//! Unified error type for the signal core.
//!
//! A single `Error` enum that every fallible operation funnels into, so the
//! control loop has exactly one thing to log before halting. All variants are
//! `Copy` so they can be passed around without allocation.
//!
//! Every error is **fatal**: nothing in the core retries or recovers locally.
//! Bounded containers refuse to truncate or invent sentinel values; the
//! runner in [`crate::app::runtime`] logs the error and stops the loop.

use core::fmt;

use crate::pins::Pin;

// ---------------------------------------------------------------------------
// Core error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bounded container operation would exceed its static capacity.
    CapacityExceeded {
        /// Static capacity of the destination container.
        capacity: usize,
        /// Length the operation would have produced.
        required: usize,
    },
    /// An index is at or past the current length.
    IndexOutOfRange { index: usize, len: usize },
    /// A reducing operation was applied to zero-length input.
    EmptyCollection,
    /// A count could not be represented in the element type.
    Overflow,
    /// No adapter pin is registered under this number.
    UnmappedPin(Pin),
    /// The HAL reported a failure while driving or sampling this pin.
    Hardware(Pin),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity, required } => {
                write!(f, "capacity exceeded: need {required}, capacity {capacity}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyCollection => write!(f, "empty collection"),
            Self::Overflow => write!(f, "arithmetic overflow"),
            Self::UnmappedPin(pin) => write!(f, "pin {pin} is not mapped"),
            Self::Hardware(pin) => write!(f, "hardware fault on pin {pin}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
