//! Pin numbering and digital pin levels.
//!
//! Single source of truth for the default pin assignments used by the demo
//! board (an Arduino-style layout). Applications override them through
//! [`LoopConfig`](crate::config::LoopConfig).

use serde::{Deserialize, Serialize};

/// Board pin number as the HAL or simulator addresses it.
pub type Pin = u16;

// ---------------------------------------------------------------------------
// Default board assignments
// ---------------------------------------------------------------------------

/// On-board LED.
pub const BOARD_LED: Pin = 13;
/// Momentary push button, wired active-high.
pub const BUTTON: Pin = 2;
/// LED toggled by the button chain.
pub const BUTTON_LED: Pin = 12;

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    High,
    #[default]
    Low,
}

impl Level {
    /// The opposite level.
    pub const fn toggle(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        u8::from(level.is_high())
    }
}
