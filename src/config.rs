//! Control-loop configuration
//!
//! All tunable parameters for a signal loop and the demo board wiring.
//! Values come from [`LoopConfig::default`] or a JSON document; missing
//! fields fall back to their defaults.

use core::str::FromStr;

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins::{self, Pin};

/// Core loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    // --- Timing ---
    /// Wait between poll cycles (milliseconds)
    pub poll_interval_ms: u32,
    /// Button stability window (milliseconds)
    pub debounce_delay_ms: u32,
    /// Board LED toggle period (milliseconds)
    pub blink_interval_ms: u32,

    // --- Pins ---
    pub board_led_pin: Pin,
    pub button_pin: Pin,
    pub button_led_pin: Pin,

    // --- Run control ---
    /// Stop after this many cycles; `None` runs forever.
    pub max_cycles: Option<u64>,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_interval_ms: 10,    // 100 Hz
            debounce_delay_ms: 50,
            blink_interval_ms: 1000, // 1 Hz

            // Pins
            board_led_pin: pins::BOARD_LED,
            button_pin: pins::BUTTON,
            button_led_pin: pins::BUTTON_LED,

            // Run control
            max_cycles: Some(3000),
            log_level: String::from("info"),
        }
    }
}

impl LoopConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| {
            warn!("config: {e}");
            Error::Config("malformed JSON")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.blink_interval_ms == 0 {
            return Err(Error::Config("blink_interval_ms must be non-zero"));
        }
        if self.poll_interval_ms >= self.debounce_delay_ms {
            return Err(Error::Config(
                "poll_interval_ms must be shorter than debounce_delay_ms",
            ));
        }
        let [a, b, c] = [self.board_led_pin, self.button_pin, self.button_led_pin];
        if a == b || a == c || b == c {
            return Err(Error::Config("pin assignments must be distinct"));
        }
        self.level_filter()?;
        if self.max_cycles == Some(0) {
            warn!("config: max_cycles is 0, the loop will not run");
        }
        Ok(())
    }

    /// `log_level` as a filter for the logger.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| Error::Config("unknown log_level"))
    }
}
