//! blink: host demo of a sigloop control loop.
//!
//! ```text
//!   every(blink_interval) ──▶ fold_p(toggle) ──────────────────────────▶ dig_out(board LED)
//!   dig_in(button) ──▶ debounce ──▶ rising_edge ──▶ toggle(Low, High) ──▶ dig_out(button LED)
//! ```
//!
//! Runs on the host clock against a simulated pin bank whose button input
//! replays a bouncy press/release script. Pass a JSON file as the first
//! argument to override [`LoopConfig`] defaults; `RUST_LOG` overrides the
//! configured log level.

use std::{env, fs};

use anyhow::{Context, Result};
use log::info;

use sigloop::adapters::sim::SimPins;
use sigloop::adapters::time::SystemClock;
use sigloop::app::runtime::ControlLoop;
use sigloop::cell::StateCell;
use sigloop::config::LoopConfig;
use sigloop::drivers::button::{DebounceState, debounce_delay};
use sigloop::drivers::edge::rising_edge;
use sigloop::pins::Level;
use sigloop::time::{TimerState, Timestamp, every};
use sigloop::{io, signal};

/// Two presses, each with contact bounce on make and break.
const BUTTON_SCRIPT: [(Timestamp, Level); 16] = [
    (2000, Level::High),
    (2004, Level::Low),
    (2007, Level::High),
    (2011, Level::Low),
    (2013, Level::High),
    (2600, Level::Low),
    (2603, Level::High),
    (2606, Level::Low),
    (9000, Level::High),
    (9002, Level::Low),
    (9005, Level::High),
    (9400, Level::Low),
    (9402, Level::High),
    (9404, Level::Low),
    (9406, Level::High),
    (9409, Level::Low),
];

fn load_config() -> Result<LoopConfig> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            LoopConfig::from_json(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(LoopConfig::default()),
    }
}

/// Console logger filtered at the configured level.
fn log_builder(config: &LoopConfig) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.level_filter()?);
    Ok(builder)
}

fn main() -> Result<()> {
    let config = load_config()?;
    log_builder(&config)?
        .parse_default_env()
        .try_init()
        .context("installing logger")?;
    info!("blink starting: {config:?}");

    let mut pins = SimPins::new();
    pins.script(config.button_pin, Level::Low, &BUTTON_SCRIPT)?;

    // ── Persistent state, one cell per stateful node ──────────
    let blink_timer = StateCell::new(TimerState::default());
    let board_led = StateCell::new(Level::Low);
    let debounced = StateCell::new(DebounceState::default());
    let button_prev = StateCell::new(Level::Low);
    let button_led = StateCell::new(Level::Low);

    let mut rt = ControlLoop::new(SystemClock::new(), &config)?;
    let cycles = rt.run(|now| {
        pins.advance(now)?;

        let tick = every(config.blink_interval_ms, now, &blink_timer);
        let led = signal::fold_p(|_, prev: &Level| prev.toggle(), &board_led, tick);
        io::dig_out(&mut pins, config.board_led_pin, led)?;

        let raw = io::dig_in(&mut pins, config.button_pin)?;
        let clean = debounce_delay(raw, config.debounce_delay_ms, now, &debounced);
        let pressed = rising_edge(clean, &button_prev);
        let level = signal::toggle(Level::Low, Level::High, &button_led, pressed);
        io::dig_out(&mut pins, config.button_led_pin, level)
    })?;

    info!(
        "blink finished: {cycles} cycles, {} pin writes, board LED {:?}, button LED {:?}",
        pins.writes(),
        board_led.get(),
        button_led.get()
    );
    Ok(())
}
