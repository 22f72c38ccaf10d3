//! Integration tests for the clock → timer → fold → pin pipeline.
//!
//! These drive the blink chain through `ControlLoop` on a manual clock and
//! check the full write history on the mock board.

use sigloop::app::runtime::ControlLoop;
use sigloop::cell::StateCell;
use sigloop::config::LoopConfig;
use sigloop::error::Error;
use sigloop::io;
use sigloop::pins::{self, Level};
use sigloop::signal::fold_p;
use sigloop::time::{TimerState, every};

use super::mock_hw::{ManualClock, MockHardware};

fn config(cycles: u64) -> LoopConfig {
    LoopConfig {
        max_cycles: Some(cycles),
        ..LoopConfig::default()
    }
}

/// Run the blink chain for `cycles` polls starting at `start`.
fn run_blink(start: u32, cycles: u64) -> (MockHardware, Result<u64, Error>) {
    let cfg = config(cycles);
    let mut hw = MockHardware::new();
    let timer = StateCell::new(TimerState { last_pulse: start });
    let led = StateCell::new(Level::Low);

    let mut rt = ControlLoop::new(ManualClock::starting_at(start), &cfg).unwrap();
    let result = rt.run(|now| {
        let tick = every(cfg.blink_interval_ms, now, &timer);
        let level = fold_p(|_, prev: &Level| prev.toggle(), &led, tick);
        io::dig_out(hw.at(now), cfg.board_led_pin, level)
    });
    (hw, result)
}

// ── Blink ─────────────────────────────────────────────────────

#[test]
fn blink_toggles_once_per_interval() {
    let (hw, result) = run_blink(0, 350);
    assert_eq!(result, Ok(350));
    assert_eq!(hw.write_times(pins::BOARD_LED), [1000, 2000, 3000]);
    assert_eq!(
        hw.history(pins::BOARD_LED),
        [Level::High, Level::Low, Level::High]
    );
}

#[test]
fn blink_keeps_running_across_counter_wrap() {
    let start = u32::MAX - 2_499;
    let (hw, result) = run_blink(start, 500);
    assert_eq!(result, Ok(500));

    let times = hw.write_times(pins::BOARD_LED);
    assert!(
        times.iter().any(|&t| t < 5_000),
        "timer must fire after the counter wraps, got {times:?}"
    );
    let levels = hw.history(pins::BOARD_LED);
    for pair in levels.windows(2) {
        assert_ne!(pair[0], pair[1], "each tick must flip the LED");
    }
}

// ── Fatal errors ──────────────────────────────────────────────

#[test]
fn hardware_fault_halts_the_loop() {
    let cfg = config(1_000);
    let mut hw = MockHardware::new();
    hw.faulty = Some(pins::BOARD_LED);
    let timer = StateCell::new(TimerState::default());

    let mut rt = ControlLoop::new(ManualClock::starting_at(0), &cfg).unwrap();
    let result = rt.run(|now| {
        let tick = every(cfg.blink_interval_ms, now, &timer);
        io::dig_out(&mut hw, cfg.board_led_pin, tick.into_option().map(|_| Level::High).into())
    });

    assert_eq!(result, Err(Error::Hardware(pins::BOARD_LED)));
    // cycles 0..=99 succeed, the poll at t=1000 fails
    assert_eq!(rt.cycles(), 100);
    assert!(hw.writes.is_empty());
}

#[test]
fn unmapped_input_is_fatal() {
    let cfg = config(10);
    let mut hw = MockHardware::new();
    let mut rt = ControlLoop::new(ManualClock::starting_at(0), &cfg).unwrap();
    let result = rt.run(|_| io::dig_in(&mut hw, cfg.button_pin).map(|_| ()));
    assert_eq!(result, Err(Error::UnmappedPin(cfg.button_pin)));
    assert_eq!(rt.cycles(), 0);
}

#[test]
fn loop_waits_between_cycles_only() {
    let cfg = config(4);
    let mut rt = ControlLoop::new(ManualClock::starting_at(0), &cfg).unwrap();
    assert_eq!(rt.run(|_| Ok(())), Ok(4));
    assert_eq!(rt.clock().waits, 3);
}
