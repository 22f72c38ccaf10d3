//! Integration tests for the button → debounce → edge → toggle → LED chain.
//!
//! A scripted, bouncing button drives the full chain through `ControlLoop`;
//! the mock board's write history shows what the LED did.

use sigloop::adapters::sim::SimPins;
use sigloop::app::runtime::ControlLoop;
use sigloop::cell::StateCell;
use sigloop::config::LoopConfig;
use sigloop::drivers::button::{DebounceState, debounce_delay};
use sigloop::drivers::edge::{EdgeDetector, rising_edge};
use sigloop::io;
use sigloop::pins::{self, Level};
use sigloop::signal::toggle;
use sigloop::time::Timestamp;

use super::mock_hw::{ManualClock, MockHardware};

/// Level of a scripted input at `now`: the last step at or before it.
fn scripted(steps: &[(Timestamp, Level)], start: Timestamp, now: Timestamp) -> Level {
    let offset = now.wrapping_sub(start);
    steps
        .iter()
        .take_while(|(t, _)| *t <= offset)
        .last()
        .map_or(Level::Low, |&(_, level)| level)
}

/// Run the button chain over a script of offsets from `start`.
fn run_button(steps: &[(Timestamp, Level)], start: Timestamp, cycles: u64) -> MockHardware {
    let cfg = LoopConfig {
        max_cycles: Some(cycles),
        ..LoopConfig::default()
    };
    let mut hw = MockHardware::new();
    let debounced = StateCell::new(DebounceState::default());
    let prev = StateCell::new(Level::Low);
    let led = StateCell::new(Level::Low);

    let mut rt = ControlLoop::new(ManualClock::starting_at(start), &cfg).unwrap();
    rt.run(|now| {
        hw.set_input(cfg.button_pin, scripted(steps, start, now));
        let raw = io::dig_in(&mut hw, cfg.button_pin)?;
        let clean = debounce_delay(raw, cfg.debounce_delay_ms, now, &debounced);
        let pressed = rising_edge(clean, &prev);
        let level = toggle(Level::Low, Level::High, &led, pressed);
        io::dig_out(hw.at(now), cfg.button_led_pin, level)
    })
    .unwrap();
    hw
}

const BOUNCY_PRESSES: [(Timestamp, Level); 10] = [
    (100, Level::High),
    (103, Level::Low),
    (112, Level::High),
    (400, Level::Low),
    (405, Level::High),
    (412, Level::Low),
    (900, Level::High),
    (904, Level::Low),
    (913, Level::High),
    (1300, Level::Low),
];

#[test]
fn each_bouncy_press_toggles_once() {
    let hw = run_button(&BOUNCY_PRESSES, 0, 200);
    assert_eq!(hw.history(pins::BUTTON_LED), [Level::High, Level::Low]);

    let times = hw.write_times(pins::BUTTON_LED);
    // input settles at the 120 / 920 samples, promoted once stable for > 50 ms
    assert_eq!(times, [180, 980]);
}

#[test]
fn glitch_shorter_than_window_is_ignored() {
    let steps = [(100, Level::High), (140, Level::Low)];
    let hw = run_button(&steps, 0, 100);
    assert!(hw.history(pins::BUTTON_LED).is_empty());
}

#[test]
fn press_straddling_counter_wrap_still_toggles() {
    let start = u32::MAX - 104;
    let hw = run_button(&BOUNCY_PRESSES, start, 60);
    assert_eq!(hw.history(pins::BUTTON_LED), [Level::High]);
    assert_eq!(hw.write_times(pins::BUTTON_LED), [start.wrapping_add(180)]);
}

#[test]
fn release_edge_does_not_toggle() {
    let steps = [(100, Level::High), (500, Level::Low)];
    let hw = run_button(&steps, 0, 100);
    assert_eq!(hw.history(pins::BUTTON_LED), [Level::High]);
}

#[test]
fn simulated_board_runs_the_demo_chain() {
    let cfg = LoopConfig {
        max_cycles: Some(100),
        ..LoopConfig::default()
    };
    let mut board = SimPins::new();
    board.script(cfg.button_pin, Level::Low, &[(200, Level::High), (204, Level::Low), (208, Level::High)])
        .unwrap();
    let debounced = StateCell::new(DebounceState::default());
    let edges = EdgeDetector::new(Level::Low);
    let led = StateCell::new(Level::Low);

    let mut rt = ControlLoop::new(ManualClock::starting_at(0), &cfg).unwrap();
    rt.run(|now| {
        board.advance(now)?;
        let raw = io::dig_in(&mut board, cfg.button_pin)?;
        let clean = debounce_delay(raw, cfg.debounce_delay_ms, now, &debounced);
        let level = toggle(Level::Low, Level::High, &led, edges.rising(clean));
        io::dig_out(&mut board, cfg.button_led_pin, level)
    })
    .unwrap();

    assert_eq!(board.output(cfg.button_led_pin), Some(Level::High));
    assert_eq!(board.writes(), 1);
    assert_eq!(edges.previous(), Level::High);
}
