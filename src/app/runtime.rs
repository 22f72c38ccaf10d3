//! Control-loop runner: drives a signal chain once per poll cycle.
//!
//! ```text
//!   Clock::now ──▶ step(now) ──▶ Clock::wait(poll_interval) ──▶ …
//! ```
//!
//! A *step* is the caller's whole chain for one cycle: sample sources, run
//! combinators, write sinks. The runner only supplies the timestamp, counts
//! cycles and paces the loop. The first error a step returns is logged and
//! handed back; nothing retries.

use log::{error, info};

use crate::config::LoopConfig;
use crate::error::Result;
use crate::time::Timestamp;

use super::ports::Clock;

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

pub struct ControlLoop<C: Clock> {
    clock: C,
    poll_interval_ms: u32,
    max_cycles: Option<u64>,
    cycles: u64,
}

impl<C: Clock> ControlLoop<C> {
    /// Build a runner from a validated configuration.
    pub fn new(clock: C, config: &LoopConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            poll_interval_ms: config.poll_interval_ms,
            max_cycles: config.max_cycles,
            cycles: 0,
        })
    }

    /// Run one cycle to completion.
    pub fn poll_once(&mut self, mut step: impl FnMut(Timestamp) -> Result<()>) -> Result<()> {
        let now = self.clock.now();
        step(now).inspect_err(|e| {
            error!("cycle {} at {now}ms failed: {e}", self.cycles);
        })?;
        self.cycles += 1;
        Ok(())
    }

    /// Poll until `max_cycles` is reached (forever when unset), waiting
    /// `poll_interval_ms` between cycles. Returns the number of cycles run.
    pub fn run(&mut self, mut step: impl FnMut(Timestamp) -> Result<()>) -> Result<u64> {
        info!(
            "control loop started: poll={}ms, max_cycles={:?}",
            self.poll_interval_ms, self.max_cycles
        );
        while !self.finished() {
            self.poll_once(&mut step)?;
            if !self.finished() {
                self.clock.wait(self.poll_interval_ms);
            }
        }
        info!("control loop stopped after {} cycles", self.cycles);
        Ok(self.cycles)
    }

    fn finished(&self) -> bool {
        self.max_cycles.is_some_and(|max| self.cycles >= max)
    }

    /// Cycles completed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Clock that advances only when waited on.
    struct StepClock {
        now: Timestamp,
        waits: u32,
    }

    impl Clock for StepClock {
        fn now(&self) -> Timestamp {
            self.now
        }

        fn wait(&mut self, ms: u32) {
            self.now = self.now.wrapping_add(ms);
            self.waits += 1;
        }
    }

    fn config(max: Option<u64>) -> LoopConfig {
        LoopConfig {
            max_cycles: max,
            ..LoopConfig::default()
        }
    }

    #[test]
    fn runs_exactly_max_cycles() {
        let clock = StepClock { now: 0, waits: 0 };
        let mut rt = ControlLoop::new(clock, &config(Some(5))).unwrap();
        let mut seen = Vec::new();
        let n = rt
            .run(|now| {
                seen.push(now);
                Ok(())
            })
            .unwrap();
        assert_eq!(n, 5);
        assert_eq!(seen, [0, 10, 20, 30, 40]);
        assert_eq!(rt.clock().waits, 4);
    }

    #[test]
    fn first_error_stops_the_loop() {
        let clock = StepClock { now: 0, waits: 0 };
        let mut rt = ControlLoop::new(clock, &config(None)).unwrap();
        let result = rt.run(|now| if now >= 30 { Err(Error::EmptyCollection) } else { Ok(()) });
        assert_eq!(result, Err(Error::EmptyCollection));
        assert_eq!(rt.cycles(), 3);
    }

    #[test]
    fn invalid_config_is_refused() {
        let clock = StepClock { now: 0, waits: 0 };
        let bad = LoopConfig {
            blink_interval_ms: 0,
            ..LoopConfig::default()
        };
        assert!(ControlLoop::new(clock, &bad).is_err());
    }

    #[test]
    fn zero_cycles_runs_nothing() {
        let clock = StepClock { now: 0, waits: 0 };
        let mut rt = ControlLoop::new(clock, &config(Some(0))).unwrap();
        assert_eq!(rt.run(|_| Ok(())), Ok(0));
    }
}
