//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that runs complete signal chains through
//! the control loop against mock adapters. All tests run on the host with
//! no real hardware required.

mod button_flow_tests;
mod control_loop_tests;
mod mock_hw;
