//! Application core: the port boundary and the loop that drives it.
//!
//! Signal chains never talk to hardware directly. They read and write
//! through the **port traits** in [`ports`], and [`runtime`] polls them at a
//! fixed rate, so whole chains run on the host against simulated pins.

pub mod ports;
pub mod runtime;
