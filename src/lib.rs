//! sigloop: bounded-memory signal combinators for embedded control loops.
//!
//! Each poll cycle every channel carries at most one event (a [`Signal`]).
//! Stateless combinators transform signals; stateful ones fold them into
//! [`StateCell`]s that persist across polls. Containers are fixed-capacity
//! [`BoundedList`]s, so memory use is known at compile time.
//!
//! Hardware stays behind the port traits in [`app::ports`]; [`adapters`]
//! provides embedded-hal, simulated and host implementations.

// ── Core ──────────────────────────────────────────────────────
pub mod cell;
pub mod closure;
pub mod error;
pub mod list;
pub mod signal;
pub mod time;
pub mod variant;

// ── Pins and input conditioning ───────────────────────────────
pub mod drivers;
pub mod io;
pub mod pins;

// ── Boundary ──────────────────────────────────────────────────
pub mod adapters;
pub mod app;
pub mod config;

pub use cell::StateCell;
pub use error::{Error, Result};
pub use list::BoundedList;
pub use pins::Level;
pub use signal::Signal;
