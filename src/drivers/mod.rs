//! Input conditioning: contact debounce and edge detection.

pub mod button;
pub mod edge;
