//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements                   | Connects to                    |
//! |------------|------------------------------|--------------------------------|
//! | `hal`      | DigitalSource, DigitalSink   | embedded-hal GPIO pins         |
//! | `sim`      | all four pin ports           | In-memory, scriptable pin bank |
//! | `time`     | Clock, DelayNs               | `std::time::Instant`           |

pub mod hal;
pub mod sim;
pub mod time;
