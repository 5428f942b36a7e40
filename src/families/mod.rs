//! Built-in processor families.
//!
//! Only the simplest family ships with the core; richer algorithms
//! (springs, overshoot curves, physics integrators) live with the host
//! application and plug in through the same [`crate::traits`] contracts.

pub mod linear;

pub use linear::{LinearFamily, LinearProcessor, MotivatorId};
