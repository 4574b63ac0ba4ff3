//! The four filter engines.
//!
//! Each engine is a peer leaf with the same shape: a per-channel state struct
//! implementing [`crate::FilterChannel`], a `Controls` block of the values a
//! host binds to it, and a `run` method containing the per-sample algorithm.
//! No engine depends on another.

mod comb;
mod fir;
mod one_pole;
mod resonant;

pub use comb::{CombChannel, CombControls, MAX_DELAY};
pub use fir::{FirChannel, FirControls, MIN_FREQ};
pub use one_pole::{OnePoleChannel, OnePoleControls};
pub use resonant::{ResonantChannel, ResonantControls};
