//! Per-channel processing seam.
//!
//! Every filter engine processes one channel at a time; a stereo instance is
//! simply two independent channels of the same engine. This module provides
//! the `FilterChannel` trait that the generic lifecycle adapter in
//! [`crate::instance`] dispatches through.

/// Common interface for one channel of any filter engine.
///
/// A channel owns all mutable DSP state the algorithm needs (sample history,
/// previous-output memory) and is constructed with the instance's fixed
/// sample rate. Control values arrive as a per-engine `Controls` block read
/// once per processing call, so the channel always sees the most recently
/// bound values.
///
/// `run` is the real-time entry point: it must not allocate, block, or
/// perform I/O, and it must clamp out-of-range control values at the point
/// of use so the output stream stays finite.
pub trait FilterChannel {
    /// Control values read once per processing call.
    type Controls: Copy + Default;

    /// Allocates fresh channel state for the given sample rate.
    fn new(sample_rate: u32) -> Self;

    /// Clears all history so the channel behaves as if newly allocated.
    fn reset(&mut self);

    /// Filters one block of samples from `input` into `output`.
    ///
    /// Both slices are borrowed from the host for the duration of this call
    /// and must be the same length; when they differ the shorter length is
    /// processed.
    fn run(&mut self, controls: &Self::Controls, input: &[f32], output: &mut [f32]);
}
