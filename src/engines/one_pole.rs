//! One-pole IIR filter.
//!
//! A single-coefficient recursive filter. A positive coefficient biases the
//! output toward the retained previous sample, giving a low-pass response.
//! A negative coefficient flips the sign of the feedback term, giving a
//! high-pass-like response relative to the low-pass case; the original
//! derivation flags this as an approximation rather than a canonical
//! first-order high-pass, and the formula is preserved as-is.

use crate::channel::FilterChannel;

/// Control values for one one-pole channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePoleControls {
    /// Feedback coefficient in (-1, 1). 0 leaves the signal unaffected.
    pub coefficient: f32,
}

/// Largest magnitude the coefficient control accepts; the recurrence is
/// unstable at exactly +/-1.
const MAX_COEFFICIENT: f32 = 0.99999;

/// One channel of the one-pole IIR engine.
///
/// The only state is a one-sample memory of the previous output, reset to
/// zero on activation.
#[derive(Debug, Clone, Default)]
pub struct OnePoleChannel {
    previous: f32,
}

impl OnePoleChannel {
    /// Filters one block.
    ///
    /// Each output sample adds the previous output, scaled by the
    /// coefficient, to the input scaled by `1 - |coefficient|` so the peak
    /// amplitude stays normalized. The coefficient is clamped to the open
    /// interval (-1, 1).
    pub fn run(&mut self, input: &[f32], output: &mut [f32], coefficient: f32) {
        let coefficient = coefficient.clamp(-MAX_COEFFICIENT, MAX_COEFFICIENT);
        let dry = 1.0 - coefficient.abs();

        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = x * dry + self.previous * coefficient;
            self.previous = *y;
        }
    }
}

impl FilterChannel for OnePoleChannel {
    type Controls = OnePoleControls;

    fn new(_sample_rate: u32) -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.previous = 0.0;
    }

    fn run(&mut self, controls: &OnePoleControls, input: &[f32], output: &mut [f32]) {
        self.run(input, output, controls.coefficient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_coefficient_is_identity() {
        let mut one_pole = OnePoleChannel::default();
        let input: Vec<f32> = (0..64).map(|n| (n as f32 * 0.21).sin()).collect();
        let mut output = vec![0.0; 64];
        one_pole.run(&input, &mut output, 0.0);
        assert_eq!(output, input);
    }

    #[test]
    fn test_step_response_converges_geometrically() {
        // coefficient 0.5 on a unit step: output[n] = 1 - 0.5^(n+1).
        let mut one_pole = OnePoleChannel::default();
        let input = vec![1.0; 24];
        let mut output = vec![0.0; 24];
        one_pole.run(&input, &mut output, 0.5);

        for (n, y) in output.iter().enumerate() {
            let expected = 1.0 - 0.5f32.powi(n as i32 + 1);
            assert!(
                (y - expected).abs() < 1e-6,
                "sample {}: expected {}, got {}",
                n,
                expected,
                y
            );
        }
    }

    #[test]
    fn test_negative_coefficient_alternates_feedback_sign() {
        let mut one_pole = OnePoleChannel::default();
        let input = vec![1.0; 8];
        let mut output = vec![0.0; 8];
        one_pole.run(&input, &mut output, -0.5);

        // y0 = 0.5, y1 = 0.5 - 0.25 = 0.25, y2 = 0.5 - 0.125 = 0.375, ...
        assert!((output[0] - 0.5).abs() < 1e-6);
        assert!((output[1] - 0.25).abs() < 1e-6);
        assert!((output[2] - 0.375).abs() < 1e-6);
    }

    #[test]
    fn test_coefficient_clamped_short_of_unity() {
        let mut one_pole = OnePoleChannel::default();
        let input = vec![1.0; 512];
        let mut output = vec![0.0; 512];
        one_pole.run(&input, &mut output, 2.0);
        assert!(output.iter().all(|y| y.is_finite() && y.abs() <= 1.0));
    }

    #[test]
    fn test_memory_carries_across_blocks() {
        let mut one_pole = OnePoleChannel::default();
        let mut joined = vec![0.0; 16];
        one_pole.run(&[1.0; 16], &mut joined, 0.5);

        let mut split = OnePoleChannel::default();
        let mut first = vec![0.0; 8];
        let mut second = vec![0.0; 8];
        split.run(&[1.0; 8], &mut first, 0.5);
        split.run(&[1.0; 8], &mut second, 0.5);

        assert_eq!(&joined[..8], &first[..]);
        assert_eq!(&joined[8..], &second[..]);
    }
}
