//! One-term FIR filter.
//!
//! Mixes the dry signal with a single delayed tap of itself, which notches
//! the frequency response at odd multiples of the configured frequency. The
//! tap length is re-derived from the frequency control every block.

use crate::channel::FilterChannel;
use crate::history::HistoryBuffer;

/// Lowest supported notch frequency in Hz. Fixes the history length at
/// activation time and is the floor the frequency control is clamped to.
pub const MIN_FREQ: f32 = 1.0;

/// Control values for one FIR channel.
#[derive(Debug, Clone, Copy)]
pub struct FirControls {
    /// First notch frequency in Hz.
    pub frequency: f32,
    /// Dry/wet mix in [0, 1]; 0 is fully dry.
    pub wet: f32,
}

impl Default for FirControls {
    fn default() -> Self {
        Self {
            frequency: 112.5,
            wet: 0.0,
        }
    }
}

/// Delay in samples putting the first notch at `frequency` Hz: half the
/// period of the frequency, truncated to whole samples.
fn tap_offset(frequency: f32, sample_rate: u32) -> usize {
    (sample_rate as f32 / (2.0 * frequency)) as usize
}

/// One channel of the one-term FIR engine.
///
/// The history length is derived once, from [`MIN_FREQ`] and the sample
/// rate, when the channel is allocated; it does not follow the frequency
/// control. The per-block tap offset is therefore wrapped by the buffer so
/// it always lands in bounds.
#[derive(Debug, Clone)]
pub struct FirChannel {
    history: HistoryBuffer,
    sample_rate: u32,
}

impl FirChannel {
    /// Filters one block.
    ///
    /// `frequency` is clamped to at least [`MIN_FREQ`], which also guards the
    /// tap-offset division against a zero frequency; `wet` is clamped to
    /// [0, 1]. Each input sample is written `tap_offset` ahead of the cursor
    /// and the output blends the dry input with the tap arriving under the
    /// cursor.
    pub fn run(&mut self, input: &[f32], output: &mut [f32], frequency: f32, wet: f32) {
        let frequency = frequency.max(MIN_FREQ);
        let wet = wet.clamp(0.0, 1.0);
        let offset = tap_offset(frequency, self.sample_rate);

        for (x, y) in input.iter().zip(output.iter_mut()) {
            self.history.write_ahead(offset, *x);
            *y = x * (1.0 - wet / 2.0) + self.history.read() * wet / 2.0;
            self.history.advance();
        }
    }
}

impl FilterChannel for FirChannel {
    type Controls = FirControls;

    fn new(sample_rate: u32) -> Self {
        Self {
            history: HistoryBuffer::new(tap_offset(MIN_FREQ, sample_rate)),
            sample_rate,
        }
    }

    fn reset(&mut self) {
        self.history.reset();
    }

    fn run(&mut self, controls: &FirControls, input: &[f32], output: &mut [f32]) {
        self.run(input, output, controls.frequency, controls.wet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const SAMPLE_RATE: u32 = 48000;

    fn channel() -> FirChannel {
        <FirChannel as FilterChannel>::new(SAMPLE_RATE)
    }

    #[test]
    fn test_history_length_fixed_by_min_freq() {
        let fir = channel();
        assert_eq!(fir.history.len(), (SAMPLE_RATE / 2) as usize);
    }

    #[test]
    fn test_zero_wet_is_identity() {
        let mut fir = channel();
        let input: Vec<f32> = (0..128).map(|n| (n as f32 * 0.13).sin()).collect();
        let mut output = vec![0.0; 128];
        fir.run(&input, &mut output, 440.0, 0.0);
        assert_eq!(output, input);

        // All frequencies, including ones needing the zero guard.
        for frequency in [0.0, 1.0, 20.0, 20000.0] {
            fir.run(&input, &mut output, frequency, 0.0);
            assert_eq!(output, input, "frequency {}", frequency);
        }
    }

    #[test]
    fn test_impulse_produces_delayed_tap() {
        let mut fir = channel();
        let mut input = vec![0.0; 64];
        input[0] = 1.0;
        let mut output = vec![0.0; 64];
        // 1 kHz at 48 kHz puts the tap 24 samples out.
        fir.run(&input, &mut output, 1000.0, 1.0);

        assert_eq!(output[0], 0.5);
        assert_eq!(output[24], 0.5);
        for (n, y) in output.iter().enumerate() {
            if n != 0 && n != 24 {
                assert_eq!(*y, 0.0, "unexpected energy at sample {}", n);
            }
        }
    }

    #[test]
    fn test_notch_cancels_tuned_sine() {
        // A sine at the notch frequency arrives at the tap half a period
        // late, so the fully wet mix cancels it once the tap is warm.
        let mut fir = channel();
        let input: Vec<f32> = (0..512)
            .map(|n| (2.0 * PI * 1000.0 * n as f32 / SAMPLE_RATE as f32).sin())
            .collect();
        let mut output = vec![0.0; 512];
        fir.run(&input, &mut output, 1000.0, 1.0);

        for (n, y) in output.iter().enumerate().skip(24) {
            assert!(
                y.abs() < 1e-4,
                "sample {} should cancel at the notch, got {}",
                n,
                y
            );
        }
    }

    #[test]
    fn test_zero_frequency_is_guarded() {
        let mut fir = channel();
        let input = vec![0.25; 64];
        let mut output = vec![0.0; 64];
        fir.run(&input, &mut output, 0.0, 1.0);
        assert!(output.iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_silence_in_silence_out() {
        let mut fir = channel();
        let input = vec![0.0; 256];
        let mut output = vec![1.0; 256];
        fir.run(&input, &mut output, 112.5, 0.5);
        assert!(output.iter().all(|y| *y == 0.0));
    }
}
