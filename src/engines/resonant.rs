//! Two-pole resonant filter.
//!
//! A classic reson filter that attenuates frequencies below and above a
//! resonant band. The complex pole pair is expressed in radius/angle form:
//! the radius follows the bandwidth control (closer to 1 means a narrower
//! band) and the angle follows the center frequency.

use std::f32::consts::PI;

use crate::channel::FilterChannel;

/// Control values for one resonant channel.
#[derive(Debug, Clone, Copy)]
pub struct ResonantControls {
    /// Center frequency in Hz.
    pub frequency: f32,
    /// Bandwidth in Hz.
    pub bandwidth: f32,
}

impl Default for ResonantControls {
    fn default() -> Self {
        Self {
            frequency: 112.5,
            bandwidth: 11.9,
        }
    }
}

/// Recurrence coefficients derived once per block from the current controls.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    /// Input gain normalizing the peak of the resonance.
    gain: f32,
    /// Weight on the most recent output, `2 * r * cos(angle)`.
    feedback1: f32,
    /// Weight on the output before that, `r^2`.
    feedback2: f32,
}

impl Coefficients {
    fn derive(frequency: f32, bandwidth: f32, sample_rate: u32) -> Self {
        let sample_rate = sample_rate as f32;
        // Keep the pole radius in [0, 1] and the cosine argument in range.
        let bandwidth = bandwidth.clamp(0.0, sample_rate / PI);
        let frequency = frequency.clamp(0.0, sample_rate / 2.0);

        let radius = 1.0 - PI * bandwidth / sample_rate;
        // Extreme bandwidth/frequency pairs can push this fractionally out of
        // [-1, 1]; an unclamped value would turn acos into NaN and poison the
        // whole output stream.
        let argument = ((2.0 * radius / (1.0 + radius * radius))
            * (2.0 * PI * frequency / sample_rate).cos())
        .clamp(-1.0, 1.0);
        let angle = argument.acos();

        Self {
            gain: (1.0 - radius * radius) * angle.sin(),
            feedback1: 2.0 * radius * angle.cos(),
            feedback2: radius * radius,
        }
    }
}

/// One channel of the two-pole resonant engine.
#[derive(Debug, Clone)]
pub struct ResonantChannel {
    sample_rate: u32,
    y1: f32, // Output at t-1
    y2: f32, // Output at t-2
}

impl ResonantChannel {
    /// Filters one block.
    ///
    /// The pole coefficients are recomputed from the current controls once
    /// per block, not per sample. Frequency is clamped to [0, Nyquist] and
    /// bandwidth to [0, sample_rate / pi]; together with the arccos domain
    /// clamp that keeps the output finite for any control values.
    pub fn run(&mut self, input: &[f32], output: &mut [f32], frequency: f32, bandwidth: f32) {
        let c = Coefficients::derive(frequency, bandwidth, self.sample_rate);

        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = c.gain * x + c.feedback1 * self.y1 - c.feedback2 * self.y2;
            self.y2 = self.y1;
            self.y1 = *y;
        }
    }
}

impl FilterChannel for ResonantChannel {
    type Controls = ResonantControls;

    fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn reset(&mut self) {
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    fn run(&mut self, controls: &ResonantControls, input: &[f32], output: &mut [f32]) {
        self.run(input, output, controls.frequency, controls.bandwidth);
    }
}
