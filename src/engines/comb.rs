//! Comb filter.
//!
//! A feed-forward/feedback delay-line filter producing frequency peaks at
//! multiples of `sample_rate / delay`, where the delay in samples is a
//! user-configurable control.

use crate::channel::FilterChannel;
use crate::history::HistoryBuffer;

/// History capacity in samples; the delay control is clamped to this.
pub const MAX_DELAY: usize = 100;

/// Control values for one comb channel.
#[derive(Debug, Clone, Copy)]
pub struct CombControls {
    /// Delay in samples, 1..=[`MAX_DELAY`]. Values outside the range are
    /// clamped when the block is run.
    pub delay: f32,
    /// Feedback sharpness in [0, 1]. Higher values push more energy into the
    /// delayed path, sharpening the resonant peaks.
    pub sharpness: f32,
}

impl Default for CombControls {
    fn default() -> Self {
        Self {
            delay: 50.0,
            sharpness: 0.875,
        }
    }
}

/// One channel of the comb filter engine.
///
/// The channel keeps a fixed [`MAX_DELAY`]-sample circular history. Each
/// output sample blends the dry input with the sample the cursor has reached,
/// and the output (not the input) is written `delay` samples ahead of the
/// cursor, which closes the feedback loop without a second buffer.
#[derive(Debug, Clone)]
pub struct CombChannel {
    history: HistoryBuffer,
}

impl CombChannel {
    /// Filters one block.
    ///
    /// `delay` is truncated to whole samples and clamped to the history
    /// capacity; `sharpness` is clamped to [0, 1]. The delayed path is
    /// weighted by `sharpness ^ delay`, so a longer delay decays harder for
    /// the same sharpness. With `sharpness` at 0 the filter passes the input
    /// through unchanged; at 1 the delayed signal never decays and can
    /// self-sustain.
    pub fn run(&mut self, input: &[f32], output: &mut [f32], delay: f32, sharpness: f32) {
        let delay = (delay.max(0.0) as usize).min(self.history.len());
        let sharpness = sharpness.clamp(0.0, 1.0);
        let attenuation = sharpness.powi(delay as i32);

        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = x * (1.0 - attenuation) + attenuation * self.history.read();
            // Feed the output back <delay> steps ahead of the cursor.
            self.history.write_ahead(delay, *y);
            self.history.advance();
        }
    }
}

impl FilterChannel for CombChannel {
    type Controls = CombControls;

    fn new(_sample_rate: u32) -> Self {
        Self {
            history: HistoryBuffer::new(MAX_DELAY),
        }
    }

    fn reset(&mut self) {
        self.history.reset();
    }

    fn run(&mut self, controls: &CombControls, input: &[f32], output: &mut [f32]) {
        self.run(input, output, controls.delay, controls.sharpness);
    }
}
