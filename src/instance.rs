//! Generic filter instance lifecycle.
//!
//! One adapter serves all four engines: it owns the fixed sample rate, the
//! current control values, and the per-channel DSP state, and walks the
//! instance through the host contract of create, bind, activate, process,
//! deactivate, and destroy. Channel state exists only between `activate` and
//! `deactivate`; re-activation starts from scratch.
//!
//! Lifecycle misuse (processing while inactive, activating twice) is a
//! programming error on the host side: it trips a `debug_assert!` in debug
//! builds and degrades to a logged no-op in release builds.

use crate::channel::FilterChannel;

/// Channel configuration of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Mono,
    Stereo,
}

impl ChannelMode {
    /// Number of independent channel pipelines.
    pub fn channels(self) -> usize {
        match self {
            ChannelMode::Mono => 1,
            ChannelMode::Stereo => 2,
        }
    }
}

/// A filter instance: the lifecycle wrapper around one engine's channels.
///
/// Control values are bound per channel and retained by the instance, so a
/// processing call always reads whatever was bound most recently. Audio
/// buffers are not retained: each `process` call borrows the host's input
/// and output slices only for its own duration.
///
/// # Examples
///
/// ```
/// use filterpack::{ChannelMode, CombChannel, CombControls, FilterInstance};
///
/// let mut comb = FilterInstance::<CombChannel>::new(ChannelMode::Mono, 48000);
/// comb.set_controls(0, CombControls { delay: 48.0, sharpness: 0.9 });
/// comb.activate();
///
/// let input = [1.0_f32, 0.0, 0.0, 0.0];
/// let mut output = [0.0_f32; 4];
/// comb.process(&[&input], &mut [&mut output]);
/// comb.deactivate();
/// ```
pub struct FilterInstance<C: FilterChannel> {
    sample_rate: u32,
    mode: ChannelMode,
    controls: Vec<C::Controls>,
    // One state per channel while active, empty otherwise.
    channels: Vec<C>,
}

impl<C: FilterChannel> FilterInstance<C> {
    /// Creates an inactive instance. The sample rate is fixed for the
    /// instance's lifetime.
    pub fn new(mode: ChannelMode, sample_rate: u32) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be positive");
        Self {
            sample_rate,
            mode,
            controls: vec![C::Controls::default(); mode.channels()],
            channels: Vec::new(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    /// True between `activate` and `deactivate`.
    pub fn is_active(&self) -> bool {
        !self.channels.is_empty()
    }

    /// Binds a full control block for one channel. Out-of-range channels are
    /// ignored. May be called at any point in the lifecycle, any number of
    /// times; the next `process` call reads the new values.
    pub fn set_controls(&mut self, channel: usize, controls: C::Controls) {
        match self.controls.get_mut(channel) {
            Some(slot) => *slot = controls,
            None => {
                debug_assert!(false, "channel {channel} out of range");
                log::warn!("ignoring controls for out-of-range channel {channel}");
            }
        }
    }

    /// Currently bound control block for one channel.
    pub fn controls(&self, channel: usize) -> Option<&C::Controls> {
        self.controls.get(channel)
    }

    /// Mutable access to one channel's control block, for hosts that bind
    /// individual control values rather than whole blocks.
    pub fn controls_mut(&mut self, channel: usize) -> Option<&mut C::Controls> {
        self.controls.get_mut(channel)
    }

    /// Allocates per-channel state. Calling `activate` on an already active
    /// instance is a host error and leaves the existing state untouched.
    pub fn activate(&mut self) {
        if self.is_active() {
            debug_assert!(false, "activate called on an active instance");
            log::warn!("activate called on an active instance; keeping existing state");
            return;
        }
        self.channels = (0..self.mode.channels())
            .map(|_| C::new(self.sample_rate))
            .collect();
    }

    /// Runs one block through every channel.
    ///
    /// `inputs` and `outputs` carry one slice per channel, borrowed from the
    /// host for this call only; slices beyond the channel count are ignored.
    /// Processing while inactive is a host error and leaves the outputs
    /// untouched. This path never allocates.
    pub fn process(&mut self, inputs: &[&[f32]], outputs: &mut [&mut [f32]]) {
        if !self.is_active() {
            debug_assert!(false, "process called on an inactive instance");
            log::warn!("process called on an inactive instance; skipping block");
            return;
        }
        debug_assert_eq!(inputs.len(), self.mode.channels());
        debug_assert_eq!(outputs.len(), self.mode.channels());

        for (channel, ((state, controls), (input, output))) in self
            .channels
            .iter_mut()
            .zip(self.controls.iter())
            .zip(inputs.iter().zip(outputs.iter_mut()))
            .enumerate()
        {
            debug_assert_eq!(
                input.len(),
                output.len(),
                "channel {channel}: input and output block lengths differ"
            );
            state.run(controls, input, output);
        }
    }

    /// Releases per-channel state. Safe to call on an inactive instance.
    pub fn deactivate(&mut self) {
        self.channels.clear();
    }
}
