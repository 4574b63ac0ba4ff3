//! Filterpack - a small collection of real-time audio filters.
//!
//! Four independent filter engines (comb, one-pole IIR, one-term FIR, and
//! two-pole resonant) share a single lifecycle: create an instance, bind
//! control values, activate it, run it over blocks of samples, deactivate it,
//! and drop it. Each engine comes in mono and stereo form; stereo is two
//! fully independent channel pipelines.
//!
//! The processing path is real-time safe: once an instance is active, running
//! a block never allocates, locks, or performs I/O. All allocation happens in
//! `activate`, all release in `deactivate`.

pub mod channel;
pub mod engines;
pub mod history;
pub mod instance;
pub mod registry;

// Re-export commonly used types at the crate root
pub use channel::FilterChannel;
pub use engines::{
    CombChannel, CombControls, FirChannel, FirControls, OnePoleChannel, OnePoleControls,
    ResonantChannel, ResonantControls,
};
pub use history::HistoryBuffer;
pub use instance::{ChannelMode, FilterInstance};
pub use registry::{AnyInstance, Descriptor, EngineKind, PortClass, PortInfo, RangeHint, Registry};
