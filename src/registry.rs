//! Engine descriptors and dispatch.
//!
//! The hosting layer discovers the engines through an explicit [`Registry`]
//! value rather than process-wide tables: the adapter that embeds this
//! library constructs one registry at startup, owns it, and drops it at
//! shutdown. Each descriptor carries the engine's label, display name, and
//! declarative port catalog (names and range hints), and can be instantiated
//! into an [`AnyInstance`] that dispatches the uniform lifecycle to the
//! concrete engine.
//!
//! Port ordering is a contract with the host's own tables: control ports
//! first, then audio input, then audio output, with the stereo variants
//! appending the right-channel block after the left.

use crate::engines::{CombChannel, FirChannel, OnePoleChannel, ResonantChannel};
use crate::instance::{ChannelMode, FilterInstance};

/// The four engine kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Comb,
    OnePole,
    Fir,
    Resonant,
}

/// Role of a logical port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortClass {
    ControlInput,
    AudioInput,
    AudioOutput,
}

/// Declarative range hint for a control port.
#[derive(Debug, Clone, Copy)]
pub struct RangeHint {
    pub lower: f32,
    pub upper: f32,
    pub default: f32,
    /// Suggests a logarithmic mapping for host UI sliders.
    pub logarithmic: bool,
    /// The value is used as a whole number of samples.
    pub integer: bool,
}

/// One logical port of an engine.
#[derive(Debug, Clone, Copy)]
pub struct PortInfo {
    pub name: &'static str,
    pub class: PortClass,
    /// Present on control ports only.
    pub hint: Option<RangeHint>,
}

const fn control(
    name: &'static str,
    lower: f32,
    upper: f32,
    default: f32,
    logarithmic: bool,
    integer: bool,
) -> PortInfo {
    PortInfo {
        name,
        class: PortClass::ControlInput,
        hint: Some(RangeHint {
            lower,
            upper,
            default,
            logarithmic,
            integer,
        }),
    }
}

const fn audio_in(name: &'static str) -> PortInfo {
    PortInfo {
        name,
        class: PortClass::AudioInput,
        hint: None,
    }
}

const fn audio_out(name: &'static str) -> PortInfo {
    PortInfo {
        name,
        class: PortClass::AudioOutput,
        hint: None,
    }
}

/// A filter engine in mono or stereo form, as presented to the host.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub label: &'static str,
    pub name: &'static str,
    pub kind: EngineKind,
    pub mode: ChannelMode,
    pub ports: &'static [PortInfo],
}

impl Descriptor {
    /// Control ports with their logical indices, for hosts initializing
    /// controls from the hint defaults.
    pub fn control_ports(&self) -> impl Iterator<Item = (usize, &PortInfo)> {
        self.ports
            .iter()
            .enumerate()
            .filter(|(_, port)| port.class == PortClass::ControlInput)
    }
}

const COMB_MONO: Descriptor = Descriptor {
    label: "comb_mono",
    name: "Comb filter (mono)",
    kind: EngineKind::Comb,
    mode: ChannelMode::Mono,
    ports: &[
        control("Delay", 1.0, 100.0, 50.0, false, true),
        control("Sharpness", 0.5, 1.0, 0.875, false, false),
        audio_in("Input"),
        audio_out("Output"),
    ],
};

const COMB_STEREO: Descriptor = Descriptor {
    label: "comb_stereo",
    name: "Comb filter (stereo)",
    kind: EngineKind::Comb,
    mode: ChannelMode::Stereo,
    ports: &[
        control("Delay Left", 1.0, 100.0, 50.0, false, true),
        control("Sharpness Left", 0.5, 1.0, 0.875, false, false),
        audio_in("Input Left"),
        audio_out("Output Left"),
        control("Delay Right", 1.0, 100.0, 50.0, false, true),
        control("Sharpness Right", 0.5, 1.0, 0.875, false, false),
        audio_in("Input Right"),
        audio_out("Output Right"),
    ],
};

const IIR_MONO: Descriptor = Descriptor {
    label: "iir_mono",
    name: "One-pole IIR filter (mono)",
    kind: EngineKind::OnePole,
    mode: ChannelMode::Mono,
    ports: &[
        control("Coefficient", -0.99999, 0.99999, 0.0, false, false),
        audio_in("Input"),
        audio_out("Output"),
    ],
};

const IIR_STEREO: Descriptor = Descriptor {
    label: "iir_stereo",
    name: "One-pole IIR filter (stereo)",
    kind: EngineKind::OnePole,
    mode: ChannelMode::Stereo,
    ports: &[
        control("Coefficient Left", -0.99999, 0.99999, 0.0, false, false),
        audio_in("Input Left"),
        audio_out("Output Left"),
        control("Coefficient Right", -0.99999, 0.99999, 0.0, false, false),
        audio_in("Input Right"),
        audio_out("Output Right"),
    ],
};

const FIR_MONO: Descriptor = Descriptor {
    label: "fir_mono",
    name: "One-term FIR filter (mono)",
    kind: EngineKind::Fir,
    mode: ChannelMode::Mono,
    ports: &[
        control("First frequency", 20.0, 20000.0, 112.5, true, false),
        control("Dry/Wet", 0.0, 1.0, 0.0, false, false),
        audio_in("Input"),
        audio_out("Output"),
    ],
};

const FIR_STEREO: Descriptor = Descriptor {
    label: "fir_stereo",
    name: "One-term FIR filter (stereo)",
    kind: EngineKind::Fir,
    mode: ChannelMode::Stereo,
    ports: &[
        control("First frequency Left", 20.0, 20000.0, 112.5, true, false),
        control("Dry/Wet Left", 0.0, 1.0, 0.0, false, false),
        audio_in("Input Left"),
        audio_out("Output Left"),
        control("First frequency Right", 20.0, 20000.0, 112.5, true, false),
        control("Dry/Wet Right", 0.0, 1.0, 0.0, false, false),
        audio_in("Input Right"),
        audio_out("Output Right"),
    ],
};

const RESON_MONO: Descriptor = Descriptor {
    label: "reson_mono",
    name: "Two-pole reson filter (mono)",
    kind: EngineKind::Resonant,
    mode: ChannelMode::Mono,
    ports: &[
        control("Frequency", 20.0, 20000.0, 112.5, true, false),
        control("Bandwidth", 1.0, 20000.0, 11.9, true, false),
        audio_in("Input"),
        audio_out("Output"),
    ],
};

const RESON_STEREO: Descriptor = Descriptor {
    label: "reson_stereo",
    name: "Two-pole reson filter (stereo)",
    kind: EngineKind::Resonant,
    mode: ChannelMode::Stereo,
    ports: &[
        control("Frequency Left", 20.0, 20000.0, 112.5, true, false),
        control("Bandwidth Left", 1.0, 20000.0, 11.9, true, false),
        audio_in("Input Left"),
        audio_out("Output Left"),
        control("Frequency Right", 20.0, 20000.0, 112.5, true, false),
        control("Bandwidth Right", 1.0, 20000.0, 11.9, true, false),
        audio_in("Input Right"),
        audio_out("Output Right"),
    ],
};

static DESCRIPTORS: [Descriptor; 8] = [
    COMB_MONO,
    COMB_STEREO,
    IIR_MONO,
    IIR_STEREO,
    FIR_MONO,
    FIR_STEREO,
    RESON_MONO,
    RESON_STEREO,
];

/// The catalog of available engines.
///
/// Constructed once by the hosting adapter and passed by reference; the
/// library keeps no global state.
#[derive(Debug)]
pub struct Registry {
    descriptors: Vec<&'static Descriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            descriptors: DESCRIPTORS.iter().collect(),
        }
    }

    /// All descriptors, in a stable order.
    pub fn descriptors(&self) -> &[&'static Descriptor] {
        &self.descriptors
    }

    /// Looks a descriptor up by its label.
    pub fn find(&self, label: &str) -> Option<&'static Descriptor> {
        self.descriptors
            .iter()
            .copied()
            .find(|descriptor| descriptor.label == label)
    }

    /// Creates an inactive instance of the described engine.
    pub fn instantiate(&self, descriptor: &Descriptor, sample_rate: u32) -> AnyInstance {
        match descriptor.kind {
            EngineKind::Comb => AnyInstance::Comb(FilterInstance::new(descriptor.mode, sample_rate)),
            EngineKind::OnePole => {
                AnyInstance::OnePole(FilterInstance::new(descriptor.mode, sample_rate))
            }
            EngineKind::Fir => AnyInstance::Fir(FilterInstance::new(descriptor.mode, sample_rate)),
            EngineKind::Resonant => {
                AnyInstance::Resonant(FilterInstance::new(descriptor.mode, sample_rate))
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// An instance of any engine kind behind the uniform lifecycle.
///
/// Hosts that address controls by logical port index use [`set_control`];
/// hosts working with the typed control blocks can match on the variant and
/// use the inner [`FilterInstance`] directly.
///
/// [`set_control`]: AnyInstance::set_control
pub enum AnyInstance {
    Comb(FilterInstance<CombChannel>),
    OnePole(FilterInstance<OnePoleChannel>),
    Fir(FilterInstance<FirChannel>),
    Resonant(FilterInstance<ResonantChannel>),
}

/// Ports per channel block, including the audio ports.
fn port_stride(kind: EngineKind) -> usize {
    match kind {
        EngineKind::OnePole => 3,
        EngineKind::Comb | EngineKind::Fir | EngineKind::Resonant => 4,
    }
}

impl AnyInstance {
    pub fn kind(&self) -> EngineKind {
        match self {
            AnyInstance::Comb(_) => EngineKind::Comb,
            AnyInstance::OnePole(_) => EngineKind::OnePole,
            AnyInstance::Fir(_) => EngineKind::Fir,
            AnyInstance::Resonant(_) => EngineKind::Resonant,
        }
    }

    pub fn mode(&self) -> ChannelMode {
        match self {
            AnyInstance::Comb(instance) => instance.mode(),
            AnyInstance::OnePole(instance) => instance.mode(),
            AnyInstance::Fir(instance) => instance.mode(),
            AnyInstance::Resonant(instance) => instance.mode(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        match self {
            AnyInstance::Comb(instance) => instance.sample_rate(),
            AnyInstance::OnePole(instance) => instance.sample_rate(),
            AnyInstance::Fir(instance) => instance.sample_rate(),
            AnyInstance::Resonant(instance) => instance.sample_rate(),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            AnyInstance::Comb(instance) => instance.is_active(),
            AnyInstance::OnePole(instance) => instance.is_active(),
            AnyInstance::Fir(instance) => instance.is_active(),
            AnyInstance::Resonant(instance) => instance.is_active(),
        }
    }

    /// Binds one control value by its logical port index.
    ///
    /// Indices follow the descriptor's port table. Audio and out-of-range
    /// indices are ignored, matching the original contract where the host is
    /// trusted to pass indices from its own table.
    pub fn set_control(&mut self, port: usize, value: f32) {
        let stride = port_stride(self.kind());
        let channel = port / stride;
        let slot = port % stride;

        match self {
            AnyInstance::Comb(instance) => {
                if let Some(controls) = instance.controls_mut(channel) {
                    match slot {
                        0 => controls.delay = value,
                        1 => controls.sharpness = value,
                        _ => {}
                    }
                }
            }
            AnyInstance::OnePole(instance) => {
                if let Some(controls) = instance.controls_mut(channel) {
                    if slot == 0 {
                        controls.coefficient = value;
                    }
                }
            }
            AnyInstance::Fir(instance) => {
                if let Some(controls) = instance.controls_mut(channel) {
                    match slot {
                        0 => controls.frequency = value,
                        1 => controls.wet = value,
                        _ => {}
                    }
                }
            }
            AnyInstance::Resonant(instance) => {
                if let Some(controls) = instance.controls_mut(channel) {
                    match slot {
                        0 => controls.frequency = value,
                        1 => controls.bandwidth = value,
                        _ => {}
                    }
                }
            }
        }
    }

    /// See [`FilterInstance::activate`].
    pub fn activate(&mut self) {
        match self {
            AnyInstance::Comb(instance) => instance.activate(),
            AnyInstance::OnePole(instance) => instance.activate(),
            AnyInstance::Fir(instance) => instance.activate(),
            AnyInstance::Resonant(instance) => instance.activate(),
        }
    }

    /// See [`FilterInstance::process`].
    pub fn process(&mut self, inputs: &[&[f32]], outputs: &mut [&mut [f32]]) {
        match self {
            AnyInstance::Comb(instance) => instance.process(inputs, outputs),
            AnyInstance::OnePole(instance) => instance.process(inputs, outputs),
            AnyInstance::Fir(instance) => instance.process(inputs, outputs),
            AnyInstance::Resonant(instance) => instance.process(inputs, outputs),
        }
    }

    /// See [`FilterInstance::deactivate`].
    pub fn deactivate(&mut self) {
        match self {
            AnyInstance::Comb(instance) => instance.deactivate(),
            AnyInstance::OnePole(instance) => instance.deactivate(),
            AnyInstance::Fir(instance) => instance.deactivate(),
            AnyInstance::Resonant(instance) => instance.deactivate(),
        }
    }
}
