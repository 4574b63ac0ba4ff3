//! Drives every engine through the full host contract: look the descriptor
//! up in the registry, instantiate, bind controls by port index, activate,
//! process blocks, deactivate, and re-activate.

use filterpack::{AnyInstance, ChannelMode, PortClass, Registry};

const SAMPLE_RATE: u32 = 48000;
const BLOCK: usize = 256;

/// Binds every control port to its hint default, the way a host initializes
/// a fresh instance.
fn bind_defaults(registry: &Registry, label: &str, instance: &mut AnyInstance) {
    let descriptor = registry.find(label).expect("descriptor");
    for (index, port) in descriptor.control_ports() {
        instance.set_control(index, port.hint.unwrap().default);
    }
}

fn process_mono(instance: &mut AnyInstance, input: &[f32]) -> Vec<f32> {
    let mut output = vec![0.0; input.len()];
    instance.process(&[input], &mut [&mut output]);
    output
}

#[test]
fn silence_round_trip_for_every_engine() {
    let registry = Registry::new();
    let silence = vec![0.0f32; BLOCK];

    for descriptor in registry.descriptors() {
        let mut instance = registry.instantiate(descriptor, SAMPLE_RATE);
        bind_defaults(&registry, descriptor.label, &mut instance);
        instance.activate();

        let channels = descriptor.mode.channels();
        let mut outputs: Vec<Vec<f32>> = vec![vec![1.0; BLOCK]; channels];
        {
            let inputs: Vec<&[f32]> = (0..channels).map(|_| silence.as_slice()).collect();
            let mut output_slices: Vec<&mut [f32]> =
                outputs.iter_mut().map(|o| o.as_mut_slice()).collect();
            instance.process(&inputs, &mut output_slices);
        }

        for (channel, output) in outputs.iter().enumerate() {
            assert!(
                output.iter().all(|y| *y == 0.0),
                "{} channel {} broke the silence round trip",
                descriptor.label,
                channel
            );
        }
        instance.deactivate();
    }
}

#[test]
fn comb_scenario_through_port_indices() {
    let registry = Registry::new();
    let descriptor = registry.find("comb_mono").expect("comb_mono");
    let mut instance = registry.instantiate(descriptor, SAMPLE_RATE);

    // Port 0 = Delay, port 1 = Sharpness per the descriptor table.
    instance.set_control(0, 48.0);
    instance.set_control(1, 0.9);
    instance.activate();

    let mut input = vec![0.0f32; 64];
    input[0] = 1.0;
    let output = process_mono(&mut instance, &input);

    let attenuation = 0.9f32.powi(48);
    assert!((output[0] - (1.0 - attenuation)).abs() < 1e-6);
    assert!((output[48] - attenuation * output[0]).abs() < 1e-6);
}

#[test]
fn one_pole_converges_on_a_step() {
    let registry = Registry::new();
    let descriptor = registry.find("iir_mono").expect("iir_mono");
    let mut instance = registry.instantiate(descriptor, SAMPLE_RATE);
    instance.set_control(0, 0.5);
    instance.activate();

    let output = process_mono(&mut instance, &[1.0f32; 32]);
    for (n, y) in output.iter().enumerate() {
        let expected = 1.0 - 0.5f32.powi(n as i32 + 1);
        assert!((y - expected).abs() < 1e-6, "sample {}", n);
    }
}

#[test]
fn stereo_sides_run_independent_state_and_controls() {
    let registry = Registry::new();
    let descriptor = registry.find("fir_stereo").expect("fir_stereo");
    let mut instance = registry.instantiate(descriptor, SAMPLE_RATE);

    // Left fully wet at 1 kHz, right fully dry.
    instance.set_control(0, 1000.0);
    instance.set_control(1, 1.0);
    instance.set_control(4, 1000.0);
    instance.set_control(5, 0.0);
    instance.activate();

    let mut impulse = vec![0.0f32; 64];
    impulse[0] = 1.0;
    let mut left = vec![0.0f32; 64];
    let mut right = vec![0.0f32; 64];
    {
        let inputs: [&[f32]; 2] = [&impulse, &impulse];
        instance.process(&inputs, &mut [&mut left, &mut right]);
    }

    assert_eq!(right, impulse, "dry side must pass through untouched");
    assert_eq!(left[0], 0.5);
    assert_eq!(left[24], 0.5, "wet side should carry the delayed tap");
}

#[test]
fn reactivation_starts_from_silence() {
    let registry = Registry::new();
    let descriptor = registry.find("reson_mono").expect("reson_mono");
    let mut instance = registry.instantiate(descriptor, SAMPLE_RATE);
    instance.set_control(0, 1000.0);
    instance.set_control(1, 100.0);
    instance.activate();

    let mut impulse = vec![0.0f32; 128];
    impulse[0] = 1.0;
    let first = process_mono(&mut instance, &impulse);

    instance.deactivate();
    instance.activate();
    let second = process_mono(&mut instance, &impulse);

    assert_eq!(first, second, "old ringing must not survive deactivate");
}

#[test]
fn audio_ports_are_enumerated_after_controls() {
    let registry = Registry::new();
    for descriptor in registry.descriptors() {
        let classes: Vec<PortClass> = descriptor.ports.iter().map(|p| p.class).collect();
        let per_channel = classes.len() / descriptor.mode.channels();
        for block in classes.chunks(per_channel) {
            assert_eq!(block[per_channel - 2], PortClass::AudioInput);
            assert_eq!(block[per_channel - 1], PortClass::AudioOutput);
        }
    }

    // The stereo layouts mirror the mono ones with Left/Right suffixes.
    let comb_stereo = registry.find("comb_stereo").unwrap();
    assert_eq!(comb_stereo.ports[0].name, "Delay Left");
    assert_eq!(comb_stereo.ports[4].name, "Delay Right");
    assert_eq!(comb_stereo.mode, ChannelMode::Stereo);
}
