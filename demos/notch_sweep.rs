//! Renders a FIR notch sweeping down through a two-tone signal and writes
//! the result to `notch_sweep.wav`.

use anyhow::Result;
use filterpack::{ChannelMode, FilterInstance, FirChannel, FirControls};
use std::f32::consts::TAU;

const SAMPLE_RATE: u32 = 44100;
const BLOCK: usize = 441;
const SECONDS: usize = 4;

fn main() -> Result<()> {
    let mut instance = FilterInstance::<FirChannel>::new(ChannelMode::Mono, SAMPLE_RATE);
    instance.activate();

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create("notch_sweep.wav", spec)?;

    let blocks = SECONDS * SAMPLE_RATE as usize / BLOCK;
    let mut input = vec![0.0f32; BLOCK];
    let mut output = vec![0.0f32; BLOCK];

    for block in 0..blocks {
        // Two tones; the notch sweeps from 4 kHz down to 200 Hz and takes
        // each of them out in passing.
        let t0 = block * BLOCK;
        for (n, x) in input.iter_mut().enumerate() {
            let t = (t0 + n) as f32 / SAMPLE_RATE as f32;
            *x = 0.4 * (TAU * 440.0 * t).sin() + 0.4 * (TAU * 1760.0 * t).sin();
        }

        let sweep = block as f32 / blocks as f32;
        let frequency = 4000.0 * (200.0f32 / 4000.0).powf(sweep);
        instance.set_controls(0, FirControls { frequency, wet: 1.0 });

        instance.process(&[&input], &mut [&mut output]);
        for y in &output {
            writer.write_sample((y.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
        }
    }

    instance.deactivate();
    writer.finalize()?;
    println!("wrote {} blocks to notch_sweep.wav", blocks);
    Ok(())
}
