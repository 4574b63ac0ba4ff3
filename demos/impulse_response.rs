//! Prints the first samples of each engine's impulse response.

use filterpack::{Registry, FilterChannel, CombChannel, FirChannel, OnePoleChannel, ResonantChannel};

const SAMPLE_RATE: u32 = 48000;
const SHOWN: usize = 12;

fn impulse(len: usize) -> Vec<f32> {
    let mut input = vec![0.0; len];
    input[0] = 1.0;
    input
}

fn print_response(name: &str, output: &[f32]) {
    print!("{:28}", name);
    for y in &output[..SHOWN] {
        print!("{:8.4} ", y);
    }
    println!();
}

fn main() {
    println!("Impulse responses at {} Hz\n", SAMPLE_RATE);

    let input = impulse(64);
    let mut output = vec![0.0; 64];

    let mut comb = <CombChannel as FilterChannel>::new(SAMPLE_RATE);
    comb.run(&input, &mut output, 8.0, 0.9);
    print_response("comb (delay 8, sharp 0.9)", &output);

    let mut one_pole = <OnePoleChannel as FilterChannel>::new(SAMPLE_RATE);
    one_pole.run(&input, &mut output, 0.5);
    print_response("one-pole (coef 0.5)", &output);

    let mut fir = <FirChannel as FilterChannel>::new(SAMPLE_RATE);
    fir.run(&input, &mut output, 4000.0, 1.0);
    print_response("fir (4 kHz, fully wet)", &output);

    let mut reson = <ResonantChannel as FilterChannel>::new(SAMPLE_RATE);
    reson.run(&input, &mut output, 4000.0, 500.0);
    print_response("reson (4 kHz, bw 500)", &output);

    println!("\nAvailable engines:");
    let registry = Registry::new();
    for descriptor in registry.descriptors() {
        println!("  {:14} {}", descriptor.label, descriptor.name);
    }
}
