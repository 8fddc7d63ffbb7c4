use dpsk_core::profile::defaults::with_amplitude;
use dpsk_core::signal::bit::bits;
use dpsk_core::{demodulate, modulate, Demodulator, Modulator, Recovery, Sample};

fn reference_samples() -> Vec<Sample> {
    [1000, -1000, 1000, 1000, -1000, -1000, 1000, 1000]
        .into_iter()
        .map(Sample)
        .collect()
}

#[test]
fn reference_stimulus_modulates_to_expected_samples() {
    let input = bits(&[1, 0, 1, 1, 0, 0, 1, 1]);
    let out = modulate(&input, 1000, true).unwrap();
    assert_eq!(out, reference_samples());
}

#[test]
fn reference_stimulus_encoded_bits() {
    let mut m = Modulator::new(&with_amplitude(1000)).unwrap();
    let probes = m.run_monitored(&bits(&[1, 0, 1, 1, 0, 0, 1, 1]), true);

    let encoded: Vec<_> = probes.iter().map(|p| p.encoded).collect();
    assert_eq!(encoded, bits(&[1, 0, 0, 1, 0, 1, 0, 1]));

    // Delayed bit is the reset value, then the previous raw bit.
    let delayed: Vec<_> = probes.iter().map(|p| p.delayed).collect();
    assert_eq!(delayed, bits(&[1, 1, 0, 1, 1, 0, 0, 1]));
    assert_eq!(m.stats.phase_flips, 4);
}

#[test]
fn reference_samples_demodulate_to_data() {
    let recovered = demodulate(&reference_samples()).unwrap();
    assert_eq!(recovered, bits(&[1, 0, 1, 1, 0, 0, 1, 1]));
}

#[test]
fn reference_samples_demodulate_to_symbols() {
    let mut p = with_amplitude(1000);
    p.recovery = Recovery::Symbol;
    let mut d = Demodulator::new(&p).unwrap();
    let recovered = d.run(&reference_samples(), true).unwrap();
    assert_eq!(recovered, bits(&[1, 0, 0, 1, 0, 1, 0, 1]));
    assert_eq!(d.stats.symbol_zeros, 4);
}
