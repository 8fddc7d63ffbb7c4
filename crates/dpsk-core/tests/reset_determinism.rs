use dpsk_core::dynamics::state::Phase;
use dpsk_core::profile::defaults::with_amplitude;
use dpsk_core::signal::bit::bits;
use dpsk_core::{Bit, Demodulator, Modulator, Sample};

#[test]
fn fresh_modulator_sits_in_reset() {
    let m = Modulator::new(&with_amplitude(1000)).unwrap();
    assert_eq!(m.phase(), Phase::Reset);
    assert_eq!(m.delayed(), Bit::ONE);
    assert_eq!(m.output(), Sample(1000));
}

#[test]
fn reset_restores_registers_after_any_history() {
    let mut m = Modulator::new(&with_amplitude(1000)).unwrap();
    m.run(&bits(&[0, 0, 1, 0, 1, 0]), true);
    assert_eq!(m.phase(), Phase::Running);
    assert_eq!(m.delayed(), Bit::ZERO);

    let p = m.clock(true, Bit::ZERO);
    assert!(p.reset);
    assert_eq!(p.sample, Sample(1000));
    assert_eq!(m.phase(), Phase::Reset);
    assert_eq!(m.delayed(), Bit::ONE);
    assert_eq!(m.output(), Sample(1000));
    assert_eq!(m.state().carrier.previous, Sample(1000));
}

#[test]
fn identical_after_reset_regardless_of_history() {
    let p = with_amplitude(1000);
    let probe = bits(&[1, 1, 0, 1, 0, 0, 0, 1]);

    let mut a = Modulator::new(&p).unwrap();
    let mut b = Modulator::new(&p).unwrap();
    b.run(&bits(&[0, 1, 0, 0, 0]), true);

    assert_eq!(a.run(&probe, true), b.run(&probe, true));
}

#[test]
fn reset_release_enters_running() {
    let mut d = Demodulator::new(&with_amplitude(1000)).unwrap();
    d.clock(true, Sample(-1000));
    d.clock(true, Sample(-1000));
    assert_eq!(d.phase(), Phase::Reset);
    assert_eq!(d.delayed(), Bit::ONE);

    d.clock(false, Sample(-1000));
    assert_eq!(d.phase(), Phase::Running);
    assert_eq!(d.delayed(), Bit::ZERO);
    assert_eq!(d.stats.ticks, 3);
    assert_eq!(d.stats.reset_ticks, 2);
}

#[test]
fn delay_and_carrier_reset_values_are_independent() {
    let mut p = with_amplitude(-40);
    p.delay_init = Bit::ZERO;
    let m = Modulator::new(&p).unwrap();
    assert_eq!(m.delayed(), Bit::ZERO);
    assert_eq!(m.output(), Sample(-40));
}
