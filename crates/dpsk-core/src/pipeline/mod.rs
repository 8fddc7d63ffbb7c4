// crates/dpsk-core/src/pipeline/mod.rs

pub mod demodulator;
pub mod loopback;
pub mod modulator;
pub mod monitor;

use crate::error::Result;
use crate::profile::defaults::{default_profile, with_amplitude};
use crate::signal::{bit::Bit, sample::Sample};

use self::demodulator::Demodulator;
use self::modulator::Modulator;

/// Modulate `bits` with the default profile at `amplitude`.
///
/// A fresh modulator already sits in reset, so `reset` only matters for
/// symmetry with `Modulator::run`.
pub fn modulate(bits: &[Bit], amplitude: i32, reset: bool) -> Result<Vec<Sample>> {
    let mut m = Modulator::new(&with_amplitude(amplitude))?;
    Ok(m.run(bits, reset))
}

/// Demodulate `samples` with the default profile (16-bit samples, data recovery).
pub fn demodulate(samples: &[Sample]) -> Result<Vec<Bit>> {
    let mut d = Demodulator::new(&default_profile())?;
    d.run(samples, true)
}
