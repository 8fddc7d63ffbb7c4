// crates/dpsk-core/src/pipeline/loopback.rs

use crate::error::Result;
use crate::pipeline::demodulator::Demodulator;
use crate::pipeline::modulator::Modulator;
use crate::pipeline::monitor::{DemodulatorProbe, ModulatorProbe};
use crate::profile::profile::{Profile, Recovery};
use crate::signal::bit::Bit;
use crate::stats::counters::{DemodulatorCounters, ModulatorCounters};

/// One self-checking testbench run over an ideal channel.
#[derive(Clone, Debug)]
pub struct Loopback {
    pub tx: Vec<ModulatorProbe>,
    pub rx: Vec<DemodulatorProbe>,
    /// Running-tick indices (0 = first bit after reset) where the receiver
    /// disagreed with the expected stream.
    pub mismatches: Vec<usize>,
    pub tx_stats: ModulatorCounters,
    pub rx_stats: DemodulatorCounters,
}

impl Loopback {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Hold both sides in reset for `profile.reset_ticks`, modulate `bits`, feed
/// the running samples straight into the demodulator and compare.
///
/// With `Recovery::Data` the receiver must reproduce `bits`; with
/// `Recovery::Symbol` it must reproduce the modulator's encoded bits.
pub fn run_loopback(profile: &Profile, bits: &[Bit]) -> Result<Loopback> {
    let mut modulator = Modulator::new(profile)?;
    let mut demodulator = Demodulator::new(profile)?;

    let tx = modulator.run_testbench(profile.reset_ticks, bits);
    let sent: Vec<_> = tx.iter().filter(|p| !p.reset).map(|p| p.sample).collect();
    let rx = demodulator.run_testbench(profile.reset_ticks, &sent)?;

    let expected = tx.iter().filter(|p| !p.reset).map(|p| match profile.recovery {
        Recovery::Data => p.bit,
        Recovery::Symbol => p.encoded,
    });
    let got = rx.iter().filter(|p| !p.reset).map(|p| p.output(profile.recovery));

    let mismatches: Vec<usize> = expected
        .zip(got)
        .enumerate()
        .filter(|(_, (e, g))| e != g)
        .map(|(i, _)| i)
        .collect();

    if mismatches.is_empty() {
        tracing::debug!(bits = bits.len(), "loopback ok");
    } else {
        tracing::warn!(count = mismatches.len(), first = mismatches[0], "loopback mismatch");
    }

    Ok(Loopback {
        tx,
        rx,
        mismatches,
        tx_stats: modulator.stats,
        rx_stats: demodulator.stats,
    })
}
