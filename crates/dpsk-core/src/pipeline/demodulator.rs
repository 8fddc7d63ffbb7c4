// crates/dpsk-core/src/pipeline/demodulator.rs

use crate::dynamics::{
    clocked::{Clocked, Register},
    codec::xnor,
    delay::BitDelay,
    extract::extract,
    recovery::DataRecovery,
    state::Phase,
};
use crate::error::{DpskError, Result};
use crate::pipeline::monitor::DemodulatorProbe;
use crate::profile::profile::{Profile, Recovery};
use crate::signal::{
    bit::Bit,
    sample::{Sample, SampleWidth},
};
use crate::stats::counters::DemodulatorCounters;
use crate::validate::validate_profile;

/// SignalExtractor -> BitDelay -> DifferentialCodec, followed by the data
/// recovery register.
#[derive(Clone, Copy, Debug)]
pub struct DemodulatorCore {
    pub delay: BitDelay,
    pub recovery: DataRecovery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemodulatorState {
    pub delay: Bit,
    pub data: Bit,
}

impl Clocked for DemodulatorCore {
    type Input = Sample;
    type Output = DemodulatorProbe;
    type State = DemodulatorState;

    fn reset_state(&self) -> DemodulatorState {
        DemodulatorState {
            delay: self.delay.reset_state(),
            data: self.recovery.reset_state(),
        }
    }

    fn update(&self, s: &DemodulatorState, sample: Sample) -> (DemodulatorState, DemodulatorProbe) {
        let extracted = extract(sample);
        let (delay, delayed) = self.delay.update(&s.delay, extracted);
        let symbol = xnor(extracted, delayed);
        let (data_next, data) = self.recovery.update(&s.data, symbol);

        (
            DemodulatorState {
                delay,
                data: data_next,
            },
            DemodulatorProbe {
                reset: false,
                sample,
                extracted,
                delayed,
                symbol,
                data,
            },
        )
    }

    fn hold(&self, s: &DemodulatorState, sample: Sample) -> DemodulatorProbe {
        let extracted = extract(sample);
        let delayed = self.delay.hold(&s.delay, extracted);
        let symbol = xnor(extracted, delayed);
        DemodulatorProbe {
            reset: true,
            sample,
            extracted,
            delayed,
            symbol,
            data: self.recovery.hold(&s.data, symbol),
        }
    }
}

pub struct Demodulator {
    reg: Register<DemodulatorCore>,
    width: SampleWidth,
    recovery: Recovery,
    pub stats: DemodulatorCounters,
}

impl Demodulator {
    pub fn new(profile: &Profile) -> Result<Self> {
        validate_profile(profile)?;

        let core = DemodulatorCore {
            delay: BitDelay {
                init: profile.delay_init,
            },
            recovery: DataRecovery {
                init: profile.delay_init,
            },
        };
        tracing::debug!(
            width_bits = profile.width_bits,
            recovery = ?profile.recovery,
            delay_init = %profile.delay_init,
            "demodulator configured"
        );

        Ok(Self {
            reg: Register::new(core),
            width: profile.width()?,
            recovery: profile.recovery,
            stats: DemodulatorCounters::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.reg.phase()
    }

    pub fn recovery(&self) -> Recovery {
        self.recovery
    }

    /// Current bit-delay register contents.
    pub fn delayed(&self) -> Bit {
        self.reg.state().delay
    }

    pub fn state(&self) -> &DemodulatorState {
        self.reg.state()
    }

    pub fn reset(&mut self) {
        tracing::debug!("demodulator reset");
        self.reg.reset();
    }

    /// One clock edge with an explicit reset line. Does not range-check
    /// `sample`; the batch entry points do.
    pub fn clock(&mut self, reset: bool, sample: Sample) -> DemodulatorProbe {
        let p = self.reg.clock(reset, sample);

        self.stats.ticks += 1;
        if p.reset {
            self.stats.reset_ticks += 1;
        } else if !p.symbol.is_one() {
            self.stats.symbol_zeros += 1;
        }

        tracing::trace!(
            tick = self.stats.ticks,
            reset = p.reset,
            sample = p.sample.0,
            symbol = %p.symbol,
            data = %p.data,
            "demod tick"
        );
        p
    }

    /// One running edge; returns the bit selected by the profile's recovery mode.
    pub fn step(&mut self, sample: Sample) -> Bit {
        let recovery = self.recovery;
        self.clock(false, sample).output(recovery)
    }

    /// Reject samples the configured bus width cannot carry.
    pub fn check_range(&self, samples: &[Sample]) -> Result<()> {
        match samples.iter().position(|s| !self.width.contains(*s)) {
            Some(tick) => Err(DpskError::SampleRange {
                tick,
                value: samples[tick].0,
                width: self.width.bits(),
            }),
            None => Ok(()),
        }
    }

    pub fn run(&mut self, samples: &[Sample], reset: bool) -> Result<Vec<Bit>> {
        let recovery = self.recovery;
        Ok(self
            .run_monitored(samples, reset)?
            .into_iter()
            .map(|p| p.output(recovery))
            .collect())
    }

    pub fn run_monitored(&mut self, samples: &[Sample], reset: bool) -> Result<Vec<DemodulatorProbe>> {
        self.check_range(samples)?;
        if reset {
            self.reset();
        }
        Ok(samples.iter().map(|&s| self.clock(false, s)).collect())
    }

    /// Testbench drive: hold reset for `reset_ticks` edges (input tied to 0),
    /// then clock `samples`.
    pub fn run_testbench(&mut self, reset_ticks: u32, samples: &[Sample]) -> Result<Vec<DemodulatorProbe>> {
        self.check_range(samples)?;
        let mut out = Vec::with_capacity(samples.len());
        for _ in 0..reset_ticks {
            out.push(self.clock(true, Sample(0)));
        }
        out.extend(samples.iter().map(|&s| self.clock(false, s)));
        Ok(out)
    }
}
