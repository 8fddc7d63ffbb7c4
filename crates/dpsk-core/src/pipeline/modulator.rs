// crates/dpsk-core/src/pipeline/modulator.rs

use crate::dynamics::{
    carrier::{CarrierModulator, CarrierState},
    clocked::{Clocked, Register},
    codec::xnor,
    delay::BitDelay,
    state::Phase,
};
use crate::error::Result;
use crate::pipeline::monitor::ModulatorProbe;
use crate::profile::profile::Profile;
use crate::signal::{bit::Bit, sample::Sample};
use crate::stats::counters::ModulatorCounters;
use crate::validate::validate_profile;

/// BitDelay -> DifferentialCodec -> CarrierModulator.
#[derive(Clone, Copy, Debug)]
pub struct ModulatorCore {
    pub delay: BitDelay,
    pub carrier: CarrierModulator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulatorState {
    pub delay: Bit,
    pub carrier: CarrierState,
}

impl Clocked for ModulatorCore {
    type Input = Bit;
    type Output = ModulatorProbe;
    type State = ModulatorState;

    fn reset_state(&self) -> ModulatorState {
        ModulatorState {
            delay: self.delay.reset_state(),
            carrier: self.carrier.reset_state(),
        }
    }

    fn update(&self, s: &ModulatorState, bit: Bit) -> (ModulatorState, ModulatorProbe) {
        // Both registers read the snapshot `s`; nothing is committed here.
        let (delay, delayed) = self.delay.update(&s.delay, bit);
        let encoded = xnor(bit, delayed);
        let (carrier, sample) = self.carrier.update(&s.carrier, encoded);

        (
            ModulatorState { delay, carrier },
            ModulatorProbe {
                reset: false,
                bit,
                delayed,
                encoded,
                sample,
            },
        )
    }

    fn hold(&self, s: &ModulatorState, bit: Bit) -> ModulatorProbe {
        let delayed = self.delay.hold(&s.delay, bit);
        let encoded = xnor(bit, delayed);
        ModulatorProbe {
            reset: true,
            bit,
            delayed,
            encoded,
            sample: self.carrier.hold(&s.carrier, encoded),
        }
    }
}

pub struct Modulator {
    reg: Register<ModulatorCore>,
    pub stats: ModulatorCounters,
}

impl Modulator {
    pub fn new(profile: &Profile) -> Result<Self> {
        validate_profile(profile)?;

        let core = ModulatorCore {
            delay: BitDelay {
                init: profile.delay_init,
            },
            carrier: CarrierModulator::new(profile.carrier()),
        };
        tracing::debug!(
            amplitude = profile.amplitude,
            width_bits = profile.width_bits,
            delay_init = %profile.delay_init,
            "modulator configured"
        );

        Ok(Self {
            reg: Register::new(core),
            stats: ModulatorCounters::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.reg.phase()
    }

    /// Registered carrier output.
    pub fn output(&self) -> Sample {
        self.reg.state().carrier.output
    }

    /// Current bit-delay register contents.
    pub fn delayed(&self) -> Bit {
        self.reg.state().delay
    }

    pub fn state(&self) -> &ModulatorState {
        self.reg.state()
    }

    pub fn reset(&mut self) {
        tracing::debug!("modulator reset");
        self.reg.reset();
    }

    /// One clock edge with an explicit reset line.
    pub fn clock(&mut self, reset: bool, bit: Bit) -> ModulatorProbe {
        let p = self.reg.clock(reset, bit);

        self.stats.ticks += 1;
        if p.reset {
            self.stats.reset_ticks += 1;
        } else if !p.encoded.is_one() {
            self.stats.phase_flips += 1;
        }

        tracing::trace!(
            tick = self.stats.ticks,
            reset = p.reset,
            bit = %p.bit,
            encoded = %p.encoded,
            sample = p.sample.0,
            "mod tick"
        );
        p
    }

    pub fn step(&mut self, bit: Bit) -> Sample {
        self.clock(false, bit).sample
    }

    /// Drive `bits` with reset de-asserted, optionally resetting first.
    pub fn run(&mut self, bits: &[Bit], reset: bool) -> Vec<Sample> {
        self.run_monitored(bits, reset)
            .into_iter()
            .map(|p| p.sample)
            .collect()
    }

    pub fn run_monitored(&mut self, bits: &[Bit], reset: bool) -> Vec<ModulatorProbe> {
        if reset {
            self.reset();
        }
        bits.iter().map(|&b| self.clock(false, b)).collect()
    }

    /// Testbench drive: hold reset for `reset_ticks` edges, then release it
    /// and clock `bits`. Returns every edge, reset edges included.
    pub fn run_testbench(&mut self, reset_ticks: u32, bits: &[Bit]) -> Vec<ModulatorProbe> {
        let mut out = Vec::with_capacity(bits.len());
        for _ in 0..reset_ticks {
            out.push(self.clock(true, Bit::ZERO));
        }
        out.extend(bits.iter().map(|&b| self.clock(false, b)));
        out
    }
}
