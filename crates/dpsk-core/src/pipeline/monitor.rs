// crates/dpsk-core/src/pipeline/monitor.rs

use crate::profile::profile::Recovery;
use crate::signal::{bit::Bit, sample::Sample};

/// Signals observed on one modulator clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulatorProbe {
    /// Reset was asserted on this edge; `sample` is the reset carrier.
    pub reset: bool,
    pub bit: Bit,
    pub delayed: Bit,
    pub encoded: Bit,
    pub sample: Sample,
}

/// Signals observed on one demodulator clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemodulatorProbe {
    pub reset: bool,
    pub sample: Sample,
    pub extracted: Bit,
    pub delayed: Bit,
    /// xnor(extracted, delayed)
    pub symbol: Bit,
    /// Symbol stream integrated back to data.
    pub data: Bit,
}

impl DemodulatorProbe {
    pub fn output(&self, recovery: Recovery) -> Bit {
        match recovery {
            Recovery::Symbol => self.symbol,
            Recovery::Data => self.data,
        }
    }
}
