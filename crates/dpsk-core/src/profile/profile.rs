// crates/dpsk-core/src/profile/profile.rs

use crate::error::Result;
use crate::signal::{
    bit::Bit,
    sample::{Sample, SampleWidth},
};

pub const PROFILE_VERSION: u16 = 1;

/// Upper bound on testbench reset length; every reset edge is recorded.
pub const MAX_RESET_TICKS: u32 = 1 << 16;

/// What the demodulator's batch `run` returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recovery {
    /// XNOR of consecutive extracted bits (the differential symbol stream).
    Symbol,
    /// Symbol stream integrated back into the modulator's raw data bits.
    #[default]
    Data,
}

/// Configuration of one simulated modem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub version: u16,

    /// Signed sample bus width in bits (2..=32).
    pub width_bits: u8,

    /// Carrier sample loaded into the modulator on reset. Magnitude is fixed
    /// for the whole run; only the sign toggles.
    pub amplitude: i32,

    /// Reset value of the bit-delay registers (and the data recovery register).
    /// Independent of the carrier reset value.
    pub delay_init: Bit,

    pub recovery: Recovery,

    /// Ticks a testbench holds reset asserted before driving stimulus.
    pub reset_ticks: u32,
}

impl Profile {
    pub fn width(&self) -> Result<SampleWidth> {
        SampleWidth::new(self.width_bits)
    }

    pub fn carrier(&self) -> Sample {
        Sample(self.amplitude)
    }
}
