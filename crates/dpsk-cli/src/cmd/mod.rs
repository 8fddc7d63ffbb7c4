// crates/dpsk-cli/src/cmd/mod.rs

pub mod demodulate;
pub mod loopback;
pub mod modulate;
pub mod profile;

use clap::{Args, ValueEnum};
use dpsk_core::profile::defaults::default_profile;
use dpsk_core::validate::validate_profile;
use dpsk_core::{Bit, Profile, Recovery};

use crate::io::profile_file;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RecoveryArg {
    /// XNOR of consecutive extracted bits
    Symbol,
    /// Symbol stream integrated back to data bits
    Data,
}

impl From<RecoveryArg> for Recovery {
    fn from(r: RecoveryArg) -> Self {
        match r {
            RecoveryArg::Symbol => Recovery::Symbol,
            RecoveryArg::Data => Recovery::Data,
        }
    }
}

/// Profile source plus run-only overrides (never written back to the file).
#[derive(Args, Debug)]
pub struct ProfileOpts {
    /// Profile path (.dpr). If omitted, uses the built-in default profile.
    #[arg(long)]
    pub profile: Option<String>,

    /// Override carrier amplitude
    #[arg(long, allow_hyphen_values = true)]
    pub amplitude: Option<i32>,

    /// Override sample width in bits (2..=32)
    #[arg(long)]
    pub width: Option<u8>,

    /// Override delay register reset bit (0 or 1)
    #[arg(long)]
    pub delay_init: Option<u8>,

    /// Override demodulator recovery mode
    #[arg(long, value_enum)]
    pub recovery: Option<RecoveryArg>,

    /// Override testbench reset length in ticks
    #[arg(long)]
    pub reset_ticks: Option<u32>,
}

impl ProfileOpts {
    /// Load (or default) the profile, apply overrides, validate.
    pub fn resolve(&self) -> anyhow::Result<Profile> {
        let mut p = match self.profile.as_deref() {
            Some(path) => profile_file::load_dpr(path)?,
            None => default_profile(),
        };

        if let Some(a) = self.amplitude {
            p.amplitude = a;
        }
        if let Some(w) = self.width {
            p.width_bits = w;
        }
        if let Some(d) = self.delay_init {
            p.delay_init = Bit::from_u8(d)
                .ok_or_else(|| anyhow::anyhow!("--delay-init must be 0 or 1, got {d}"))?;
        }
        if let Some(r) = self.recovery {
            p.recovery = r.into();
        }
        if let Some(n) = self.reset_ticks {
            p.reset_ticks = n;
        }

        validate_profile(&p)?;
        Ok(p)
    }
}
