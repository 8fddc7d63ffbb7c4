// crates/dpsk-core/src/profile/defaults.rs

use crate::profile::profile::{Profile, Recovery, PROFILE_VERSION};
use crate::signal::bit::Bit;

pub const DEFAULT_WIDTH_BITS: u8 = 16;
pub const DEFAULT_AMPLITUDE: i32 = 1000;

pub fn default_profile() -> Profile {
    Profile {
        version: PROFILE_VERSION,
        width_bits: DEFAULT_WIDTH_BITS,
        amplitude: DEFAULT_AMPLITUDE,
        // 1 avoids a spurious phase flip on the first symbol.
        delay_init: Bit::ONE,
        recovery: Recovery::Data,
        reset_ticks: 1,
    }
}

/// Default profile with a different carrier amplitude.
pub fn with_amplitude(amplitude: i32) -> Profile {
    Profile {
        amplitude,
        ..default_profile()
    }
}
