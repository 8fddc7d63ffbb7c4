use crate::error::{DpskError, Result};
use crate::profile::profile::{Profile, MAX_RESET_TICKS, PROFILE_VERSION};
use crate::signal::sample::SampleWidth;

pub fn validate_profile(p: &Profile) -> Result<()> {
    if p.version == 0 || p.version > PROFILE_VERSION {
        return Err(DpskError::Validation(format!(
            "unsupported profile version {} (max {})",
            p.version, PROFILE_VERSION
        )));
    }

    let width = SampleWidth::new(p.width_bits)?;

    // Zero carries no phase; the extractor would read every tick as 1.
    if p.amplitude == 0 {
        return Err(DpskError::Validation("amplitude must be non-zero".into()));
    }

    // Symmetric range: -amplitude must be representable, so the most negative
    // word of the width is reserved.
    let max = width.max();
    if p.amplitude > max || p.amplitude < -max {
        return Err(DpskError::Validation(format!(
            "amplitude {} outside symmetric range +/-{} for {}-bit samples",
            p.amplitude, max, p.width_bits
        )));
    }

    if p.reset_ticks > MAX_RESET_TICKS {
        return Err(DpskError::Validation(format!(
            "reset_ticks {} exceeds {}",
            p.reset_ticks, MAX_RESET_TICKS
        )));
    }

    Ok(())
}
