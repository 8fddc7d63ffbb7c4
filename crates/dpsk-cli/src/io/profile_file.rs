// crates/dpsk-cli/src/io/profile_file.rs

use anyhow::{Context, Result};
use dpsk_core::profile::format as profile_format;
use dpsk_core::Profile;

/// Load a .dpr profile file and decode it.
pub fn load_dpr(path: &str) -> Result<Profile> {
    let bytes = std::fs::read(path).with_context(|| format!("read profile {path}"))?;
    let profile =
        profile_format::decode(&bytes).with_context(|| format!("decode profile {path}"))?;
    Ok(profile)
}

/// Save a Profile as a .dpr file.
pub fn save_dpr(path: &str, profile: &Profile) -> Result<()> {
    let bytes = profile_format::encode(profile);
    std::fs::write(path, bytes).with_context(|| format!("write profile {path}"))?;
    Ok(())
}
