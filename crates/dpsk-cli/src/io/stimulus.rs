// crates/dpsk-cli/src/io/stimulus.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use dpsk_core::signal::text;
use dpsk_core::{Bit, Sample};

use crate::io::bin;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BitFmt {
    /// '0'/'1' characters; whitespace, ',' and '_' ignored
    Text,
    /// MSB-first packed bytes
    Bin,
}

/// Resolve a bit stimulus from an inline string or a file.
pub fn load_bits(
    inline: Option<&str>,
    path: Option<&str>,
    fmt: BitFmt,
    bit_count: Option<usize>,
) -> Result<Vec<Bit>> {
    match (inline, path) {
        (Some(s), None) => Ok(text::parse_bits(s)?),
        (None, Some(p)) => match fmt {
            BitFmt::Text => {
                let s = std::fs::read_to_string(p).with_context(|| format!("read bits {p}"))?;
                text::parse_bits(&s).with_context(|| format!("parse bits {p}"))
            }
            BitFmt::Bin => bin::read_bits_file(p, bit_count),
        },
        (Some(_), Some(_)) => anyhow::bail!("use either --bits or --in, not both"),
        (None, None) => anyhow::bail!("missing stimulus: pass --bits or --in"),
    }
}

/// Resolve a sample stimulus from an inline list or a text file.
pub fn load_samples(inline: Option<&str>, path: Option<&str>) -> Result<Vec<Sample>> {
    match (inline, path) {
        (Some(s), None) => Ok(text::parse_samples(s)?),
        (None, Some(p)) => {
            let s = std::fs::read_to_string(p).with_context(|| format!("read samples {p}"))?;
            text::parse_samples(&s).with_context(|| format!("parse samples {p}"))
        }
        (Some(_), Some(_)) => anyhow::bail!("use either --samples or --in, not both"),
        (None, None) => anyhow::bail!("missing stimulus: pass --samples or --in"),
    }
}
