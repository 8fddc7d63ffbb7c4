// crates/dpsk-core/src/signal/text.rs

use crate::error::{DpskError, Result};
use crate::signal::bit::Bit;
use crate::signal::sample::Sample;

/// Parse a bit string such as `"1011_0011"` or `"1,0,1"`.
///
/// Whitespace, `,` and `_` are separators; any other non-binary character is
/// rejected with its byte offset.
pub fn parse_bits(s: &str) -> Result<Vec<Bit>> {
    let mut out = Vec::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match c {
            '0' => out.push(Bit::ZERO),
            '1' => out.push(Bit::ONE),
            ',' | '_' => {}
            c if c.is_whitespace() => {}
            other => {
                return Err(DpskError::Stimulus(format!(
                    "invalid bit character {other:?} at offset {i}"
                )))
            }
        }
    }
    Ok(out)
}

pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|b| if b.is_one() { '1' } else { '0' }).collect()
}

/// Parse signed decimal samples separated by whitespace and/or commas.
pub fn parse_samples(s: &str) -> Result<Vec<Sample>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            // Accept an explicit leading '+', as monitors print it.
            let digits = tok.strip_prefix('+').unwrap_or(tok);
            digits
                .parse::<i32>()
                .map(Sample)
                .map_err(|e| DpskError::Stimulus(format!("invalid sample {tok:?}: {e}")))
        })
        .collect()
}
