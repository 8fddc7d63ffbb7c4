// crates/dpsk-cli/src/io/bin.rs

use anyhow::Context;
use dpsk_core::signal::bitpack;
use dpsk_core::Bit;

/// Write a bit stream as MSB-first packed bytes.
pub fn write_bits_file(path: &str, bits: &[Bit]) -> anyhow::Result<()> {
    std::fs::write(path, bitpack::pack_bits(bits))
        .with_context(|| format!("write packed bits: {path}"))?;
    Ok(())
}

/// Read `bit_count` bits (default: every bit in the file) from packed bytes.
pub fn read_bits_file(path: &str, bit_count: Option<usize>) -> anyhow::Result<Vec<Bit>> {
    let bytes = std::fs::read(path).with_context(|| format!("read packed bits: {path}"))?;
    let count = bit_count.unwrap_or(bytes.len() * 8);
    let bits = bitpack::unpack_bits(&bytes, count)
        .with_context(|| format!("unpack bits: {path}"))?;
    Ok(bits)
}
