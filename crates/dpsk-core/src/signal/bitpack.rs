// crates/dpsk-core/src/signal/bitpack.rs

use crate::error::{DpskError, Result};
use crate::signal::bit::Bit;

/// Pack a bit stream into bytes, MSB-first.
///
/// The first bit becomes the MSB of `out[0]`; a trailing partial byte is
/// zero-padded on the LSB side.
pub fn pack_bits(bits: &[Bit]) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (cursor, bit) in bits.iter().enumerate() {
        if bit.is_one() {
            out[cursor / 8] |= 0x80 >> (cursor % 8);
        }
    }
    out
}

/// Unpack `bit_count` bits from an MSB-first byte stream.
///
/// Inverse of `pack_bits` for the same `bit_count`.
pub fn unpack_bits(packed: &[u8], bit_count: usize) -> Result<Vec<Bit>> {
    let available = packed.len().saturating_mul(8);
    if bit_count > available {
        return Err(DpskError::Stimulus(format!(
            "unpack_bits short: need {} bits, got {} bytes ({} bits)",
            bit_count,
            packed.len(),
            available
        )));
    }

    Ok((0..bit_count)
        .map(|cursor| Bit((packed[cursor / 8] >> (7 - cursor % 8)) & 1 == 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::bit::bits;

    #[test]
    fn msb_first_layout() {
        let b = bits(&[1, 0, 1, 1, 0, 0, 1, 1, 1]);
        assert_eq!(pack_bits(&b), vec![0b1011_0011, 0b1000_0000]);
    }

    #[test]
    fn unpack_rejects_short_input() {
        assert!(unpack_bits(&[0xFF], 9).is_err());
        assert_eq!(unpack_bits(&[0xA0], 3).unwrap(), bits(&[1, 0, 1]));
    }

    #[test]
    fn unpack_rejects_huge_bit_count() {
        assert!(matches!(
            unpack_bits(&[0xFF], usize::MAX - 3),
            Err(DpskError::Stimulus(_))
        ));
        assert!(unpack_bits(&[], usize::MAX).is_err());
        assert_eq!(unpack_bits(&[0xFF], 8).unwrap().len(), 8);
    }
}
