use crate::signal::bit::Bit;

/// Differential encode/decode: `NOT (current XOR previous)`.
///
/// 1 means "hold phase", 0 means "flip phase". The same function encodes raw
/// data against the delayed raw bit and decodes an extracted bit against the
/// delayed extracted bit.
#[inline]
pub fn xnor(current: Bit, previous: Bit) -> Bit {
    current.xnor(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        for x in [Bit::ZERO, Bit::ONE] {
            assert_eq!(xnor(x, x), Bit::ONE);
            assert_eq!(xnor(x, !x), Bit::ZERO);
        }
    }
}
