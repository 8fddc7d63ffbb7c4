use std::fmt;

use crate::error::{DpskError, Result};

/// One carrier amplitude value at a tick.
///
/// Contract: inside a validated pipeline every sample is `+amplitude` or
/// `-amplitude`, so negation never reaches the reserved minimum word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sample(pub i32);

impl Sample {
    /// Phase inversion. Saturates instead of wrapping at `i32::MIN`; profile
    /// validation keeps carriers away from that word.
    #[inline]
    pub fn negated(self) -> Sample {
        Sample(self.0.saturating_neg())
    }

    #[inline]
    pub fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed word width of the sample bus, 2..=32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleWidth(u8);

impl SampleWidth {
    pub const MIN_BITS: u8 = 2;
    pub const MAX_BITS: u8 = 32;

    pub fn new(bits: u8) -> Result<SampleWidth> {
        if !(Self::MIN_BITS..=Self::MAX_BITS).contains(&bits) {
            return Err(DpskError::Validation(format!(
                "sample width must be in {}..={} bits, got {}",
                Self::MIN_BITS,
                Self::MAX_BITS,
                bits
            )));
        }
        Ok(SampleWidth(bits))
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Largest representable word: 2^(w-1) - 1.
    #[inline]
    pub fn max(self) -> i32 {
        ((1i64 << (self.0 - 1)) - 1) as i32
    }

    /// Smallest representable word: -2^(w-1).
    #[inline]
    pub fn min(self) -> i32 {
        (-(1i64 << (self.0 - 1))) as i32
    }

    #[inline]
    pub fn contains(self, s: Sample) -> bool {
        s.0 >= self.min() && s.0 <= self.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_bounds() {
        let w16 = SampleWidth::new(16).unwrap();
        assert_eq!(w16.max(), 32_767);
        assert_eq!(w16.min(), -32_768);

        let w32 = SampleWidth::new(32).unwrap();
        assert_eq!(w32.max(), i32::MAX);
        assert_eq!(w32.min(), i32::MIN);

        assert!(SampleWidth::new(1).is_err());
        assert!(SampleWidth::new(33).is_err());
    }

    #[test]
    fn negation_saturates_at_min_word() {
        assert_eq!(Sample(1000).negated(), Sample(-1000));
        assert_eq!(Sample(i32::MIN).negated(), Sample(i32::MAX));
    }
}
