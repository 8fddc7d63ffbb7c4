use std::fmt;
use std::ops::Not;

/// One logical symbol of the data or recovered stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bit(pub bool);

impl Bit {
    pub const ZERO: Bit = Bit(false);
    pub const ONE: Bit = Bit(true);

    /// Accepts exactly 0 or 1.
    #[inline]
    pub fn from_u8(v: u8) -> Option<Bit> {
        match v {
            0 => Some(Bit::ZERO),
            1 => Some(Bit::ONE),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn is_one(self) -> bool {
        self.0
    }

    /// NOT (self XOR other).
    #[inline]
    pub fn xnor(self, other: Bit) -> Bit {
        Bit(self.0 == other.0)
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(b: bool) -> Self {
        Bit(b)
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(b: Bit) -> Self {
        b.0
    }
}

impl Not for Bit {
    type Output = Bit;

    #[inline]
    fn not(self) -> Bit {
        Bit(!self.0)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Convenience for tests and stimulus tables: `bits(&[1, 0, 1])`.
/// Any non-zero value is read as 1.
pub fn bits(v: &[u8]) -> Vec<Bit> {
    v.iter().map(|&b| Bit(b != 0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_rejects_non_binary() {
        assert_eq!(Bit::from_u8(0), Some(Bit::ZERO));
        assert_eq!(Bit::from_u8(1), Some(Bit::ONE));
        assert_eq!(Bit::from_u8(2), None);
    }

    #[test]
    fn not_and_display() {
        assert_eq!(!Bit::ONE, Bit::ZERO);
        assert_eq!(format!("{}{}", Bit::ONE, Bit::ZERO), "10");
    }
}
