use crate::signal::{bit::Bit, sample::Sample};

/// Ideal hard-decision slicer: non-negative samples read as 1, negative as 0.
#[inline]
pub fn extract(sample: Sample) -> Bit {
    Bit(!sample.is_negative())
}
