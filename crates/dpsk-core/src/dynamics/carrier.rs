// crates/dpsk-core/src/dynamics/carrier.rs

use crate::dynamics::clocked::Clocked;
use crate::signal::{bit::Bit, sample::Sample};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarrierState {
    /// Output of the previous edge.
    pub previous: Sample,
    /// Registered output.
    pub output: Sample,
}

/// Balanced modulator: repeats the last sample on an encoded 1 and negates it
/// on an encoded 0.
///
/// `carrier` is loaded as-is on reset; it is not normalised to a positive
/// sample. Callers build this from a validated profile, which guarantees
/// `-carrier` is representable.
#[derive(Clone, Copy, Debug)]
pub struct CarrierModulator {
    pub carrier: Sample,
}

impl CarrierModulator {
    pub fn new(carrier: Sample) -> Self {
        Self { carrier }
    }
}

impl Clocked for CarrierModulator {
    type Input = Bit;
    type Output = Sample;
    type State = CarrierState;

    fn reset_state(&self) -> CarrierState {
        CarrierState {
            previous: self.carrier,
            output: self.carrier,
        }
    }

    fn update(&self, state: &CarrierState, encoded: Bit) -> (CarrierState, Sample) {
        let previous = state.output;
        let output = if encoded.is_one() {
            previous
        } else {
            previous.negated()
        };
        (CarrierState { previous, output }, output)
    }

    fn hold(&self, state: &CarrierState, _encoded: Bit) -> Sample {
        state.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::clocked::Register;
    use crate::signal::bit::bits;

    #[test]
    fn zero_flips_one_holds() {
        let mut r = Register::new(CarrierModulator::new(Sample(1000)));
        let out: Vec<i32> = bits(&[1, 0, 0, 1, 0])
            .into_iter()
            .map(|b| r.step(b).0)
            .collect();
        assert_eq!(out, vec![1000, -1000, 1000, 1000, -1000]);
        assert_eq!(r.state().previous, Sample(1000));
    }

    #[test]
    fn negative_carrier_is_kept_raw() {
        let r = Register::new(CarrierModulator::new(Sample(-7)));
        assert_eq!(r.state().output, Sample(-7));
    }
}
