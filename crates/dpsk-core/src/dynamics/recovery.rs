use crate::dynamics::clocked::Clocked;
use crate::dynamics::codec::xnor;
use crate::signal::bit::Bit;

/// Integrates the differential symbol stream back into data bits:
/// `data = xnor(symbol, previous_data)`.
///
/// This undoes the modulator's XNOR encoder when both sides start from the
/// same reset bit.
#[derive(Clone, Copy, Debug)]
pub struct DataRecovery {
    pub init: Bit,
}

impl Default for DataRecovery {
    fn default() -> Self {
        Self { init: Bit::ONE }
    }
}

impl Clocked for DataRecovery {
    type Input = Bit;
    type Output = Bit;
    type State = Bit;

    fn reset_state(&self) -> Bit {
        self.init
    }

    fn update(&self, state: &Bit, symbol: Bit) -> (Bit, Bit) {
        let data = xnor(symbol, *state);
        (data, data)
    }

    fn hold(&self, state: &Bit, _symbol: Bit) -> Bit {
        *state
    }
}
