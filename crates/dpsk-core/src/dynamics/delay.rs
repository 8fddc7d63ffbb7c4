use crate::dynamics::clocked::Clocked;
use crate::signal::bit::Bit;

/// One-bit shift register. Output is the input latched on the previous edge.
#[derive(Clone, Copy, Debug)]
pub struct BitDelay {
    /// Loaded on reset. 1 keeps the first symbol from reading as a phase flip.
    pub init: Bit,
}

impl Default for BitDelay {
    fn default() -> Self {
        Self { init: Bit::ONE }
    }
}

impl Clocked for BitDelay {
    type Input = Bit;
    type Output = Bit;
    type State = Bit;

    fn reset_state(&self) -> Bit {
        self.init
    }

    fn update(&self, state: &Bit, input: Bit) -> (Bit, Bit) {
        (input, *state)
    }

    fn hold(&self, state: &Bit, _input: Bit) -> Bit {
        *state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::clocked::Register;
    use crate::signal::bit::bits;

    #[test]
    fn delays_by_one_tick() {
        let mut r = Register::new(BitDelay::default());
        let out: Vec<Bit> = bits(&[0, 1, 1, 0]).into_iter().map(|b| r.step(b)).collect();
        assert_eq!(out, bits(&[1, 0, 1, 1]));
        assert_eq!(*r.state(), Bit::ZERO);
    }

    #[test]
    fn reset_reloads_init() {
        let mut r = Register::new(BitDelay::default());
        r.step(Bit::ZERO);
        assert_eq!(r.clock(true, Bit::ZERO), Bit::ONE);
        assert_eq!(*r.state(), Bit::ONE);
    }
}
