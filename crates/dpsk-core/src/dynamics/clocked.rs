// crates/dpsk-core/src/dynamics/clocked.rs

use crate::dynamics::state::Phase;

/// A synchronous block: parameters are fixed, all memory lives in `State`.
///
/// `update` must be a pure function of the state snapshot and the input; the
/// owning `Register` commits the returned state only after the whole tick has
/// been evaluated, so every register in a composite reads the old values.
pub trait Clocked {
    type Input: Copy;
    type Output: Copy;
    type State: Copy + std::fmt::Debug;

    /// State loaded while reset is asserted.
    fn reset_state(&self) -> Self::State;

    /// One clock edge with reset de-asserted.
    fn update(&self, state: &Self::State, input: Self::Input) -> (Self::State, Self::Output);

    /// Outputs observed on a tick where reset is held.
    fn hold(&self, state: &Self::State, input: Self::Input) -> Self::Output;
}

/// Owns one `Clocked` block's state and drives it tick by tick.
#[derive(Clone, Debug)]
pub struct Register<C: Clocked> {
    core: C,
    state: C::State,
    phase: Phase,
    ticks: u64,
}

impl<C: Clocked> Register<C> {
    /// Power-on: state is loaded with reset values, phase is `Reset`.
    pub fn new(core: C) -> Self {
        let state = core.reset_state();
        Self {
            core,
            state,
            phase: Phase::Reset,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &C::State {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Clock edges seen since construction, reset ticks included.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Asynchronous reset: reload reset state without consuming a tick.
    pub fn reset(&mut self) {
        self.state = self.core.reset_state();
        self.phase = Phase::Reset;
    }

    /// One clock edge with the given reset line level.
    pub fn clock(&mut self, reset: bool, input: C::Input) -> C::Output {
        self.ticks += 1;

        if reset {
            self.reset();
            return self.core.hold(&self.state, input);
        }

        if !self.phase.is_running() {
            tracing::trace!(tick = self.ticks, "reset released");
            self.phase = Phase::Running;
        }

        let (next, out) = self.core.update(&self.state, input);
        self.state = next;
        out
    }

    /// Shorthand for `clock(false, input)`.
    pub fn step(&mut self, input: C::Input) -> C::Output {
        self.clock(false, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter that outputs its pre-edge value.
    struct Count;

    impl Clocked for Count {
        type Input = ();
        type Output = u32;
        type State = u32;

        fn reset_state(&self) -> u32 {
            0
        }

        fn update(&self, state: &u32, _input: ()) -> (u32, u32) {
            (state + 1, *state)
        }

        fn hold(&self, state: &u32, _input: ()) -> u32 {
            *state
        }
    }

    #[test]
    fn reset_then_running() {
        let mut r = Register::new(Count);
        assert_eq!(r.phase(), Phase::Reset);

        assert_eq!(r.clock(true, ()), 0);
        assert_eq!(r.phase(), Phase::Reset);

        assert_eq!(r.step(()), 0);
        assert_eq!(r.step(()), 1);
        assert_eq!(r.phase(), Phase::Running);
        assert_eq!(*r.state(), 2);

        assert_eq!(r.clock(true, ()), 0);
        assert_eq!(r.phase(), Phase::Reset);
        assert_eq!(r.ticks(), 4);
    }
}
