/// Modulator run counters. `ticks` counts every clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModulatorCounters {
    pub ticks: u64,
    pub reset_ticks: u64,
    /// Running ticks whose encoded bit was 0 (carrier negated).
    pub phase_flips: u64,
}

/// Demodulator run counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemodulatorCounters {
    pub ticks: u64,
    pub reset_ticks: u64,
    /// Running ticks whose recovered symbol was 0 (phase change seen).
    pub symbol_zeros: u64,
}
