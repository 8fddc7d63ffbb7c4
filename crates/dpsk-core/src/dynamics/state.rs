/// Reset/run phase shared by every clocked component.
///
/// The only transition is `Reset -> Running`, taken on the first tick that
/// sees reset de-asserted. Asserting reset again re-enters `Reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Reset,
    Running,
}

impl Phase {
    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }
}
