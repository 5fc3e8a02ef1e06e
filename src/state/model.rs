/// Lifecycle of a sheet as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl SheetState {
    /// Reports the requested end state, so a sheet that is still opening
    /// already counts as open.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::Opening)
    }
}

#[cfg(test)]
impl SheetState {
    const fn is_transitional(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}
