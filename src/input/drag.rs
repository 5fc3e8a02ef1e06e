/// Minimum downward drag, in presenter coordinates, that dismisses the sheet.
pub const DISMISS_THRESHOLD: f64 = 100.0;

/// Offset reported by the presenter when a vertical drag is released.
/// Positive values point down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub vertical_offset: f64,
}

impl DragRelease {
    pub const fn new(vertical_offset: f64) -> Self {
        Self { vertical_offset }
    }
}

/// Single-sample threshold test; velocity is not considered.
pub fn should_dismiss(release: DragRelease) -> bool {
    release.vertical_offset > DISMISS_THRESHOLD
}

/// What asked the sheet to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    OverlayTap,
    CloseButton,
    FooterAction,
    DragRelease,
}
