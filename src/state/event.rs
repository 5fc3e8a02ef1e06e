use super::SheetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    RequestOpen,
    RequestClose,
    Settle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: SheetState,
    pub event: SheetEvent,
    pub to: SheetState,
}

impl StateTransition {
    pub const fn new(from: SheetState, event: SheetEvent, to: SheetState) -> Self {
        Self { from, event, to }
    }
}
