use std::collections::VecDeque;

use super::error::{StateError, StateResult};
use super::{SheetEvent, SheetState, StateTransition};

const HISTORY_LIMIT: usize = 16;

#[derive(Debug)]
pub struct SheetMachine {
    state: SheetState,
    transition_history: VecDeque<StateTransition>,
}

impl SheetMachine {
    pub fn new() -> Self {
        Self {
            state: SheetState::default(),
            transition_history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn next_state(&self, event: SheetEvent) -> Option<SheetState> {
        use SheetEvent::*;
        match (self.state, event) {
            (SheetState::Closed, RequestOpen) => Some(SheetState::Opening),
            (SheetState::Opening, Settle) => Some(SheetState::Open),
            (SheetState::Open, RequestClose) => Some(SheetState::Closing),
            (SheetState::Closing, Settle) => Some(SheetState::Closed),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: SheetEvent) -> StateResult<StateTransition> {
        tracing::debug!(from = ?self.state, event = ?event, "request sheet transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::debug!(from = ?from, event = ?event, "sheet transition not applicable");
            StateError::InvalidStateTransition { from, event }
        })?;

        let record = StateTransition::new(self.state, event, next);
        self.state = next;
        if self.transition_history.len() == HISTORY_LIMIT {
            self.transition_history.pop_front();
        }
        self.transition_history.push_back(record);

        Ok(record)
    }
}

#[cfg(test)]
impl SheetMachine {
    fn can_transition(&self, event: SheetEvent) -> bool {
        self.next_state(event).is_some()
    }

    /// Most recent transitions, oldest first.
    fn history(&self) -> impl Iterator<Item = &StateTransition> {
        self.transition_history.iter()
    }
}

impl Default for SheetMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SheetMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SheetState::{:?}", self.state)
    }
}
