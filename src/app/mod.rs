//! Scripted host for a single sheet.
//!
//! Stands in for a real UI: events come from the command line, time comes
//! from a virtual clock, and rendering is replaced by log output.

use std::rc::Rc;
use std::time::Duration;

use crate::error::AppResult;
use crate::input::{parse_script, ScriptEvent, DEMO_SCRIPT};
use crate::sheet::{RequestOutcome, SheetController, TracingPresenter};
use crate::state::SheetState;
use crate::timer::ManualTimerDriver;
use crate::tokens::{SharedTokens, TokenStore};

mod bootstrap;

use self::bootstrap::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub accepted: usize,
    pub ignored: usize,
    pub final_state: SheetState,
    pub elapsed: Duration,
}

pub struct App {
    driver: Rc<ManualTimerDriver>,
    controller: SheetController,
}

impl App {
    pub fn new() -> Self {
        let bootstrap = bootstrap_app_runtime();
        Self::with_tokens(bootstrap.tokens)
    }

    pub fn with_tokens(tokens: TokenStore) -> Self {
        let driver = Rc::new(ManualTimerDriver::new());
        let controller = SheetController::new(tokens.into_shared(), driver.clone())
            .with_presenter(Rc::new(TracingPresenter));
        Self { driver, controller }
    }

    pub fn state(&self) -> SheetState {
        self.controller.current_state()
    }

    pub fn tokens(&self) -> &SharedTokens {
        self.controller.tokens()
    }

    /// Parses `args` (or the demo script when empty) and replays it.
    pub fn start<I, S>(&self, args: I) -> AppResult<SessionSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut events = parse_script(args)?;
        if events.is_empty() {
            tracing::info!("no session events given; replaying demo script");
            events = parse_script(DEMO_SCRIPT)?;
        }
        Ok(self.replay(&events))
    }

    /// Applies every event, then lets pending transitions settle.
    pub fn replay(&self, events: &[ScriptEvent]) -> SessionSummary {
        let mut summary = SessionSummary::default();
        for event in events {
            match self.apply(event) {
                Some(RequestOutcome::Accepted) => summary.accepted += 1,
                Some(_) => summary.ignored += 1,
                None => {}
            }
        }
        self.driver.run_until_idle();

        summary.final_state = self.state();
        summary.elapsed = self.driver.now();
        summary
    }

    fn apply(&self, event: &ScriptEvent) -> Option<RequestOutcome> {
        tracing::debug!(?event, at_ms = self.driver.now().as_millis() as u64, "session event");
        let outcome = match event {
            ScriptEvent::Open => Some(self.controller.request_open()),
            ScriptEvent::Close => Some(self.controller.request_close()),
            ScriptEvent::Dismiss(reason) => Some(self.controller.dismiss(*reason)),
            ScriptEvent::Drag(release) => self.controller.on_drag_release(*release),
            ScriptEvent::Wait(duration) => {
                self.driver.advance(*duration);
                None
            }
            ScriptEvent::Settle => {
                self.controller.settle_now();
                None
            }
            ScriptEvent::SetToken { name, value } => {
                self.tokens().borrow_mut().set(name, value.clone());
                None
            }
        };
        if let Some(outcome) = outcome.filter(|outcome| !outcome.is_accepted()) {
            tracing::info!(?event, ?outcome, state = ?self.state(), "session event ignored");
        }
        outcome
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DismissReason, DragRelease};
    use crate::tokens::names;

    fn app() -> App {
        App::with_tokens(TokenStore::with_defaults())
    }

    #[test]
    fn demo_script_ends_closed() {
        let summary = app().start(Vec::<String>::new()).unwrap();

        assert_eq!(summary.final_state, SheetState::Closed);
        assert_eq!(summary.accepted, 4);
        assert_eq!(summary.ignored, 2);
    }

    #[test]
    fn rapid_double_open_is_counted_once() {
        let summary = app().start(["open", "open", "close"]).unwrap();

        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.ignored, 2);
        assert_eq!(summary.final_state, SheetState::Open);
        assert_eq!(summary.elapsed, Duration::from_millis(800));
    }

    #[test]
    fn settle_event_unlocks_without_waiting() {
        let summary = app().start(["open", "settle", "close-button"]).unwrap();

        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.final_state, SheetState::Closed);
        assert_eq!(summary.elapsed, Duration::from_millis(800));
    }

    #[test]
    fn token_updates_change_later_settle_timeouts() {
        let app = app();
        let summary = app.replay(&[
            ScriptEvent::SetToken {
                name: names::ENTER_DURATION.to_string(),
                value: "1000ms".into(),
            },
            ScriptEvent::Open,
            ScriptEvent::Wait(Duration::from_millis(800)),
            ScriptEvent::Drag(DragRelease::new(300.0)),
            ScriptEvent::Wait(Duration::from_millis(700)),
            ScriptEvent::Dismiss(DismissReason::OverlayTap),
        ]);

        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.final_state, SheetState::Closed);
        assert_eq!(summary.elapsed, Duration::from_millis(3_000));
    }

    #[test]
    fn malformed_script_is_reported() {
        let err = app().start(["open", "wobble"]).unwrap_err();
        assert!(matches!(err, crate::AppError::Script(_)));
    }
}
