use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::input::{should_dismiss, DismissReason, DragRelease};
use crate::motion::SheetTimings;
use crate::state::{SheetEvent, SheetMachine, SheetState};
use crate::timer::{TimerDriver, TimerGuard};
use crate::tokens::SharedTokens;

use super::SheetPresenter;

/// Result of an open or close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Accepted,
    /// A transition is still settling.
    Locked,
    /// The sheet is already in, or heading to, the requested state.
    Redundant,
}

impl RequestOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

// The settle timer is armed exactly while the machine is in a transitional
// state; its presence is the request lock.
#[derive(Debug)]
struct ControllerCore {
    machine: SheetMachine,
    settle_timer: Option<TimerGuard>,
}

/// Sequences sheet open/close transitions.
///
/// Timing is resolved from the shared token registry on every accepted
/// request, so token updates apply to the next transition. Completion is
/// estimated with a settle timeout (the longest resolved duration plus a
/// fixed buffer); hosts with a real animation-finished signal can call
/// [`SheetController::settle_now`] to settle earlier.
///
/// Dropping the controller cancels a pending settle timer.
pub struct SheetController {
    core: Rc<RefCell<ControllerCore>>,
    tokens: SharedTokens,
    driver: Rc<dyn TimerDriver>,
    presenter: Option<Rc<dyn SheetPresenter>>,
}

impl SheetController {
    pub fn new(tokens: SharedTokens, driver: Rc<dyn TimerDriver>) -> Self {
        Self {
            core: Rc::new(RefCell::new(ControllerCore {
                machine: SheetMachine::new(),
                settle_timer: None,
            })),
            tokens,
            driver,
            presenter: None,
        }
    }

    pub fn with_presenter(mut self, presenter: Rc<dyn SheetPresenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn tokens(&self) -> &SharedTokens {
        &self.tokens
    }

    pub fn current_state(&self) -> SheetState {
        self.core.borrow().machine.state()
    }

    pub fn is_open(&self) -> bool {
        self.current_state().is_open()
    }

    pub fn is_locked(&self) -> bool {
        self.core.borrow().settle_timer.is_some()
    }

    /// Current timing, as the next accepted request would use it.
    pub fn timings(&self) -> SheetTimings {
        SheetTimings::resolve(&self.tokens.borrow())
    }

    pub fn request_open(&self) -> RequestOutcome {
        self.request(SheetEvent::RequestOpen)
    }

    pub fn request_close(&self) -> RequestOutcome {
        self.request(SheetEvent::RequestClose)
    }

    pub fn dismiss(&self, reason: DismissReason) -> RequestOutcome {
        tracing::debug!(?reason, "sheet dismiss requested");
        self.request_close()
    }

    /// Closes the sheet when the released drag passed the dismiss threshold.
    /// Returns `None` when the drag was too short to count.
    pub fn on_drag_release(&self, release: DragRelease) -> Option<RequestOutcome> {
        if !should_dismiss(release) {
            tracing::debug!(
                offset = release.vertical_offset,
                "drag released below dismiss threshold"
            );
            return None;
        }
        Some(self.dismiss(DismissReason::DragRelease))
    }

    /// Settles an in-flight transition immediately and disarms its timer.
    /// Returns `false` when nothing was in flight.
    pub fn settle_now(&self) -> bool {
        match settle(&self.core) {
            Some(state) => {
                notify_settled(self.presenter.as_deref(), state);
                true
            }
            None => false,
        }
    }

    fn request(&self, event: SheetEvent) -> RequestOutcome {
        let plan = {
            let mut core = self.core.borrow_mut();
            if core.settle_timer.is_some() {
                tracing::debug!(
                    state = ?core.machine.state(),
                    event = ?event,
                    "sheet request ignored while transition settles"
                );
                return RequestOutcome::Locked;
            }

            let transition = match core.machine.transition(event) {
                Ok(transition) => transition,
                Err(err) => {
                    tracing::debug!(%err, "redundant sheet request ignored");
                    return RequestOutcome::Redundant;
                }
            };

            let timings = SheetTimings::resolve(&self.tokens.borrow());
            let plan = timings.plan(transition.from, transition.to);
            core.settle_timer = Some(self.arm_settle_timer(plan.settle_timeout));
            plan
        };

        tracing::debug!(
            from = ?plan.from,
            to = ?plan.to,
            settle_ms = plan.settle_timeout.as_millis() as u64,
            "sheet transition accepted"
        );
        if let Some(presenter) = self.presenter.as_deref() {
            presenter.transition_started(&plan);
        }
        RequestOutcome::Accepted
    }

    fn arm_settle_timer(&self, timeout: std::time::Duration) -> TimerGuard {
        let core = Rc::downgrade(&self.core);
        let presenter = self.presenter.clone();
        TimerGuard::schedule(&self.driver, timeout, move || {
            on_settle_timeout(&core, presenter.as_deref());
        })
    }
}

fn on_settle_timeout(core: &Weak<RefCell<ControllerCore>>, presenter: Option<&dyn SheetPresenter>) {
    let Some(core) = core.upgrade() else {
        return;
    };
    if let Some(state) = settle(&core) {
        notify_settled(presenter, state);
    }
}

// Releases the lock and advances to the stable state when the transition has
// not been settled yet.
fn settle(core: &RefCell<ControllerCore>) -> Option<SheetState> {
    let mut core = core.borrow_mut();
    let timer = core.settle_timer.take()?;
    drop(timer);
    match core.machine.transition(SheetEvent::Settle) {
        Ok(transition) => Some(transition.to),
        Err(err) => {
            tracing::warn!(%err, "settle timer fired outside a transition");
            None
        }
    }
}

fn notify_settled(presenter: Option<&dyn SheetPresenter>, state: SheetState) {
    tracing::debug!(state = ?state, "sheet settled");
    if let Some(presenter) = presenter {
        presenter.transition_settled(state);
    }
}

impl std::fmt::Debug for SheetController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let core = self.core.borrow();
        f.debug_struct("SheetController")
            .field("state", &core.machine.state())
            .field("settle_timer", &core.settle_timer)
            .finish_non_exhaustive()
    }
}
