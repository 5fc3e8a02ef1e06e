use crate::motion::TransitionPlan;
use crate::state::SheetState;

/// Rendering side of a sheet. Implementations play the visual transition
/// described by the plan; the controller never waits on them.
///
/// Methods take `&self` and are called with no controller borrow held, so
/// an implementation may call back into the controller.
pub trait SheetPresenter {
    fn transition_started(&self, plan: &TransitionPlan);

    fn transition_settled(&self, state: SheetState);
}

/// Presenter that only logs what it would render.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPresenter;

impl SheetPresenter for TracingPresenter {
    fn transition_started(&self, plan: &TransitionPlan) {
        tracing::info!(
            from = ?plan.from,
            to = ?plan.to,
            sheet_secs = plan.sheet.duration_secs(),
            sheet_easing = %plan.sheet.easing,
            overlay_secs = plan.overlay.duration_secs(),
            overlay_easing = %plan.overlay.easing,
            spring = ?plan.spring,
            settle_ms = plan.settle_timeout.as_millis() as u64,
            "sheet transition started"
        );
    }

    fn transition_settled(&self, state: SheetState) {
        tracing::info!(state = ?state, "sheet transition settled");
    }
}
