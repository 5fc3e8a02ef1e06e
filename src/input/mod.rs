mod drag;
mod script;

pub use drag::{should_dismiss, DismissReason, DragRelease, DISMISS_THRESHOLD};
pub use script::{parse_event, parse_script, ScriptError, ScriptEvent, ScriptResult, DEMO_SCRIPT};
