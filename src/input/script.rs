use std::time::Duration;

use thiserror::Error;

use super::drag::{DismissReason, DragRelease};
use crate::tokens::TokenValue;

pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("unknown session event: {0}")]
    UnknownEvent(String),
    #[error("event `{event}` expects a value: {expected}")]
    MissingValue {
        event: &'static str,
        expected: &'static str,
    },
    #[error("invalid value `{value}` for event `{event}`")]
    InvalidValue { event: &'static str, value: String },
}

/// One step of a scripted sheet session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Open,
    Close,
    Dismiss(DismissReason),
    Drag(DragRelease),
    Wait(Duration),
    /// Ends the current transition early, as a real animation-finished
    /// signal would.
    Settle,
    SetToken { name: String, value: TokenValue },
}

/// Default session: open, an insufficient drag, a dismissing drag, a
/// rejected double tap, and a close through the overlay.
pub const DEMO_SCRIPT: &[&str] = &[
    "open",
    "open",
    "wait=800",
    "drag=60",
    "drag=150",
    "wait=800",
    "set=BOTTOM_SHEET_EXIT_DURATION:450ms",
    "open",
    "tap-overlay",
    "wait=1000",
    "tap-overlay",
];

pub fn parse_script<I, S>(args: I) -> ScriptResult<Vec<ScriptEvent>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| parse_event(arg.as_ref()))
        .collect()
}

pub fn parse_event(raw: &str) -> ScriptResult<ScriptEvent> {
    let (event, value) = match raw.split_once('=') {
        Some((event, value)) => (event, Some(value)),
        None => (raw, None),
    };

    match event {
        "open" => Ok(ScriptEvent::Open),
        "close" => Ok(ScriptEvent::Close),
        "settle" => Ok(ScriptEvent::Settle),
        "tap-overlay" => Ok(ScriptEvent::Dismiss(DismissReason::OverlayTap)),
        "close-button" => Ok(ScriptEvent::Dismiss(DismissReason::CloseButton)),
        "confirm" | "cancel" | "postpone" => {
            Ok(ScriptEvent::Dismiss(DismissReason::FooterAction))
        }
        "drag" => {
            let value = value.ok_or(ScriptError::MissingValue {
                event: "drag",
                expected: "vertical offset",
            })?;
            let offset = value
                .parse::<f64>()
                .ok()
                .filter(|offset| offset.is_finite())
                .ok_or_else(|| ScriptError::InvalidValue {
                    event: "drag",
                    value: value.to_string(),
                })?;
            Ok(ScriptEvent::Drag(DragRelease::new(offset)))
        }
        "wait" => {
            let value = value.ok_or(ScriptError::MissingValue {
                event: "wait",
                expected: "milliseconds",
            })?;
            let ms = value
                .parse::<u64>()
                .map_err(|_| ScriptError::InvalidValue {
                    event: "wait",
                    value: value.to_string(),
                })?;
            Ok(ScriptEvent::Wait(Duration::from_millis(ms)))
        }
        "set" => {
            let value = value.ok_or(ScriptError::MissingValue {
                event: "set",
                expected: "NAME:VALUE",
            })?;
            let (name, token) = value
                .split_once(':')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| ScriptError::InvalidValue {
                    event: "set",
                    value: value.to_string(),
                })?;
            Ok(ScriptEvent::SetToken {
                name: name.to_string(),
                value: parse_token_literal(token),
            })
        }
        _ => Err(ScriptError::UnknownEvent(raw.to_string())),
    }
}

fn parse_token_literal(raw: &str) -> TokenValue {
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => TokenValue::Number(number),
        _ => TokenValue::from(raw),
    }
}
