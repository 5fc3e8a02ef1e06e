use super::{TokenStore, TokenValue};

/// Seconds used when a value cannot be read as a duration at all.
pub const DEFAULT_SECONDS: f64 = 0.2;

/// Resolves a duration token to milliseconds.
///
/// Missing and malformed tokens both yield `fallback_ms`.
pub fn resolve_ms(store: &TokenStore, name: &str, fallback_ms: u64) -> u64 {
    match store.get(name).map(TokenValue::as_duration_ms) {
        Some(Some(ms)) => ms,
        Some(None) => {
            tracing::debug!(token = name, fallback_ms, "malformed duration token");
            fallback_ms
        }
        None => {
            tracing::trace!(token = name, fallback_ms, "duration token not declared");
            fallback_ms
        }
    }
}

pub fn resolve_seconds(store: &TokenStore, name: &str, fallback_ms: u64) -> f64 {
    resolve_ms(store, name, fallback_ms) as f64 / 1000.0
}

/// Converts a raw millisecond count to seconds. Text is never parsed here,
/// even when shaped like `150ms`; it yields [`DEFAULT_SECONDS`].
pub fn ms_to_seconds(value: &TokenValue) -> f64 {
    match value {
        TokenValue::Number(ms) if ms.is_finite() => ms / 1000.0,
        TokenValue::Number(_) | TokenValue::Text(_) => DEFAULT_SECONDS,
    }
}
