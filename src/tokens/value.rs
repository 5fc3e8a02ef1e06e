use std::fmt;

use serde::Deserialize;

/// Raw token value as stored in the registry.
///
/// Values are kept unparsed; each consumer interprets the value for its own
/// role (duration, easing curve, spring parameter) and falls back when the
/// shape does not match. Deserializes from a JSON string or number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Milliseconds for values shaped like `300ms`.
    pub fn as_duration_ms(&self) -> Option<u64> {
        self.as_text().and_then(parse_duration_ms)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Parses `^[0-9]+ms$`. Anything else, including digit runs that overflow
/// `u64`, is rejected.
pub(crate) fn parse_duration_ms(raw: &str) -> Option<u64> {
    let digits = raw.strip_suffix("ms")?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_shape_accepts_only_digit_runs_with_ms_suffix() {
        assert_eq!(parse_duration_ms("200ms"), Some(200));
        assert_eq!(parse_duration_ms("0ms"), Some(0));
        assert_eq!(parse_duration_ms("ms"), None);
        assert_eq!(parse_duration_ms("200"), None);
        assert_eq!(parse_duration_ms("200 ms"), None);
        assert_eq!(parse_duration_ms(" 200ms"), None);
        assert_eq!(parse_duration_ms("-200ms"), None);
        assert_eq!(parse_duration_ms("+200ms"), None);
        assert_eq!(parse_duration_ms("2.5ms"), None);
        assert_eq!(parse_duration_ms("200s"), None);
        assert_eq!(parse_duration_ms("abc"), None);
    }

    #[test]
    fn duration_shape_rejects_overflowing_digit_runs() {
        assert_eq!(parse_duration_ms("99999999999999999999999ms"), None);
    }

    #[test]
    fn numeric_values_are_not_durations() {
        assert_eq!(TokenValue::Number(42.0).as_duration_ms(), None);
        assert_eq!(TokenValue::from("42ms").as_duration_ms(), Some(42));
    }

    #[test]
    fn deserializes_strings_and_numbers_only() {
        let values: Vec<TokenValue> = serde_json::from_str(r#"["300ms", 230]"#).unwrap();
        assert_eq!(
            values,
            vec![TokenValue::from("300ms"), TokenValue::Number(230.0)]
        );
        assert!(serde_json::from_str::<TokenValue>("true").is_err());
        assert!(serde_json::from_str::<TokenValue>("null").is_err());
        assert!(serde_json::from_str::<TokenValue>(r#"{"a": 1}"#).is_err());
    }
}
