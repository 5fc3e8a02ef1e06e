use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::names;
use super::TokenValue;

/// Registry handle shared between controllers and presenters on one thread.
pub type SharedTokens = Rc<RefCell<TokenStore>>;

/// Fixed-key registry of animation tokens.
///
/// The key set is decided at construction. Afterwards only values can be
/// replaced, one entry at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStore {
    entries: BTreeMap<String, TokenValue>,
}

impl TokenStore {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TokenValue>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Registry with the bottom sheet's default motion tokens. Durations
    /// match the fallbacks in [`crate::motion`]; the spring tokens drive
    /// the opening spring handed to presenters.
    pub fn with_defaults() -> Self {
        Self::from_entries([
            (names::ENTER_DURATION, TokenValue::from("200ms")),
            (
                names::ENTER_EASING,
                TokenValue::from("cubic-bezier(.165, .84, .44, 1)"),
            ),
            (names::EXIT_DURATION, TokenValue::from("100ms")),
            (
                names::EXIT_EASING,
                TokenValue::from("cubic-bezier(.165, .84, .44, 1)"),
            ),
            (names::OVERLAY_ENTER_DURATION, TokenValue::from("300ms")),
            (
                names::OVERLAY_ENTER_EASING,
                TokenValue::from("cubic-bezier(0.25, 0.1, 0.25, 1)"),
            ),
            (names::OVERLAY_EXIT_DURATION, TokenValue::from("250ms")),
            (
                names::OVERLAY_EXIT_EASING,
                TokenValue::from("cubic-bezier(.165, .84, .44, 1)"),
            ),
            (names::SPRING_STIFFNESS, TokenValue::Number(230.0)),
            (names::SPRING_DAMPING, TokenValue::Number(22.22)),
            (names::SPRING_MASS, TokenValue::Number(1.0)),
        ])
    }

    pub fn into_shared(self) -> SharedTokens {
        Rc::new(RefCell::new(self))
    }

    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.entries.get(name)
    }

    /// Replaces the value of an existing token. Unknown names are rejected
    /// and leave the registry untouched.
    pub fn set(&mut self, name: &str, value: impl Into<TokenValue>) -> bool {
        let Some(slot) = self.entries.get_mut(name) else {
            tracing::warn!(token = name, "rejected update for unknown token");
            return false;
        };
        let value = value.into();
        tracing::debug!(token = name, old = %slot, new = %value, "token updated");
        *slot = value;
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl TokenStore {
    fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
