use super::{names, TokenStore};

/// Physical parameters for a spring-driven transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const DEFAULT: Self = Self {
        stiffness: 230.0,
        damping: 22.22,
        mass: 1.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reads the spring tokens. Each field falls back on its own when the token
/// is missing, textual, or not a finite positive number.
pub fn resolve_spring(store: &TokenStore) -> SpringConfig {
    SpringConfig {
        stiffness: resolve_positive(
            store,
            names::SPRING_STIFFNESS,
            SpringConfig::DEFAULT.stiffness,
        ),
        damping: resolve_positive(store, names::SPRING_DAMPING, SpringConfig::DEFAULT.damping),
        mass: resolve_positive(store, names::SPRING_MASS, SpringConfig::DEFAULT.mass),
    }
}

fn resolve_positive(store: &TokenStore, name: &str, fallback: f64) -> f64 {
    match store.get(name).and_then(|value| value.as_number()) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            tracing::debug!(token = name, fallback, "spring token unavailable; using fallback");
            fallback
        }
    }
}
