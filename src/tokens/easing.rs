//! Easing curve tokens.
//!
//! Two shapes are understood: a CSS-style `cubic-bezier(x1, y1, x2, y2)`
//! and a handful of named curves. The named spellings accept both the CSS
//! kebab-case form and the camelCase form used by motion libraries.

use std::fmt;

use super::TokenStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedEasing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl NamedEasing {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease-in" | "easeIn" => Some(Self::EaseIn),
            "ease-out" | "easeOut" => Some(Self::EaseOut),
            "ease-in-out" | "easeInOut" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Named(NamedEasing),
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub const EASE_OUT: Self = Self::Named(NamedEasing::EaseOut);
    pub const EASE_IN_OUT: Self = Self::Named(NamedEasing::EaseInOut);

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(named) = NamedEasing::parse(raw) {
            return Some(Self::Named(named));
        }
        parse_cubic_bezier(raw)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => f.write_str(named.css_name()),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

fn parse_cubic_bezier(raw: &str) -> Option<Easing> {
    let args = raw
        .strip_prefix("cubic-bezier")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut points = [0.0_f32; 4];
    let mut parts = args.split(',');
    for point in &mut points {
        let value: f32 = parts.next()?.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        *point = value;
    }
    if parts.next().is_some() {
        return None;
    }

    let [x1, y1, x2, y2] = points;
    // Control point x coordinates must stay inside the unit interval.
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return None;
    }
    Some(Easing::CubicBezier(x1, y1, x2, y2))
}

/// Resolves an easing token, falling back when the token is missing,
/// numeric, or not a recognizable curve.
pub fn resolve_easing(store: &TokenStore, name: &str, fallback: Easing) -> Easing {
    let parsed = store
        .get(name)
        .and_then(|value| value.as_text())
        .and_then(Easing::parse);
    match parsed {
        Some(easing) => easing,
        None => {
            tracing::debug!(token = name, %fallback, "easing token unavailable; using fallback");
            fallback
        }
    }
}
