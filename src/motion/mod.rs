//! Per-transition timing derived from the token registry.

use std::time::Duration;

use crate::state::SheetState;
use crate::tokens::{
    names, resolve_easing, resolve_ms, resolve_spring, Easing, NamedEasing, SpringConfig,
    TokenStore,
};

pub const SHEET_ENTER_FALLBACK_MS: u64 = 200;
pub const SHEET_EXIT_FALLBACK_MS: u64 = 100;
pub const OVERLAY_ENTER_FALLBACK_MS: u64 = 300;
pub const OVERLAY_EXIT_FALLBACK_MS: u64 = 250;

/// Padding added on top of the longest transition before new requests are
/// accepted again.
pub const SETTLE_BUFFER: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// Timing for every animated part of the sheet, resolved in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetTimings {
    pub sheet_enter: Tween,
    pub sheet_exit: Tween,
    pub overlay_enter: Tween,
    pub overlay_exit: Tween,
    pub spring: SpringConfig,
}

impl SheetTimings {
    pub fn resolve(store: &TokenStore) -> Self {
        Self {
            sheet_enter: resolve_tween(
                store,
                names::ENTER_DURATION,
                SHEET_ENTER_FALLBACK_MS,
                names::ENTER_EASING,
                Easing::EASE_OUT,
            ),
            sheet_exit: resolve_tween(
                store,
                names::EXIT_DURATION,
                SHEET_EXIT_FALLBACK_MS,
                names::EXIT_EASING,
                Easing::EASE_OUT,
            ),
            overlay_enter: resolve_tween(
                store,
                names::OVERLAY_ENTER_DURATION,
                OVERLAY_ENTER_FALLBACK_MS,
                names::OVERLAY_ENTER_EASING,
                Easing::Named(NamedEasing::Ease),
            ),
            overlay_exit: resolve_tween(
                store,
                names::OVERLAY_EXIT_DURATION,
                OVERLAY_EXIT_FALLBACK_MS,
                names::OVERLAY_EXIT_EASING,
                Easing::EASE_OUT,
            ),
            spring: resolve_spring(store),
        }
    }

    /// Longest transition that could be in play, padded with
    /// [`SETTLE_BUFFER`]. This is an upper-bound estimate, not a completion
    /// signal.
    pub fn settle_timeout(&self) -> Duration {
        [
            self.sheet_enter.duration,
            self.sheet_exit.duration,
            self.overlay_enter.duration,
            self.overlay_exit.duration,
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
            + SETTLE_BUFFER
    }

    pub fn plan(&self, from: SheetState, to: SheetState) -> TransitionPlan {
        let opening = to.is_open();
        let (sheet, overlay) = if opening {
            (self.sheet_enter, self.overlay_enter)
        } else {
            (self.sheet_exit, self.overlay_exit)
        };
        TransitionPlan {
            from,
            to,
            sheet,
            overlay,
            spring: opening.then_some(self.spring),
            settle_timeout: self.settle_timeout(),
        }
    }
}

fn resolve_tween(
    store: &TokenStore,
    duration_token: &str,
    fallback_ms: u64,
    easing_token: &str,
    fallback_easing: Easing,
) -> Tween {
    Tween {
        duration: Duration::from_millis(resolve_ms(store, duration_token, fallback_ms)),
        easing: resolve_easing(store, easing_token, fallback_easing),
    }
}

/// Everything a presenter needs to play one accepted transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPlan {
    pub from: SheetState,
    pub to: SheetState,
    pub sheet: Tween,
    pub overlay: Tween,
    /// Only set for opening transitions, where the sheet may be driven by a
    /// spring instead of the tween.
    pub spring: Option<SpringConfig>,
    pub settle_timeout: Duration,
}
