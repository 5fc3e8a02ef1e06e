mod duration;
mod easing;
mod spring;
mod store;
mod value;

pub use duration::{ms_to_seconds, resolve_ms, resolve_seconds, DEFAULT_SECONDS};
pub use easing::{resolve_easing, Easing, NamedEasing};
pub use spring::{resolve_spring, SpringConfig};
pub use store::{SharedTokens, TokenStore};
pub use value::TokenValue;

/// Token names declared by the default registry.
pub mod names {
    pub const ENTER_DURATION: &str = "BOTTOM_SHEET_ENTER_DURATION";
    pub const ENTER_EASING: &str = "BOTTOM_ENTER_EASING";
    pub const EXIT_DURATION: &str = "BOTTOM_SHEET_EXIT_DURATION";
    pub const EXIT_EASING: &str = "BOTTOM_EXIT_EASING";
    pub const OVERLAY_ENTER_DURATION: &str = "BOTTOM_SHEET_OVERLAY_ENTER_DURATION";
    pub const OVERLAY_ENTER_EASING: &str = "BOTTOM_SHEET_OVERLAY_ENTER_EASING";
    pub const OVERLAY_EXIT_DURATION: &str = "BOTTOM_SHEET_OVERLAY_EXIT_DURATION";
    pub const OVERLAY_EXIT_EASING: &str = "BOTTOM_SHEET_OVERLAY_EXIT_EASING";
    pub const SPRING_STIFFNESS: &str = "SPRING_STIFFNESS_MEDIUM";
    pub const SPRING_DAMPING: &str = "SPRING_DAMPING_HIGH";
    pub const SPRING_MASS: &str = "SPRING_MASS_DEFAULT";

    pub const ALL: [&str; 11] = [
        ENTER_DURATION,
        ENTER_EASING,
        EXIT_DURATION,
        EXIT_EASING,
        OVERLAY_ENTER_DURATION,
        OVERLAY_ENTER_EASING,
        OVERLAY_EXIT_DURATION,
        OVERLAY_EXIT_EASING,
        SPRING_STIFFNESS,
        SPRING_DAMPING,
        SPRING_MASS,
    ];
}
