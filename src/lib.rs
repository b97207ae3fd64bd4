//! # tweenkit
//!
//! A frame-driven tweening engine.
//!
//! A [`Tween`] animates a [`Value`] from a start to an end state over a fixed
//! duration, shaped by one of the named [`EasingCurve`]s. Tweens can pause,
//! repeat and ping-pong, and notify listeners on every update and on
//! completion. A [`TweenCollection`] drives many tweens at once and reaps the
//! finished ones; a [`TweenGroup`] waits for several tweens to fire the same
//! event.
//!
//! Nothing here owns a render loop or a clock: call `update()` once per frame
//! and hand the tweens a [`Clock`] to read time from.

pub mod animation;
pub mod core;
pub mod events;
pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    clock::{Clock, ManualClock, SystemClock},
    config::{Cycles, TweenConfig},
};

pub use animation::{
    collection::{SharedTween, TweenCollection, TweenHandle},
    easing::{resolve_easing, EasedRange, EasingCurve, ElasticParams},
    group::TweenGroup,
    interpolation::Value,
    tweening::{Direction, Tween, TweenEvent, TweenPhase, TweenState},
};

pub use events::{Events, ListenerId};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TweenError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
    #[error("Invalid duration: {0} (must be a positive number of seconds)")]
    InvalidDuration(f64),

    #[error("Shape mismatch: cannot interpolate {from} into {to}")]
    ShapeMismatch {
        from: &'static str,
        to: &'static str,
    },

    #[error("Length mismatch: sequences of length {from} and {to}")]
    LengthMismatch { from: usize, to: usize },

    #[error("Unknown easing curve: {0}")]
    UnknownEasing(String),

    #[error("Unknown tween event: {0}")]
    UnknownEvent(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = TweenError;
