pub mod collection;
pub mod easing;
pub mod group;
pub mod interpolation;
pub mod tweening;

// Re-export commonly used types and functions for convenience
pub use collection::{SharedTween, TweenCollection, TweenHandle};
pub use easing::{resolve_easing, EasedRange, EasingCurve, ElasticParams};
pub use group::TweenGroup;
pub use interpolation::Value;
pub use tweening::{Direction, Tween, TweenEvent, TweenPhase, TweenState};
