//! Engine-wide constants shared by the easing library and the tween state machine.

/// Easing curve name used when a configuration does not name one.
pub const DEFAULT_EASING: &str = "linear";

/// Elastic period as a fraction of the duration (in/out variants).
pub const ELASTIC_PERIOD_FACTOR: f64 = 0.3;

/// Elastic period as a fraction of the duration for the in-out variant.
pub const ELASTIC_IN_OUT_PERIOD_FACTOR: f64 = 0.3 * 1.5;

/// Exponent base scale for the exponential curves (`2^(10 * t)`).
pub const EXPO_SCALE: f64 = 10.0;

/// Wire value meaning "repeat forever" for repeat and ping-pong counts.
pub const INFINITE_CYCLES: i32 = -1;
