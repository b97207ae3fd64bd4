//! Easing curves for smooth animations
//!
//! Every curve is defined on the classical `(t, b, c, d)` signature: current
//! time, start value, change in value and duration. [`EasingCurve::apply`] is the
//! normalized wrapper used by tweens, it evaluates `(t, 0, 1, 1)`.

use crate::core::constants::{ELASTIC_IN_OUT_PERIOD_FACTOR, ELASTIC_PERIOD_FACTOR, EXPO_SCALE};
use crate::TweenError;
use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// The fixed set of named easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingCurve {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

/// Optional overrides for the elastic curves
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElasticParams {
    /// Overshoot amplitude; ignored when smaller than the change magnitude
    pub amplitude: Option<f64>,
    /// Oscillation period in the same unit as the duration
    pub period: Option<f64>,
}

static CURVES_BY_NAME: Lazy<FxHashMap<&'static str, EasingCurve>> = Lazy::new(|| {
    EasingCurve::ALL
        .iter()
        .map(|curve| (curve.name(), *curve))
        .collect()
});

/// Resolve a curve by name, falling back to [`EasingCurve::Linear`] for
/// names that are not part of the set.
pub fn resolve_easing(name: &str) -> EasingCurve {
    match EasingCurve::from_name(name) {
        Some(curve) => curve,
        None => {
            log::debug!("unknown easing curve {:?}, using linear", name);
            EasingCurve::Linear
        }
    }
}

impl EasingCurve {
    pub const ALL: [EasingCurve; 25] = [
        EasingCurve::Linear,
        EasingCurve::EaseInQuad,
        EasingCurve::EaseOutQuad,
        EasingCurve::EaseInOutQuad,
        EasingCurve::EaseInCubic,
        EasingCurve::EaseOutCubic,
        EasingCurve::EaseInOutCubic,
        EasingCurve::EaseInQuart,
        EasingCurve::EaseOutQuart,
        EasingCurve::EaseInOutQuart,
        EasingCurve::EaseInQuint,
        EasingCurve::EaseOutQuint,
        EasingCurve::EaseInOutQuint,
        EasingCurve::EaseInSine,
        EasingCurve::EaseOutSine,
        EasingCurve::EaseInOutSine,
        EasingCurve::EaseInExpo,
        EasingCurve::EaseOutExpo,
        EasingCurve::EaseInOutExpo,
        EasingCurve::EaseInCirc,
        EasingCurve::EaseOutCirc,
        EasingCurve::EaseInOutCirc,
        EasingCurve::EaseInElastic,
        EasingCurve::EaseOutElastic,
        EasingCurve::EaseInOutElastic,
    ];

    /// External identifier of the curve
    pub fn name(&self) -> &'static str {
        match self {
            EasingCurve::Linear => "linear",
            EasingCurve::EaseInQuad => "easeInQuad",
            EasingCurve::EaseOutQuad => "easeOutQuad",
            EasingCurve::EaseInOutQuad => "easeInOutQuad",
            EasingCurve::EaseInCubic => "easeInCubic",
            EasingCurve::EaseOutCubic => "easeOutCubic",
            EasingCurve::EaseInOutCubic => "easeInOutCubic",
            EasingCurve::EaseInQuart => "easeInQuart",
            EasingCurve::EaseOutQuart => "easeOutQuart",
            EasingCurve::EaseInOutQuart => "easeInOutQuart",
            EasingCurve::EaseInQuint => "easeInQuint",
            EasingCurve::EaseOutQuint => "easeOutQuint",
            EasingCurve::EaseInOutQuint => "easeInOutQuint",
            EasingCurve::EaseInSine => "easeInSine",
            EasingCurve::EaseOutSine => "easeOutSine",
            EasingCurve::EaseInOutSine => "easeInOutSine",
            EasingCurve::EaseInExpo => "easeInExpo",
            EasingCurve::EaseOutExpo => "easeOutExpo",
            EasingCurve::EaseInOutExpo => "easeInOutExpo",
            EasingCurve::EaseInCirc => "easeInCirc",
            EasingCurve::EaseOutCirc => "easeOutCirc",
            EasingCurve::EaseInOutCirc => "easeInOutCirc",
            EasingCurve::EaseInElastic => "easeInElastic",
            EasingCurve::EaseOutElastic => "easeOutElastic",
            EasingCurve::EaseInOutElastic => "easeInOutElastic",
        }
    }

    /// Strict lookup by external identifier
    pub fn from_name(name: &str) -> Option<Self> {
        CURVES_BY_NAME.get(name).copied()
    }

    /// Whether the curve can leave the `[0, 1]` range
    pub fn overshoots(&self) -> bool {
        matches!(
            self,
            EasingCurve::EaseInElastic | EasingCurve::EaseOutElastic | EasingCurve::EaseInOutElastic
        )
    }

    /// Apply the curve to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        self.ease(t, 0.0, 1.0, 1.0)
    }

    /// Evaluate the curve at time `t` of `d`, starting at `b` and changing by `c`
    pub fn ease(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        self.ease_with(t, b, c, d, ElasticParams::default())
    }

    /// Like [`ease`](Self::ease), with amplitude/period overrides for the
    /// elastic curves. Other curves ignore `params`.
    pub fn ease_with(&self, t: f64, b: f64, c: f64, d: f64, params: ElasticParams) -> f64 {
        match self {
            EasingCurve::Linear => c * t / d + b,
            EasingCurve::EaseInQuad => {
                let t = t / d;
                c * t * t + b
            }
            EasingCurve::EaseOutQuad => {
                let t = t / d;
                -c * t * (t - 2.0) + b
            }
            EasingCurve::EaseInOutQuad => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t * t + b
                } else {
                    let t = t - 1.0;
                    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
                }
            }
            EasingCurve::EaseInCubic => {
                let t = t / d;
                c * t.powi(3) + b
            }
            EasingCurve::EaseOutCubic => {
                let t = t / d - 1.0;
                c * (t.powi(3) + 1.0) + b
            }
            EasingCurve::EaseInOutCubic => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t.powi(3) + b
                } else {
                    let t = t - 2.0;
                    c / 2.0 * (t.powi(3) + 2.0) + b
                }
            }
            EasingCurve::EaseInQuart => {
                let t = t / d;
                c * t.powi(4) + b
            }
            EasingCurve::EaseOutQuart => {
                let t = t / d - 1.0;
                -c * (t.powi(4) - 1.0) + b
            }
            EasingCurve::EaseInOutQuart => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t.powi(4) + b
                } else {
                    let t = t - 2.0;
                    -c / 2.0 * (t.powi(4) - 2.0) + b
                }
            }
            EasingCurve::EaseInQuint => {
                let t = t / d;
                c * t.powi(5) + b
            }
            EasingCurve::EaseOutQuint => {
                let t = t / d - 1.0;
                c * (t.powi(5) + 1.0) + b
            }
            EasingCurve::EaseInOutQuint => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * t.powi(5) + b
                } else {
                    let t = t - 2.0;
                    c / 2.0 * (t.powi(5) + 2.0) + b
                }
            }
            EasingCurve::EaseInSine => -c * (t / d * (PI / 2.0)).cos() + c + b,
            EasingCurve::EaseOutSine => c * (t / d * (PI / 2.0)).sin() + b,
            EasingCurve::EaseInOutSine => -c / 2.0 * ((PI * t / d).cos() - 1.0) + b,
            EasingCurve::EaseInExpo => {
                if t == 0.0 {
                    b
                } else {
                    c * 2.0_f64.powf(EXPO_SCALE * (t / d - 1.0)) + b
                }
            }
            EasingCurve::EaseOutExpo => {
                if t == d {
                    b + c
                } else {
                    c * (1.0 - 2.0_f64.powf(-EXPO_SCALE * t / d)) + b
                }
            }
            EasingCurve::EaseInOutExpo => {
                if t == 0.0 {
                    return b;
                }
                if t == d {
                    return b + c;
                }
                let t = t / (d / 2.0);
                if t < 1.0 {
                    c / 2.0 * 2.0_f64.powf(EXPO_SCALE * (t - 1.0)) + b
                } else {
                    let t = t - 1.0;
                    c / 2.0 * (2.0 - 2.0_f64.powf(-EXPO_SCALE * t)) + b
                }
            }
            EasingCurve::EaseInCirc => {
                let t = t / d;
                -c * ((1.0 - t * t).sqrt() - 1.0) + b
            }
            EasingCurve::EaseOutCirc => {
                let t = t / d - 1.0;
                c * (1.0 - t * t).sqrt() + b
            }
            EasingCurve::EaseInOutCirc => {
                let t = t / (d / 2.0);
                if t < 1.0 {
                    -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b
                } else {
                    let t = t - 2.0;
                    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
                }
            }
            EasingCurve::EaseInElastic => {
                if t == 0.0 {
                    return b;
                }
                let t = t / d;
                if t == 1.0 {
                    return b + c;
                }
                let (a, p, s) = elastic_shape(c, d * ELASTIC_PERIOD_FACTOR, params);
                let t = t - 1.0;
                -(a * 2.0_f64.powf(EXPO_SCALE * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
            }
            EasingCurve::EaseOutElastic => {
                if t == 0.0 {
                    return b;
                }
                let t = t / d;
                if t == 1.0 {
                    return b + c;
                }
                let (a, p, s) = elastic_shape(c, d * ELASTIC_PERIOD_FACTOR, params);
                a * 2.0_f64.powf(-EXPO_SCALE * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
            }
            EasingCurve::EaseInOutElastic => {
                if t == 0.0 {
                    return b;
                }
                let t = t / (d / 2.0);
                if t == 2.0 {
                    return b + c;
                }
                let (a, p, s) = elastic_shape(c, d * ELASTIC_IN_OUT_PERIOD_FACTOR, params);
                let t = t - 1.0;
                let wave = ((t * d - s) * (2.0 * PI) / p).sin();
                if t < 0.0 {
                    -0.5 * (a * 2.0_f64.powf(EXPO_SCALE * t) * wave) + b
                } else {
                    a * 2.0_f64.powf(-EXPO_SCALE * t) * wave * 0.5 + c + b
                }
            }
        }
    }
}

/// Amplitude, period and phase shift of an elastic curve.
///
/// A missing or zero period takes `default_period`. A missing, zero or too
/// small amplitude becomes the change itself with a quarter-period shift;
/// otherwise the shift comes from `asin(c / a)`.
fn elastic_shape(c: f64, default_period: f64, params: ElasticParams) -> (f64, f64, f64) {
    let p = match params.period {
        Some(p) if p != 0.0 => p,
        _ => default_period,
    };
    match params.amplitude {
        Some(a) if a != 0.0 && a >= c.abs() => (a, p, p / (2.0 * PI) * (c / a).asin()),
        _ => (c, p, p / 4.0),
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingCurve {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingCurve::from_name(s).ok_or_else(|| TweenError::UnknownEasing(s.to_string()))
    }
}

/// Evaluates one curve over an absolute value range and duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedRange {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub curve: EasingCurve,
    pub params: ElasticParams,
}

impl EasedRange {
    pub fn new(start: f64, end: f64, duration: f64, curve: EasingCurve) -> Self {
        Self {
            start,
            end,
            duration,
            curve,
            params: ElasticParams::default(),
        }
    }

    pub fn with_params(mut self, params: ElasticParams) -> Self {
        self.params = params;
        self
    }

    /// Value of the range at time `t` (0 to `duration`)
    pub fn at(&self, t: f64) -> f64 {
        self.curve
            .ease_with(t, self.start, self.end - self.start, self.duration, self.params)
    }
}
