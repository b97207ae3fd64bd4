//! Tween configuration
//!
//! A [`TweenConfig`] carries everything a tween needs to know before it runs:
//! the endpoints, how long one cycle lasts, which easing curve shapes it and how
//! often it repeats or bounces. Configurations can be built in code with the
//! `with_*` setters or loaded from JSON.

use crate::animation::easing::{resolve_easing, EasingCurve};
use crate::animation::interpolation::Value;
use crate::core::constants::{DEFAULT_EASING, INFINITE_CYCLES};
use crate::{Result, TweenError};
use serde::{Deserialize, Serialize};

/// How many times a repeat or ping-pong cycle runs.
///
/// Serialized as a plain integer where `-1` means forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Cycles {
    Finite(u32),
    Infinite,
}

impl Cycles {
    /// No cycling at all
    pub const NONE: Cycles = Cycles::Finite(0);

    /// Whether any cycling is configured
    pub fn is_enabled(&self) -> bool {
        *self != Cycles::NONE
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Cycles::Infinite)
    }
}

impl Default for Cycles {
    fn default() -> Self {
        Cycles::NONE
    }
}

impl From<i32> for Cycles {
    fn from(count: i32) -> Self {
        if count < 0 {
            Cycles::Infinite
        } else {
            Cycles::Finite(count as u32)
        }
    }
}

impl From<u32> for Cycles {
    fn from(count: u32) -> Self {
        Cycles::Finite(count)
    }
}

impl From<Cycles> for i32 {
    fn from(cycles: Cycles) -> Self {
        match cycles {
            Cycles::Finite(count) => count.min(i32::MAX as u32) as i32,
            Cycles::Infinite => INFINITE_CYCLES,
        }
    }
}

fn default_easing() -> String {
    DEFAULT_EASING.to_string()
}

fn default_auto_start() -> bool {
    true
}

/// Immutable per-animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenConfig {
    /// Starting value
    pub from: Value,
    /// Ending value, same shape as `from`
    pub to: Value,
    /// Length of one cycle in seconds
    pub duration: f64,
    /// Easing curve name; unknown names fall back to linear
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Additional forward runs after the first one
    #[serde(default)]
    pub repeat: Cycles,
    /// Forward/reverse pairs per run
    #[serde(default)]
    pub pingpong: Cycles,
    /// Start the clock as soon as the tween is built
    #[serde(default = "default_auto_start")]
    pub auto_start: bool,
}

impl TweenConfig {
    /// Create a linear, single-run configuration
    pub fn new(from: impl Into<Value>, to: impl Into<Value>, duration: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            duration,
            easing: default_easing(),
            repeat: Cycles::NONE,
            pingpong: Cycles::NONE,
            auto_start: true,
        }
    }

    /// Set the easing curve by name
    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Set the repeat policy (`-1` for forever)
    pub fn with_repeat(mut self, repeat: impl Into<Cycles>) -> Self {
        self.repeat = repeat.into();
        self
    }

    /// Set the ping-pong policy (`-1` for forever)
    pub fn with_pingpong(mut self, pingpong: impl Into<Cycles>) -> Self {
        self.pingpong = pingpong.into();
        self
    }

    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// The curve this configuration resolves to
    pub fn curve(&self) -> EasingCurve {
        resolve_easing(&self.easing)
    }

    /// Check the duration and that both endpoints share a shape
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(TweenError::InvalidDuration(self.duration));
        }
        self.from.check_compatible(&self.to)
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TweenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
