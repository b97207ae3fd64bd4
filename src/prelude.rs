//! Prelude module for common tweenkit types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use tweenkit::prelude::*;`

pub use crate::core::{
    clock::{Clock, ManualClock, SystemClock},
    config::{Cycles, TweenConfig},
};

pub use crate::animation::{
    collection::{SharedTween, TweenCollection, TweenHandle},
    easing::{resolve_easing, EasingCurve},
    group::TweenGroup,
    interpolation::Value,
    tweening::{Direction, Tween, TweenEvent, TweenPhase},
};

pub use crate::events::ListenerId;

pub use crate::{Error as TweenError, Result};

pub use std::{cell::RefCell, rc::Rc};
