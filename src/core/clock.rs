//! Time sources for driving tweens.
//!
//! Tweens never own a clock; they read one that is handed to them. The
//! [`SystemClock`] is what a game loop uses, [`ManualClock`] is what tests and
//! deterministic replays use.

use instant::Instant;
use std::cell::Cell;
use std::fmt;

/// A monotonic time source reporting seconds since an arbitrary epoch
pub trait Clock {
    /// Current time in seconds
    fn now(&self) -> f64;
}

/// Wall-clock time measured from when the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Instant::now().duration_since(self.epoch).as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Share it behind an `Rc` between the code under test and the tweens so that
/// every `update()` sees exactly the time the test set.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock already positioned at `seconds`
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            now: Cell::new(seconds),
        }
    }

    /// Move the clock forward by `seconds`
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    /// Jump the clock to an absolute time
    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now.get())
            .finish()
    }
}
