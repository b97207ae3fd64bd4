//! Owning container for many tweens updated together.

use crate::animation::interpolation::Value;
use crate::animation::tweening::{Tween, TweenPhase};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::TweenConfig;
use crate::Result;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A tween shared between its owner and any number of handles
pub type SharedTween = Rc<RefCell<Tween>>;

/// Non-owning reference to a tween.
///
/// Every accessor returns `None` once the owner dropped the tween (for a
/// collection: once it completed and was reaped) or while the tween is busy
/// inside its own `update()`.
#[derive(Clone)]
pub struct TweenHandle {
    tween: Weak<RefCell<Tween>>,
}

impl TweenHandle {
    pub fn new(tween: &SharedTween) -> Self {
        Self {
            tween: Rc::downgrade(tween),
        }
    }

    pub fn upgrade(&self) -> Option<SharedTween> {
        self.tween.upgrade()
    }

    /// Whether the tween still exists
    pub fn is_alive(&self) -> bool {
        self.tween.strong_count() > 0
    }

    pub fn with<R>(&self, f: impl FnOnce(&Tween) -> R) -> Option<R> {
        let tween = self.tween.upgrade()?;
        let tween = tween.try_borrow().ok()?;
        Some(f(&tween))
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Tween) -> R) -> Option<R> {
        let tween = self.tween.upgrade()?;
        let mut tween = tween.try_borrow_mut().ok()?;
        Some(f(&mut tween))
    }

    pub fn value(&self) -> Option<Value> {
        self.with(|tween| tween.value().clone())
    }

    pub fn progress(&self) -> Option<f64> {
        self.with(Tween::progress)
    }

    pub fn is_completed(&self) -> Option<bool> {
        self.with(Tween::is_completed)
    }

    pub fn phase(&self) -> Option<TweenPhase> {
        self.with(Tween::phase)
    }

    /// Whether both handles point at the same tween
    pub fn ptr_eq(&self, other: &TweenHandle) -> bool {
        self.tween.ptr_eq(&other.tween)
    }
}

impl From<&SharedTween> for TweenHandle {
    fn from(tween: &SharedTween) -> Self {
        TweenHandle::new(tween)
    }
}

impl fmt::Debug for TweenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenHandle")
            .field("alive", &self.is_alive())
            .field("phase", &self.phase())
            .finish()
    }
}

/// Manages multiple tween animations running in parallel.
///
/// The collection owns its tweens and is the only place they are dropped:
/// completed tweens are reaped at the end of each [`update`](Self::update).
pub struct TweenCollection {
    clock: Rc<dyn Clock>,
    tweens: Vec<SharedTween>,
}

impl TweenCollection {
    /// Create a collection whose tweens read the system clock
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock::new()))
    }

    /// Create a collection whose tweens read `clock`
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            tweens: Vec::new(),
        }
    }

    /// Build a tween from `config` and take ownership of it
    pub fn append(&mut self, config: TweenConfig) -> Result<TweenHandle> {
        let tween = Tween::with_clock(config, self.clock.clone())?;
        Ok(self.push(tween))
    }

    /// Take ownership of an already built tween
    pub fn push(&mut self, tween: Tween) -> TweenHandle {
        let shared = Rc::new(RefCell::new(tween));
        let handle = TweenHandle::new(&shared);
        self.tweens.push(shared);
        handle
    }

    /// Update every tween in insertion order, then drop the completed ones.
    ///
    /// Returns how many tweens were reaped.
    pub fn update(&mut self) -> usize {
        for tween in &self.tweens {
            match tween.try_borrow_mut() {
                Ok(mut tween) => {
                    tween.update();
                }
                Err(_) => log::warn!("skipping tween that is borrowed elsewhere"),
            }
        }

        let before = self.tweens.len();
        self.tweens
            .retain(|tween| !tween.try_borrow().map_or(false, |t| t.is_completed()));
        let reaped = before - self.tweens.len();
        if reaped > 0 {
            log::debug!("reaped {} completed tween(s), {} active", reaped, self.tweens.len());
        }
        reaped
    }

    /// Pause all tweens
    pub fn pause(&mut self) {
        self.for_each_mut(Tween::pause);
    }

    /// Resume all paused tweens
    pub fn unpause(&mut self) {
        self.for_each_mut(Tween::unpause);
    }

    /// Stop every tween and release all of them
    pub fn stop(&mut self) {
        for tween in self.tweens.drain(..) {
            if let Ok(mut tween) = tween.try_borrow_mut() {
                tween.stop();
            }
        }
    }

    /// Alias of [`stop`](Self::stop)
    pub fn reset(&mut self) {
        self.stop();
    }

    fn for_each_mut(&mut self, mut f: impl FnMut(&mut Tween)) {
        for tween in &self.tweens {
            if let Ok(mut tween) = tween.try_borrow_mut() {
                f(&mut tween);
            }
        }
    }

    /// Number of tweens still owned
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Handles to every owned tween, in insertion order
    pub fn handles(&self) -> Vec<TweenHandle> {
        self.tweens.iter().map(TweenHandle::new).collect()
    }
}

impl Default for TweenCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TweenCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenCollection")
            .field("len", &self.tweens.len())
            .finish()
    }
}
