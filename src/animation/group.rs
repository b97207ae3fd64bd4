//! Observe a shared event across several tweens.

use crate::animation::collection::{SharedTween, TweenHandle};
use crate::animation::interpolation::Value;
use crate::animation::tweening::TweenEvent;
use fxhash::FxHashSet;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A non-owning view over tweens owned elsewhere.
///
/// The group never keeps its tweens alive. A tween that has been dropped counts
/// as complete, since owners such as a collection only drop completed tweens.
#[derive(Debug, Clone, Default)]
pub struct TweenGroup {
    tweens: Vec<TweenHandle>,
    /// Members whose `complete` reached one of this group's relays
    finished: Rc<RefCell<FxHashSet<usize>>>,
}

impl TweenGroup {
    pub fn new(tweens: impl IntoIterator<Item = TweenHandle>) -> Self {
        Self {
            tweens: tweens.into_iter().collect(),
            finished: Rc::default(),
        }
    }

    pub fn from_shared(tweens: &[SharedTween]) -> Self {
        Self::new(tweens.iter().map(TweenHandle::new))
    }

    /// Call `callback` each time every tween of the group has fired `event`.
    ///
    /// Each tween counts once per occurrence; after the callback runs the
    /// tracking resets for the next occurrence. The callback receives the value
    /// of the tween that fired last. Returns how many tweens were subscribed.
    ///
    /// The relays live in the tweens' listener lists, so they are severed by
    /// `stop()` like any other listener.
    pub fn on<F>(&self, event: TweenEvent, callback: F) -> usize
    where
        F: FnMut(&Value) + 'static,
    {
        let fired: Rc<RefCell<FxHashSet<usize>>> = Rc::default();
        let expected = Rc::new(Cell::new(0usize));
        let callback = Rc::new(RefCell::new(callback));

        let mut subscribed = 0;
        for (index, handle) in self.tweens.iter().enumerate() {
            let fired = fired.clone();
            let expected = expected.clone();
            let callback = callback.clone();
            let finished = self.finished.clone();
            let relay = move |value: &Value| {
                if event == TweenEvent::Complete {
                    finished.borrow_mut().insert(index);
                }
                let all_fired = {
                    let mut fired = fired.borrow_mut();
                    fired.insert(index);
                    fired.len() >= expected.get()
                };
                if !all_fired {
                    return;
                }
                fired.borrow_mut().clear();
                match callback.try_borrow_mut() {
                    Ok(mut callback) => (&mut *callback)(value),
                    Err(_) => log::warn!("group callback for {} re-entered, skipping", event),
                };
            };

            if handle.with_mut(|tween| tween.on(event, relay)).is_some() {
                subscribed += 1;
            } else {
                log::warn!("group member {} unavailable, not subscribed to {}", index, event);
            }
        }

        expected.set(subscribed);
        subscribed
    }

    /// Whether every referenced tween has completed.
    ///
    /// A tween that is mid-update (borrowed by its own `update()`) cannot be
    /// inspected. It counts as complete only if its `complete` event already
    /// reached a relay installed by [`on`](Self::on), so calling this from a
    /// group `Complete` callback sees the whole group as complete.
    pub fn is_complete(&self) -> bool {
        let finished = self.finished.borrow();
        self.tweens
            .iter()
            .enumerate()
            .all(|(index, handle)| match handle.upgrade() {
                None => true,
                Some(tween) => match tween.try_borrow() {
                    Ok(tween) => tween.is_completed(),
                    Err(_) => finished.contains(&index),
                },
            })
    }

    /// Stop every referenced tween that is still alive
    pub fn stop(&self) {
        for handle in &self.tweens {
            handle.with_mut(|tween| tween.stop());
        }
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn handles(&self) -> &[TweenHandle] {
        &self.tweens
    }
}
