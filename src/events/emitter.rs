use fxhash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A listener callback receiving the emitted payload
pub type Callback<A> = Box<dyn FnMut(&A)>;

/// Handle returned by [`Events::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener<A> {
    id: ListenerId,
    once: bool,
    callback: Callback<A>,
}

/// Named-event emitter with synchronous fan-out.
///
/// Listeners run in subscription order. A listener that panics is logged and
/// skipped; the remaining listeners still run and the emitter stays usable.
pub struct Events<K, A> {
    listeners: FxHashMap<K, Vec<Listener<A>>>,
    next_id: u64,
}

impl<K, A> Events<K, A>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            listeners: FxHashMap::default(),
            next_id: 0,
        }
    }

    fn subscribe(&mut self, event: K, once: bool, callback: Callback<A>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(event).or_default().push(Listener {
            id,
            once,
            callback,
        });
        id
    }

    /// Subscribe to an event
    pub fn on<F>(&mut self, event: K, callback: F) -> ListenerId
    where
        F: FnMut(&A) + 'static,
    {
        self.subscribe(event, false, Box::new(callback))
    }

    /// Subscribe for a single occurrence; the listener is dropped after it runs
    pub fn once<F>(&mut self, event: K, callback: F) -> ListenerId
    where
        F: FnMut(&A) + 'static,
    {
        self.subscribe(event, true, Box::new(callback))
    }

    /// Remove one listener. Returns whether it was subscribed.
    pub fn off(&mut self, event: &K, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(event) else {
            return false;
        };
        let before = list.len();
        list.retain(|listener| listener.id != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.listeners.remove(event);
        }
        removed
    }

    /// Remove every listener of one event
    pub fn off_all(&mut self, event: &K) {
        self.listeners.remove(event);
    }

    /// Remove all listeners of all events
    pub fn reset(&mut self) {
        self.listeners.clear();
    }

    /// Call every listener of `event` with `payload`. Returns how many ran.
    pub fn emit(&mut self, event: &K, payload: &A) -> usize {
        let Some(list) = self.listeners.get_mut(event) else {
            return 0;
        };

        for listener in list.iter_mut() {
            let callback = &mut listener.callback;
            if catch_unwind(AssertUnwindSafe(|| callback(payload))).is_err() {
                log::error!("listener {:?} for {:?} panicked", listener.id, event);
            }
        }

        let fired = list.len();
        list.retain(|listener| !listener.once);
        if list.is_empty() {
            self.listeners.remove(event);
        }
        fired
    }

    /// Alias of [`emit`](Self::emit)
    pub fn trigger(&mut self, event: &K, payload: &A) -> usize {
        self.emit(event, payload)
    }

    pub fn listener_count(&self, event: &K) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<K, A> Default for Events<K, A>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, A> fmt::Debug for Events<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event, list) in &self.listeners {
            map.entry(event, &list.len());
        }
        map.finish()
    }
}
