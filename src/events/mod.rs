//! Publish/subscribe notifications used by tweens and groups.

pub mod emitter;

pub use emitter::{Callback, Events, ListenerId};
