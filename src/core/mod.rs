pub mod clock;
pub mod config;
pub mod constants;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Cycles, TweenConfig};
