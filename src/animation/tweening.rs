use crate::animation::easing::{resolve_easing, EasingCurve};
use crate::animation::interpolation::Value;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{Cycles, TweenConfig};
use crate::events::{Events, ListenerId};
use crate::{Result, TweenError};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Notifications a tween emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenEvent {
    /// Fired on every update with the current value
    Update,
    /// Fired once when the last cycle finishes
    Complete,
}

impl TweenEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TweenEvent::Update => "update",
            TweenEvent::Complete => "complete",
        }
    }
}

impl FromStr for TweenEvent {
    type Err = TweenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "update" => Ok(TweenEvent::Update),
            "complete" => Ok(TweenEvent::Complete),
            other => Err(TweenError::UnknownEvent(other.to_string())),
        }
    }
}

impl fmt::Display for TweenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way the current cycle runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Lifecycle phase of a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Mutable state of a tween animation
#[derive(Debug, Clone, PartialEq)]
pub struct TweenState {
    /// Last computed value
    pub value: Value,
    /// Progress fraction of the current cycle, clamped to `[0, 1]`
    pub time: f64,
    pub direction: Direction,
    /// Completed repeat cycles
    pub cycle_count: u32,
    /// Completed reverse legs of the current ping-pong run
    pub pingpong_count: u32,
    pub running: bool,
    pub paused: bool,
    pub completed: bool,
    /// Clock reading when the current cycle started
    pub start_time: f64,
    /// Clock reading when the current pause began
    pub paused_at: f64,
    /// Total paused seconds in the current cycle
    pub pause_duration: f64,
}

impl TweenState {
    fn new(value: Value) -> Self {
        Self {
            value,
            time: 0.0,
            direction: Direction::Forward,
            cycle_count: 0,
            pingpong_count: 0,
            running: false,
            paused: false,
            completed: false,
            start_time: 0.0,
            paused_at: 0.0,
            pause_duration: 0.0,
        }
    }
}

/// A tween animation between two values.
///
/// The tween is driven by calling [`update`](Self::update) once per frame; it
/// reads the elapsed time from its clock, eases it and interpolates between the
/// configured endpoints.
pub struct Tween {
    config: TweenConfig,
    curve: EasingCurve,
    state: TweenState,
    events: Events<TweenEvent, Value>,
    clock: Rc<dyn Clock>,
}

impl Tween {
    /// Create a tween driven by the system clock
    pub fn new(config: TweenConfig) -> Result<Self> {
        Self::with_clock(config, Rc::new(SystemClock::new()))
    }

    /// Create a tween driven by `clock`
    pub fn with_clock(config: TweenConfig, clock: Rc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let curve = resolve_easing(&config.easing);
        let mut tween = Self {
            state: TweenState::new(config.from.clone()),
            curve,
            config,
            events: Events::new(),
            clock,
        };
        if tween.config.auto_start {
            tween.start();
        }
        Ok(tween)
    }

    /// Attach an update listener while building
    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Value) + 'static,
    {
        self.events.on(TweenEvent::Update, callback);
        self
    }

    /// Attach a completion listener while building
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Value) + 'static,
    {
        self.events.on(TweenEvent::Complete, callback);
        self
    }

    /// Subscribe to a tween event
    pub fn on<F>(&mut self, event: TweenEvent, callback: F) -> ListenerId
    where
        F: FnMut(&Value) + 'static,
    {
        self.events.on(event, callback)
    }

    /// Subscribe for a single occurrence of a tween event
    pub fn once<F>(&mut self, event: TweenEvent, callback: F) -> ListenerId
    where
        F: FnMut(&Value) + 'static,
    {
        self.events.once(event, callback)
    }

    /// Unsubscribe a listener
    pub fn off(&mut self, event: TweenEvent, id: ListenerId) -> bool {
        self.events.off(&event, id)
    }

    /// Drop every listener without touching the running state
    pub fn clear_listeners(&mut self) {
        self.events.reset();
    }

    pub fn listener_count(&self, event: TweenEvent) -> usize {
        self.events.listener_count(&event)
    }

    /// Start the clock. Does nothing while running or once completed.
    pub fn start(&mut self) {
        if self.state.running || self.state.completed {
            return;
        }
        self.state.start_time = self.clock.now();
        self.state.paused = false;
        self.state.paused_at = 0.0;
        self.state.pause_duration = 0.0;
        self.state.running = true;
    }

    /// Halt the tween and remove all of its listeners.
    ///
    /// Listeners do not survive a stop: anything that wants to keep observing
    /// across a `stop()`/`restart()` must subscribe again.
    pub fn stop(&mut self) {
        self.state.running = false;
        self.state.paused = false;
        self.events.reset();
    }

    /// Reset counters, direction and value, then start from the beginning
    pub fn restart(&mut self) {
        self.state.cycle_count = 0;
        self.state.pingpong_count = 0;
        self.state.direction = Direction::Forward;
        self.state.completed = false;
        self.restart_cycle();
    }

    /// Pause the tween; paused time never counts toward progress
    pub fn pause(&mut self) {
        if self.state.paused || !self.state.running {
            return;
        }
        self.state.paused = true;
        self.state.paused_at = self.clock.now();
    }

    /// Resume a paused tween
    pub fn unpause(&mut self) {
        if !self.state.paused {
            return;
        }
        self.state.paused = false;
        self.state.pause_duration += self.clock.now() - self.state.paused_at;
        self.state.paused_at = 0.0;
    }

    /// Invert the direction of the current cycle
    pub fn flip(&mut self) {
        self.state.direction = self.state.direction.flipped();
    }

    /// Advance the tween to the current clock time and return its value
    pub fn update(&mut self) -> &Value {
        if self.state.paused || self.state.completed || !self.state.running {
            return &self.state.value;
        }

        let elapsed = self.clock.now() - self.state.start_time - self.state.pause_duration;
        self.state.time = (elapsed / self.config.duration).clamp(0.0, 1.0);

        let t = match self.state.direction {
            Direction::Forward => self.state.time,
            Direction::Reverse => 1.0 - self.state.time,
        };
        let progress = self.curve.apply(t);

        // Shapes were validated at construction
        self.state.value = match self.config.from.lerp(&self.config.to, progress) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("tween interpolation failed, using end value: {}", e);
                self.config.to.clone()
            }
        };

        self.events.emit(&TweenEvent::Update, &self.state.value);

        if self.state.time >= 1.0 {
            self.finish_cycle();
        }

        &self.state.value
    }

    /// Cycle-boundary bookkeeping: ping-pong first, then repeats
    fn finish_cycle(&mut self) {
        self.state.value = self.config.to.clone();

        if self.config.pingpong.is_enabled() {
            if self.state.direction == Direction::Forward {
                self.flip();
                self.restart_cycle();
                return;
            }

            self.state.pingpong_count = self.state.pingpong_count.saturating_add(1);
            let more = match self.config.pingpong {
                Cycles::Infinite => true,
                Cycles::Finite(count) => self.state.pingpong_count < count,
            };
            if more {
                self.flip();
                self.restart_cycle();
                return;
            }
            self.state.value = self.config.from.clone();
            self.flip();
            self.state.pingpong_count = 0;
        }

        self.state.cycle_count = self.state.cycle_count.saturating_add(1);
        match self.config.repeat {
            Cycles::Infinite => self.restart_cycle(),
            Cycles::Finite(count) if self.state.cycle_count <= count => self.restart_cycle(),
            Cycles::Finite(_) => self.complete(),
        }
    }

    /// Begin a new cycle keeping counters and direction
    fn restart_cycle(&mut self) {
        self.state.value = match self.state.direction {
            Direction::Forward => self.config.from.clone(),
            Direction::Reverse => self.config.to.clone(),
        };
        self.state.time = 0.0;
        self.state.running = false;
        self.start();
    }

    /// Terminal completion: bookkeeping first, then notify and sever listeners
    fn complete(&mut self) {
        self.state.completed = true;
        self.state.running = false;
        self.state.paused = false;
        log::debug!(
            "tween {} -> {} completed after {} cycle(s)",
            self.config.from,
            self.config.to,
            self.state.cycle_count
        );
        self.events.emit(&TweenEvent::Update, &self.state.value);
        self.events.emit(&TweenEvent::Complete, &self.state.value);
        self.stop();
    }

    pub fn value(&self) -> &Value {
        &self.state.value
    }

    /// Progress fraction of the current cycle before easing
    pub fn progress(&self) -> f64 {
        self.state.time
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn cycle_count(&self) -> u32 {
        self.state.cycle_count
    }

    pub fn pingpong_count(&self) -> u32 {
        self.state.pingpong_count
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_paused(&self) -> bool {
        self.state.running && self.state.paused
    }

    pub fn is_completed(&self) -> bool {
        self.state.completed
    }

    pub fn phase(&self) -> TweenPhase {
        if self.state.completed {
            TweenPhase::Completed
        } else if !self.state.running {
            TweenPhase::Idle
        } else if self.state.paused {
            TweenPhase::Paused
        } else {
            TweenPhase::Running
        }
    }

    pub fn state(&self) -> &TweenState {
        &self.state
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// The resolved easing curve
    pub fn easing(&self) -> EasingCurve {
        self.curve
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("config", &self.config)
            .field("curve", &self.curve)
            .field("state", &self.state)
            .field("listeners", &self.events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use std::cell::{Cell, RefCell};

    fn tween_with(config: TweenConfig) -> (Rc<ManualClock>, Tween) {
        let clock = Rc::new(ManualClock::new());
        let tween = Tween::with_clock(config, clock.clone()).unwrap();
        (clock, tween)
    }

    #[test]
    fn test_tween_creation() {
        let (_, tween) = tween_with(TweenConfig::new(0.0, 10.0, 1.0));
        assert_eq!(tween.value(), &Value::Float(0.0));
        assert!(tween.is_running());
        assert_eq!(tween.phase(), TweenPhase::Running);
        assert_eq!(tween.easing(), EasingCurve::Linear);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let clock: Rc<dyn Clock> = Rc::new(ManualClock::new());
        assert!(Tween::with_clock(TweenConfig::new(0.0, 1.0, -1.0), clock.clone()).is_err());
        assert!(Tween::with_clock(TweenConfig::new("a", vec![1.0], 1.0), clock).is_err());
    }

    #[test]
    fn test_linear_progress() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 100.0, 2.0));
        clock.advance(0.5);
        assert_eq!(tween.update(), &Value::Float(25.0));
        assert_eq!(tween.progress(), 0.25);
        clock.advance(1.0);
        assert_eq!(tween.update(), &Value::Float(75.0));
    }

    #[test]
    fn test_idle_tween_does_not_move() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_auto_start(false);
        let (clock, mut tween) = tween_with(config);
        assert_eq!(tween.phase(), TweenPhase::Idle);
        clock.advance(0.5);
        assert_eq!(tween.update(), &Value::Float(0.0));

        tween.start();
        clock.advance(0.5);
        assert_eq!(tween.update(), &Value::Float(5.0));
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 10.0, 1.0));
        clock.advance(0.5);
        tween.start();
        assert_eq!(tween.update(), &Value::Float(5.0));
    }

    #[test]
    fn test_completion_fires_once() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0, 100, 1.0));
        let completions = Rc::new(Cell::new(0));
        let seen = completions.clone();
        tween.on(TweenEvent::Complete, move |_| seen.set(seen.get() + 1));

        clock.advance(1.2);
        assert_eq!(tween.update(), &Value::Int(100));
        assert!(tween.is_completed());
        assert!(!tween.is_running());
        assert_eq!(tween.phase(), TweenPhase::Completed);

        clock.advance(1.0);
        tween.update();
        assert_eq!(completions.get(), 1);
        assert_eq!(tween.value(), &Value::Int(100));
    }

    #[test]
    fn test_final_update_repeats_end_value() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 1.0, 1.0));
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = updates.clone();
        tween.on(TweenEvent::Update, move |v| sink.borrow_mut().push(v.clone()));

        clock.advance(0.5);
        tween.update();
        clock.advance(0.5);
        tween.update();
        assert_eq!(
            *updates.borrow(),
            vec![Value::Float(0.5), Value::Float(1.0), Value::Float(1.0)]
        );
    }

    #[test]
    fn test_overshoot_snaps_to_end() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_easing("easeOutElastic");
        let (clock, mut tween) = tween_with(config);
        clock.advance(0.1);
        let early = tween.update().as_f64().unwrap();
        assert!(early > 10.0);
        clock.advance(5.0);
        assert_eq!(tween.update(), &Value::Float(10.0));
    }

    #[test]
    fn test_unknown_easing_runs_linear() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_easing("easeInBounce");
        let (clock, mut tween) = tween_with(config);
        assert_eq!(tween.easing(), EasingCurve::Linear);
        clock.advance(0.3);
        assert_eq!(tween.update(), &Value::Float(3.0));
    }

    #[test]
    fn test_repeat_runs_additional_cycles() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_repeat(2);
        let (clock, mut tween) = tween_with(config);
        let completions = Rc::new(Cell::new(0));
        let seen = completions.clone();
        tween.on(TweenEvent::Complete, move |_| seen.set(seen.get() + 1));

        for run in 1..=2 {
            clock.advance(1.0);
            tween.update();
            assert_eq!(tween.cycle_count(), run);
            assert!(!tween.is_completed());
            assert_eq!(tween.value(), &Value::Float(0.0));
            assert_eq!(completions.get(), 0);
        }

        clock.advance(0.5);
        assert_eq!(tween.update(), &Value::Float(5.0));
        clock.advance(0.5);
        tween.update();
        assert!(tween.is_completed());
        assert_eq!(tween.cycle_count(), 3);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_infinite_repeat_never_completes() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_repeat(-1);
        let (clock, mut tween) = tween_with(config);
        for _ in 0..50 {
            clock.advance(1.0);
            tween.update();
        }
        assert!(!tween.is_completed());
        assert_eq!(tween.cycle_count(), 50);
    }

    #[test]
    fn test_infinite_pingpong_keeps_bouncing() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_pingpong(-1);
        assert!(config.pingpong.is_infinite());
        let (clock, mut tween) = tween_with(config);

        for leg in 1..=20u32 {
            clock.advance(1.0);
            tween.update();
            assert!(!tween.is_completed());
            assert_eq!(tween.cycle_count(), 0);
            if leg % 2 == 1 {
                // Forward boundary snaps to the end value and turns around
                assert_eq!(tween.direction(), Direction::Reverse);
                assert_eq!(tween.value(), &Value::Float(10.0));
            } else {
                assert_eq!(tween.direction(), Direction::Forward);
                assert_eq!(tween.value(), &Value::Float(0.0));
                assert_eq!(tween.pingpong_count(), leg / 2);
            }
        }
        assert_eq!(tween.phase(), TweenPhase::Running);
    }

    #[test]
    fn test_infinite_counters_saturate() {
        let config = TweenConfig::new(0.0, 1.0, 1.0)
            .with_repeat(-1)
            .with_pingpong(-1);
        let (clock, mut tween) = tween_with(config);
        tween.state.pingpong_count = u32::MAX;

        clock.advance(1.0);
        tween.update();
        clock.advance(1.0);
        tween.update();
        assert_eq!(tween.pingpong_count(), u32::MAX);

        let config = TweenConfig::new(0.0, 1.0, 1.0).with_repeat(-1);
        let (clock, mut tween) = tween_with(config);
        tween.state.cycle_count = u32::MAX;
        clock.advance(1.0);
        tween.update();
        assert_eq!(tween.cycle_count(), u32::MAX);
        assert!(!tween.is_completed());
    }

    #[test]
    fn test_pingpong_returns_to_start() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_pingpong(1);
        let (clock, mut tween) = tween_with(config);

        clock.advance(1.0);
        tween.update();
        assert_eq!(tween.direction(), Direction::Reverse);
        assert_eq!(tween.value(), &Value::Float(10.0));
        assert_eq!(tween.cycle_count(), 0);
        assert!(!tween.is_completed());

        clock.advance(0.25);
        assert_eq!(tween.update(), &Value::Float(7.5));

        clock.advance(0.75);
        tween.update();
        assert!(tween.is_completed());
        assert_eq!(tween.value(), &Value::Float(0.0));
        assert_eq!(tween.pingpong_count(), 0);
        assert_eq!(tween.direction(), Direction::Forward);
        assert_eq!(tween.cycle_count(), 1);
    }

    #[test]
    fn test_pingpong_count_of_two() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_pingpong(2);
        let (clock, mut tween) = tween_with(config);
        let directions: Vec<Direction> = (0..3)
            .map(|_| {
                clock.advance(1.0);
                tween.update();
                tween.direction()
            })
            .collect();
        assert_eq!(
            directions,
            vec![Direction::Reverse, Direction::Forward, Direction::Reverse]
        );
        assert_eq!(tween.pingpong_count(), 1);
        assert!(!tween.is_completed());

        clock.advance(1.0);
        tween.update();
        assert!(tween.is_completed());
        assert_eq!(tween.value(), &Value::Float(0.0));
    }

    #[test]
    fn test_pingpong_with_repeat() {
        let config = TweenConfig::new(0, 4, 1.0).with_pingpong(1).with_repeat(1);
        let (clock, mut tween) = tween_with(config);
        for _ in 0..2 {
            clock.advance(1.0);
            tween.update();
        }
        assert_eq!(tween.cycle_count(), 1);
        assert!(!tween.is_completed());
        assert_eq!(tween.direction(), Direction::Forward);

        for _ in 0..2 {
            clock.advance(1.0);
            tween.update();
        }
        assert!(tween.is_completed());
        assert_eq!(tween.value(), &Value::Int(0));
    }

    #[test]
    fn test_pause_excludes_paused_time() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 100.0, 1.0));
        clock.advance(0.25);
        tween.update();

        tween.pause();
        assert!(tween.is_paused());
        assert_eq!(tween.phase(), TweenPhase::Paused);
        clock.advance(4.0);
        assert_eq!(tween.update(), &Value::Float(25.0));

        tween.unpause();
        clock.advance(0.25);
        assert_eq!(tween.update(), &Value::Float(50.0));
        assert!(!tween.is_completed());
    }

    #[test]
    fn test_double_pause_and_stray_unpause_are_noops() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 100.0, 1.0));
        tween.unpause();
        clock.advance(0.125);
        tween.pause();
        clock.advance(0.25);
        tween.pause();
        clock.advance(0.25);
        tween.unpause();
        tween.unpause();
        clock.advance(0.125);
        assert_eq!(tween.update(), &Value::Float(25.0));
    }

    #[test]
    fn test_stop_severs_listeners() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 1.0, 1.0));
        let updates = Rc::new(Cell::new(0));
        let seen = updates.clone();
        tween.on(TweenEvent::Update, move |_| seen.set(seen.get() + 1));

        tween.stop();
        assert_eq!(tween.phase(), TweenPhase::Idle);
        assert_eq!(tween.listener_count(TweenEvent::Update), 0);

        tween.start();
        clock.advance(0.5);
        tween.update();
        assert_eq!(updates.get(), 0);
    }

    #[test]
    fn test_clear_listeners_keeps_running() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 1.0, 1.0));
        tween.on(TweenEvent::Update, |_| {});
        tween.clear_listeners();
        assert!(tween.is_running());
        clock.advance(0.5);
        assert_eq!(tween.update(), &Value::Float(0.5));
    }

    #[test]
    fn test_restart_after_completion() {
        let config = TweenConfig::new(0.0, 10.0, 1.0).with_repeat(1);
        let (clock, mut tween) = tween_with(config);
        clock.advance(2.0);
        tween.update();
        clock.advance(1.0);
        tween.update();
        assert!(tween.is_completed());

        tween.restart();
        assert_eq!(tween.phase(), TweenPhase::Running);
        assert_eq!(tween.cycle_count(), 0);
        assert_eq!(tween.value(), &Value::Float(0.0));
        clock.advance(1.0);
        tween.update();
        assert!(!tween.is_completed());
        clock.advance(1.0);
        tween.update();
        assert!(tween.is_completed());
    }

    #[test]
    fn test_flip_reverses_current_cycle() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 10.0, 1.0));
        tween.flip();
        clock.advance(0.25);
        assert_eq!(tween.update(), &Value::Float(7.5));
    }

    #[test]
    fn test_once_and_off() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 1.0, 1.0));
        let hits = Rc::new(Cell::new(0));
        let once_hits = hits.clone();
        tween.once(TweenEvent::Update, move |_| once_hits.set(once_hits.get() + 1));
        let other_hits = hits.clone();
        let id = tween.on(TweenEvent::Update, move |_| other_hits.set(other_hits.get() + 10));

        clock.advance(0.1);
        tween.update();
        assert!(tween.off(TweenEvent::Update, id));
        clock.advance(0.1);
        tween.update();
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn test_builder_listeners() {
        let clock = Rc::new(ManualClock::new());
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let mut tween = Tween::with_clock(TweenConfig::new(0.0, 1.0, 0.5), clock.clone())
            .unwrap()
            .on_complete(move |v| flag.set(v == &Value::Float(1.0)));
        clock.advance(0.5);
        tween.update();
        assert!(done.get());
    }

    #[test]
    fn test_panicking_listener_does_not_break_bookkeeping() {
        let (clock, mut tween) = tween_with(TweenConfig::new(0.0, 1.0, 1.0).with_repeat(1));
        tween.on(TweenEvent::Update, |_| panic!("broken listener"));
        clock.advance(1.0);
        tween.update();
        assert_eq!(tween.cycle_count(), 1);
        assert!(tween.is_running());
    }

    #[test]
    fn test_event_names() {
        assert_eq!("update".parse::<TweenEvent>().unwrap(), TweenEvent::Update);
        assert_eq!("complete".parse::<TweenEvent>().unwrap(), TweenEvent::Complete);
        assert!(matches!(
            "finish".parse::<TweenEvent>(),
            Err(TweenError::UnknownEvent(_))
        ));
        assert_eq!(TweenEvent::Complete.to_string(), "complete");
    }
}
