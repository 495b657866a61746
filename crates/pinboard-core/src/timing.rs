//! Rate limiting for high-frequency handlers (pointer moves, resizes).
//!
//! Both gates are polled rather than callback-driven: the event loop asks
//! whether to run the expensive work now. The `*_at` variants take the
//! current time explicitly so tests never sleep.

use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

/// Lets work through at most once per interval.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Throttle limited to roughly `fps` runs per second.
    pub fn per_second(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    /// Whether work may run at `now`. Marks the run when it returns true.
    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }

    /// [`Throttle::ready_at`] using the platform clock.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    /// Forget the last run so the next call goes through.
    pub fn reset(&mut self) {
        self.last_run = None;
    }
}

/// Fires once after activity has been quiet for the delay.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    last_trigger: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_trigger: None,
        }
    }

    /// Record activity at `now`, restarting the quiet period.
    pub fn trigger_at(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    /// [`Debounce::trigger_at`] using the platform clock.
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// True exactly once when the quiet period has elapsed since the last trigger.
    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(last) if now.saturating_duration_since(last) >= self.delay => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    /// [`Debounce::fire_at`] using the platform clock.
    pub fn fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    /// Whether a trigger is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Drop any pending trigger.
    pub fn cancel(&mut self) {
        self.last_trigger = None;
    }
}
