//! Scalar tween driven by frame delta time

use std::fmt;
use super::easing::{Easing, ease};

type CompleteCallback = Box<dyn FnOnce()>;

/// Interpolates a value from `from` to `to` over `duration` seconds
pub struct Tween {
    /// Current eased value
    value: f64,
    from: f64,
    offset: f64,
    duration: f64,
    /// Remaining delay before time starts advancing
    delay: f64,
    /// Elapsed time, clamped to `[0, duration]`
    elapsed: f64,
    complete: bool,
    easing: Easing,
    on_complete: Option<CompleteCallback>,
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("value", &self.value)
            .field("from", &self.from)
            .field("to", &self.to())
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("elapsed", &self.elapsed)
            .field("complete", &self.complete)
            .field("easing", &self.easing)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl Tween {
    /// Linear tween with no delay. A tween whose duration is zero, negative or
    /// non-finite starts out complete.
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        let mut tween = Self {
            value: from,
            from,
            offset: 0.0,
            duration: 0.0,
            delay: 0.0,
            elapsed: 0.0,
            complete: false,
            easing: Easing::Linear,
            on_complete: None,
        };
        tween.reset(from, to, duration);
        tween
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self.value = self.value_at(0.0);
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Callback fired once when the tween reaches its duration
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Re-arm the tween with new endpoints; keeps easing, drops delay and callback
    pub fn reset(&mut self, from: f64, to: f64, duration: f64) {
        self.value = from;
        self.from = from;
        self.offset = to - from;
        self.duration = duration;
        self.delay = 0.0;
        self.elapsed = 0.0;
        self.complete = !(duration > 0.0 && duration.is_finite());
        self.on_complete = None;
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f64) {
        if self.complete || !dt.is_finite() {
            return;
        }
        if self.delay > 0.0 {
            self.delay -= dt;
            return;
        }

        self.elapsed = (self.elapsed + dt).clamp(0.0, self.duration);
        if self.elapsed == self.duration {
            self.complete = true;
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }
        self.value = self.value_at(self.elapsed / self.duration);
    }

    /// Eased value at normalized time `t` without touching the tween state
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + self.offset * ease(t, self.easing)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.from + self.offset
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_delaying(&self) -> bool {
        self.delay > 0.0
    }
}
