//! Cosmetic Position Interpolation
//!
//! Short linear blends between the previously displayed position and the
//! latest authoritative one, so remote actors glide instead of teleporting.
//! Interpolation is never the source of truth: the logical position is
//! always the last server value, and a newer authoritative update replaces
//! any in-flight blend outright (latest wins, stale blends are discarded,
//! never queued).

use std::time::{Duration, Instant};

use crate::core::vec2::Vec2;

/// An in-flight visual blend from one displayed position to another.
#[derive(Debug, Clone, Copy)]
pub struct Interpolation {
    from: Vec2,
    to: Vec2,
    started: Instant,
    duration: Duration,
}

impl Interpolation {
    /// Start a blend from `from` toward `to`.
    pub fn new(from: Vec2, to: Vec2, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Target position of the blend (the authoritative value).
    pub fn target(&self) -> Vec2 {
        self.to
    }

    /// Sample the displayed position at `now`. Clamps at the endpoints.
    pub fn sample(&self, now: Instant) -> Vec2 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, t)
    }

    /// True once the blend has reached its target.
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}
