//! Local Actor Controller
//!
//! Owns the local player's moment-to-moment state between server
//! confirmations. Input becomes immediate (optimistic) state mutation for
//! responsiveness, while the orchestrator turns the controller's outputs
//! into outbound intents: movement is broadcast on vector-change-or-interval
//! to bound bandwidth, and firing is rate-limited locally so intent spam
//! never leaves the client even if the server would tolerate it.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::core::vec2::Vec2;
use crate::game::entity::{ActorState, Projectile, ProjectileOwner};

/// Result of optimistic damage application to the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The hit was absorbed; health remains above zero.
    Survived {
        /// Health left after the hit.
        remaining: i32,
    },
    /// The hit was fatal; health clamped to zero.
    Fatal,
}

/// The local player between spawn and death.
#[derive(Debug)]
pub struct LocalPlayer {
    /// Optimistic actor state (position, motion, health).
    pub state: ActorState,
    last_sent_motion: Option<Vec2>,
    last_motion_sent_at: Option<Instant>,
    last_fired_at: Option<Instant>,
}

impl LocalPlayer {
    /// Spawn a fresh full-health local player at `position`.
    pub fn spawn(character: &str, handle: &str, position: Vec2, max_health: i32) -> Self {
        Self {
            state: ActorState::spawn(character, handle, position, max_health),
            last_sent_motion: None,
            last_motion_sent_at: None,
            last_fired_at: None,
        }
    }

    /// Store the per-frame motion vector. Pure state update; the network
    /// effect happens in [`motion_broadcast`](Self::motion_broadcast).
    pub fn set_motion(&mut self, motion: Vec2) {
        self.state.motion = motion;
    }

    /// Advance the optimistic position by the current motion. Collision
    /// correction, if any, comes back through [`set_position`](Self::set_position).
    pub fn integrate(&mut self, dt: Duration, speed: f32) {
        if self.state.motion.is_zero() {
            return;
        }
        self.state.position =
            self.state.position + self.state.motion.normalize() * (speed * dt.as_secs_f32());
    }

    /// Overwrite the position (physics collaborator correction, wall slides).
    pub fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
    }

    /// Decide whether this frame's motion should go to the server: the
    /// vector changed since the last send, or the resend interval elapsed
    /// while moving. Returns the payload to send and records the send.
    pub fn motion_broadcast(&mut self, now: Instant, resend: Duration) -> Option<(Vec2, Vec2)> {
        let motion = self.state.motion;
        let changed = self.last_sent_motion != Some(motion);
        let stale = !motion.is_zero()
            && self
                .last_motion_sent_at
                .map_or(true, |at| now.saturating_duration_since(at) >= resend);

        if !changed && !stale {
            return None;
        }
        self.last_sent_motion = Some(motion);
        self.last_motion_sent_at = Some(now);
        Some((self.state.position, motion))
    }

    /// Attempt to fire toward `target`. Yields the optimistic projectile
    /// when the cooldown has elapsed; a cooldown violation yields nothing
    /// and must emit nothing upstream.
    pub fn try_fire(
        &mut self,
        target: Vec2,
        now: Instant,
        cooldown: Duration,
        damage: i32,
    ) -> Option<Projectile> {
        if let Some(at) = self.last_fired_at {
            if now.saturating_duration_since(at) < cooldown {
                trace!("fire rejected: cooldown");
                return None;
            }
        }
        self.last_fired_at = Some(now);
        Some(Projectile::new(
            self.state.position,
            target,
            ProjectileOwner::Local,
            damage,
        ))
    }

    /// Apply optimistic damage from an opponent projectile.
    pub fn take_hit(&mut self, damage: i32) -> DamageOutcome {
        if self.state.apply_damage(damage) {
            DamageOutcome::Fatal
        } else {
            DamageOutcome::Survived {
                remaining: self.state.health,
            }
        }
    }
}
