//! Actor and Projectile State
//!
//! Shared state types for the local player and remote actors. Per the
//! authority split, the two sides are distinct owner types over a common
//! read view (`ActorState`): remote actors live in the registry and are
//! mutated only from confirmed server events; the local player is mutated
//! optimistically by its controller and never enters the registry.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::vec2::Vec2;
use crate::game::interp::Interpolation;

// =============================================================================
// ENTITY ID
// =============================================================================

/// Opaque server-assigned actor identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Borrow the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ACTOR STATE
// =============================================================================

/// Read view shared by the local player and remote actors.
#[derive(Clone, Debug)]
pub struct ActorState {
    /// Last authoritative (or, for the local player, optimistic) position.
    pub position: Vec2,
    /// Current normalized movement direction; zero = idle.
    pub motion: Vec2,
    /// Current health. 0 means dead.
    pub health: i32,
    /// Health ceiling for this actor.
    pub max_health: i32,
    /// Character type chosen at join. Immutable for the actor's lifetime.
    pub character: String,
    /// Display name. Immutable for the actor's lifetime.
    pub handle: String,
}

impl ActorState {
    /// Create a full-health actor at `position`.
    pub fn spawn(character: &str, handle: &str, position: Vec2, max_health: i32) -> Self {
        Self {
            position,
            motion: Vec2::ZERO,
            health: max_health,
            max_health,
            character: character.to_owned(),
            handle: handle.to_owned(),
        }
    }

    /// Apply damage, clamping health at zero. Returns true if this killed
    /// the actor.
    pub fn apply_damage(&mut self, damage: i32) -> bool {
        self.health = (self.health - damage).max(0);
        self.health == 0
    }

    /// True once health has reached zero.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

// =============================================================================
// REMOTE ENTITY
// =============================================================================

/// A remote actor as known from server events.
///
/// Carries at most one in-flight cosmetic interpolation; every authoritative
/// position update replaces it.
#[derive(Debug, Clone)]
pub struct RemoteEntity {
    /// Server-assigned id.
    pub id: EntityId,
    /// Logical state (always the latest authoritative values).
    pub state: ActorState,
    interp: Option<Interpolation>,
}

impl RemoteEntity {
    /// Create a remote actor from a join event.
    pub fn new(id: EntityId, state: ActorState) -> Self {
        Self {
            id,
            state,
            interp: None,
        }
    }

    /// Move the logical position to `to`, blending the displayed position
    /// over `duration`. Any in-flight blend is discarded.
    pub fn move_to(&mut self, to: Vec2, now: Instant, duration: Duration) {
        let from = self.display_position(now);
        self.state.position = to;
        self.interp = Some(Interpolation::new(from, to, now, duration));
    }

    /// Position the renderer should draw this frame.
    pub fn display_position(&self, now: Instant) -> Vec2 {
        match &self.interp {
            Some(interp) => interp.sample(now),
            None => self.state.position,
        }
    }
}

// =============================================================================
// PLAYER STATS
// =============================================================================

/// Local player bookkeeping, scoped to the session.
///
/// Accumulates across respawns; resets only when a new session (a new
/// client) is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Confirmed kills attributed to the local player.
    pub kills: u32,
    /// Hits the local player landed on others.
    pub hits_inflicted: u32,
    /// Best leaderboard rank seen for the local player.
    pub highest_ranking: Option<u32>,
}

// =============================================================================
// PROJECTILE
// =============================================================================

/// Who fired a projectile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectileOwner {
    /// Fired by the local player.
    Local,
    /// Fired by the remote actor with this id.
    Remote(EntityId),
}

/// An ephemeral shot, created on fire and handed to the renderer/physics
/// collaborator. This core only supplies owner and damage; collision and
/// travel-limit destruction are the collaborator's concern.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Locally-generated id so the renderer can track the sprite.
    pub id: Uuid,
    /// Muzzle position.
    pub origin: Vec2,
    /// Aim point.
    pub target: Vec2,
    /// Firing actor.
    pub owner: ProjectileOwner,
    /// Damage applied on impact.
    pub damage: i32,
}

impl Projectile {
    /// Create a projectile for `owner` from `origin` toward `target`.
    pub fn new(origin: Vec2, target: Vec2, owner: ProjectileOwner, damage: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            target,
            owner,
            damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_apply_damage_clamps_at_zero() {
        let mut state = ActorState::spawn("knight", "Ann", Vec2::ZERO, 100);
        assert!(!state.apply_damage(60));
        assert_eq!(state.health, 40);
        assert!(state.apply_damage(60));
        assert_eq!(state.health, 0);
        assert!(state.is_dead());
    }

    #[test]
    fn test_remote_move_updates_logical_position_immediately() {
        let now = Instant::now();
        let mut entity = RemoteEntity::new(
            EntityId::from("p1"),
            ActorState::spawn("knight", "Ann", Vec2::new(10.0, 20.0), 100),
        );
        entity.move_to(Vec2::new(15.0, 20.0), now, Duration::from_millis(50));

        // Logical position is authoritative at once; display lags behind.
        assert_eq!(entity.state.position, Vec2::new(15.0, 20.0));
        assert_eq!(entity.display_position(now), Vec2::new(10.0, 20.0));
        assert_eq!(
            entity.display_position(now + Duration::from_millis(50)),
            Vec2::new(15.0, 20.0)
        );
    }

    #[test]
    fn test_remote_move_replaces_stale_blend() {
        let now = Instant::now();
        let mut entity = RemoteEntity::new(
            EntityId::from("p1"),
            ActorState::spawn("knight", "Ann", Vec2::ZERO, 100),
        );
        entity.move_to(Vec2::new(100.0, 0.0), now, Duration::from_millis(50));

        // A newer authoritative update lands mid-blend.
        let mid = now + Duration::from_millis(25);
        entity.move_to(Vec2::new(0.0, 50.0), mid, Duration::from_millis(50));

        assert_eq!(entity.state.position, Vec2::new(0.0, 50.0));
        // New blend starts from where the actor was displayed, not from the
        // discarded blend's target.
        let display = entity.display_position(mid);
        assert!((display.x - 50.0).abs() < 1.0);
        assert_eq!(
            entity.display_position(mid + Duration::from_millis(50)),
            Vec2::new(0.0, 50.0)
        );
    }

    #[test]
    fn test_entity_id_wire_shape() {
        let id = EntityId::from("p1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""p1""#);
    }
}
