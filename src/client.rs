//! Game Client Core
//!
//! The synchronization core tying the pieces together. One `GameClient` is
//! one session: it owns the entity registry, the session state machine, the
//! local actor controller and the local player's stats, applies inbound
//! authoritative events, and queues outbound intents for the transport.
//!
//! Authority split: the local player is mutated optimistically (input and
//! opponent-projectile impacts take effect immediately, the server is
//! informed after the fact); remote actors are mutated only from confirmed
//! server events. The renderer reads everything here each frame and writes
//! nothing except through the controller entry points.
//!
//! All handlers are synchronous state transitions invoked from a single
//! logical thread; events must be applied in arrival order. Tolerated
//! failures (unknown ids, out-of-state events) degrade to traced no-ops.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::core::vec2::Vec2;
use crate::game::entity::{
    ActorState, EntityId, PlayerStats, Projectile, ProjectileOwner, RemoteEntity,
};
use crate::game::leaderboard;
use crate::game::local::{DamageOutcome, LocalPlayer};
use crate::game::registry::EntityRegistry;
use crate::game::session::{Session, SessionState};
use crate::network::protocol::{ClientIntent, LeaderboardEntry, PlayerSnapshot, ServerEvent};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunables and identity for one session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Character type to join with.
    pub character: String,
    /// Display name to join with.
    pub handle: String,
    /// Health ceiling for every actor.
    pub max_health: i32,
    /// Damage carried by each projectile.
    pub projectile_damage: i32,
    /// Local movement speed (units per second).
    pub move_speed: f32,
    /// Minimum gap between local shots.
    pub fire_cooldown: Duration,
    /// Resend interval for an unchanged, non-idle motion vector.
    pub motion_resend: Duration,
    /// Cosmetic blend duration for remote position updates.
    pub interp_duration: Duration,
}

impl ClientConfig {
    /// Config with default tunables for the given identity.
    pub fn new(character: &str, handle: &str) -> Self {
        Self {
            character: character.to_owned(),
            handle: handle.to_owned(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            character: "knight".to_owned(),
            handle: "Player".to_owned(),
            max_health: 100,
            projectile_damage: 10,
            move_speed: 200.0,
            fire_cooldown: Duration::from_millis(400),
            motion_resend: Duration::from_millis(100),
            interp_duration: Duration::from_millis(50),
        }
    }
}

/// Per-frame input handed to [`GameClient::tick`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Movement direction for this frame; zero = idle.
    pub motion: Vec2,
    /// Aim point, when the player pressed fire this frame.
    pub fire: Option<Vec2>,
}

// =============================================================================
// GAME CLIENT
// =============================================================================

/// One connection-scoped client session.
pub struct GameClient {
    config: ClientConfig,
    session: Session,
    registry: EntityRegistry,
    local: Option<LocalPlayer>,
    stats: PlayerStats,
    outbox: Vec<ClientIntent>,
    spawned_projectiles: Vec<Projectile>,
}

impl GameClient {
    /// Create a fresh, disconnected client.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            registry: EntityRegistry::new(),
            local: None,
            stats: PlayerStats::default(),
            outbox: Vec::new(),
            spawned_projectiles: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Connection lifecycle
    // -------------------------------------------------------------------------

    /// Transport confirmed connection and assigned us `client_id`.
    /// Emits the join intent.
    pub fn handle_connected(&mut self, client_id: EntityId) {
        if self.session.connected(client_id) {
            self.outbox.push(ClientIntent::JoinGame {
                character: self.config.character.clone(),
                handle: self.config.handle.clone(),
            });
        }
    }

    /// Transport lost. Pending intents are dropped, all entity state is
    /// cleared, the session is forced to Disconnected. No resume: a
    /// reconnect builds a fresh `GameClient`.
    pub fn handle_disconnected(&mut self) {
        info!("transport lost, tearing session down");
        self.outbox.clear();
        self.spawned_projectiles.clear();
        self.registry.clear();
        self.local = None;
        self.session.disconnected();
    }

    // -------------------------------------------------------------------------
    // Inbound events (Remote Actor Reconciler)
    // -------------------------------------------------------------------------

    /// Apply one authoritative server event. Events must be applied in
    /// arrival order.
    pub fn handle_event(&mut self, event: ServerEvent, now: Instant) {
        match event {
            ServerEvent::ServerConnected => {
                self.session.join_acknowledged();
            }
            ServerEvent::ExistingPlayers { players } => self.on_existing_players(players),
            ServerEvent::Spawn { position } => self.on_spawn(position),
            ServerEvent::PlayerJoined {
                id,
                character,
                handle,
                position,
            } => self.on_player_joined(id, &character, &handle, position),
            ServerEvent::PlayerLeft { id } => self.on_player_removed(&id, "left"),
            ServerEvent::PlayerMoved {
                id,
                position,
                vector,
            } => self.on_player_moved(&id, position, vector, now),
            ServerEvent::PlayerFired { id, from, to } => self.on_player_fired(&id, from, to, now),
            ServerEvent::PlayerHit {
                id,
                position,
                damage,
                hit_by_id,
            } => self.on_player_hit(&id, position, damage, &hit_by_id, now),
            ServerEvent::PlayerDied {
                id,
                position,
                killed_by_id,
            } => self.on_player_died(&id, position, &killed_by_id),
            ServerEvent::PlayerDisconnected { id } => self.on_player_removed(&id, "disconnected"),
            ServerEvent::UpdateLeaderboard { leaderboard } => self.on_leaderboard(&leaderboard),
        }
    }

    fn on_existing_players(&mut self, players: Vec<PlayerSnapshot>) {
        for p in players {
            let position = Vec2::new(p.x, p.y);
            self.on_player_joined(p.id, &p.character, &p.handle, position);
        }
    }

    fn on_spawn(&mut self, position: Vec2) {
        if !self.session.spawned() {
            return;
        }
        info!(%position, "local player spawned");
        self.local = Some(LocalPlayer::spawn(
            &self.config.character,
            &self.config.handle,
            position,
            self.config.max_health,
        ));
    }

    fn on_player_joined(&mut self, id: EntityId, character: &str, handle: &str, position: Vec2) {
        if self.registry.get(&id).is_some() {
            // Duplicate or late join after a missed leave. Overwrite wins.
            debug!(%id, "join for live id, overwriting");
        }
        let state = ActorState::spawn(character, handle, position, self.config.max_health);
        self.registry.upsert(id.clone(), RemoteEntity::new(id, state));
    }

    fn on_player_moved(&mut self, id: &EntityId, position: Vec2, vector: Vec2, now: Instant) {
        let interp = self.config.interp_duration;
        match self.registry.get_mut(id) {
            Some(entity) => {
                entity.move_to(position, now, interp);
                entity.state.motion = vector;
            }
            None => trace!(%id, "move for unknown id"),
        }
    }

    fn on_player_fired(&mut self, id: &EntityId, from: Vec2, to: Vec2, now: Instant) {
        let interp = self.config.interp_duration;
        let Some(entity) = self.registry.get_mut(id) else {
            trace!(%id, "fire for unknown id");
            return;
        };
        entity.move_to(from, now, interp);
        self.spawned_projectiles.push(Projectile::new(
            from,
            to,
            ProjectileOwner::Remote(id.clone()),
            self.config.projectile_damage,
        ));
    }

    fn on_player_hit(
        &mut self,
        id: &EntityId,
        position: Vec2,
        damage: i32,
        hit_by_id: &EntityId,
        now: Instant,
    ) {
        // Bookkeeping side effect only: no health or position change to the
        // local player from here.
        if self.session.client_id() == Some(hit_by_id) {
            self.stats.hits_inflicted += 1;
        }
        let interp = self.config.interp_duration;
        let died = match self.registry.get_mut(id) {
            Some(entity) => {
                entity.move_to(position, now, interp);
                entity.state.apply_damage(damage)
            }
            None => {
                trace!(%id, "hit for unknown id");
                return;
            }
        };
        if died {
            self.on_player_died(id, position, hit_by_id);
        }
    }

    fn on_player_died(&mut self, id: &EntityId, position: Vec2, killed_by_id: &EntityId) {
        if self.session.client_id() == Some(killed_by_id) {
            self.stats.kills += 1;
        }
        if self.registry.remove(id).is_some() {
            debug!(%id, %position, "remote player died");
        } else {
            trace!(%id, "death for unknown id");
        }
    }

    fn on_player_removed(&mut self, id: &EntityId, reason: &str) {
        if self.registry.remove(id).is_some() {
            debug!(%id, reason, "remote player removed");
        } else {
            trace!(%id, reason, "removal for unknown id");
        }
    }

    fn on_leaderboard(&mut self, snapshot: &[LeaderboardEntry]) {
        let Some(client_id) = self.session.client_id() else {
            return;
        };
        if let Some(rank) = leaderboard::local_rank(snapshot, client_id) {
            self.stats.highest_ranking = Some(rank);
            self.session.set_rank(rank);
        }
    }

    // -------------------------------------------------------------------------
    // Local actions (Local Actor Controller + Combat Resolver)
    // -------------------------------------------------------------------------

    /// Per-frame entry point for the presentation layer. Applies this
    /// frame's input optimistically and queues debounced move intents and,
    /// on a fire request, a fire intent plus the optimistic projectile.
    pub fn tick(&mut self, input: &FrameInput, now: Instant, dt: Duration) {
        if self.session.state() != SessionState::Alive {
            return;
        }
        let Some(local) = self.local.as_mut() else {
            return;
        };

        local.set_motion(input.motion);
        local.integrate(dt, self.config.move_speed);
        if let Some((position, vector)) = local.motion_broadcast(now, self.config.motion_resend) {
            self.outbox.push(ClientIntent::Move { position, vector });
        }

        if let Some(target) = input.fire {
            if let Some(projectile) = local.try_fire(
                target,
                now,
                self.config.fire_cooldown,
                self.config.projectile_damage,
            ) {
                self.outbox.push(ClientIntent::Fire {
                    from: projectile.origin,
                    to: projectile.target,
                });
                self.spawned_projectiles.push(projectile);
            }
        }
    }

    /// An opponent projectile struck the local player (physics collaborator
    /// signal). Decrements health immediately and informs the server with a
    /// `hit` or, on a fatal strike, a `die` intent; a fatal strike also
    /// moves the session to Dead so the presentation layer can offer
    /// respawn-or-leave. No-op unless the local player is alive.
    pub fn on_local_damage(&mut self, damage: i32, attacker: EntityId) -> Option<DamageOutcome> {
        if self.session.state() != SessionState::Alive {
            trace!("damage while not alive, ignoring");
            return None;
        }
        let local = self.local.as_mut()?;
        let position = local.state.position;
        let outcome = local.take_hit(damage);
        match outcome {
            DamageOutcome::Survived { .. } => {
                self.outbox.push(ClientIntent::Hit {
                    position,
                    damage,
                    hit_by_id: attacker,
                });
            }
            DamageOutcome::Fatal => {
                info!(%attacker, "local player died");
                self.session.died();
                self.local = None;
                self.outbox.push(ClientIntent::Die {
                    position,
                    killer_id: attacker,
                });
            }
        }
        Some(outcome)
    }

    /// Player chose to respawn after death.
    pub fn request_respawn(&mut self) {
        if self.session.respawn_requested() {
            self.outbox.push(ClientIntent::Respawn);
        }
    }

    /// Player chose to quit, from gameplay or from the death prompt.
    pub fn request_quit(&mut self) {
        if self.session.leaving() {
            self.local = None;
            self.outbox.push(ClientIntent::LeaveGame);
        }
    }

    // -------------------------------------------------------------------------
    // Read accessors (for the presentation layer)
    // -------------------------------------------------------------------------

    /// Session state, client id and rank.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// All known remote actors.
    pub fn entities(&self) -> &EntityRegistry {
        &self.registry
    }

    /// The local player, while alive.
    pub fn local_player(&self) -> Option<&LocalPlayer> {
        self.local.as_ref()
    }

    /// Session-scoped local player stats.
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Take the intents queued since the last drain, for the transport.
    pub fn drain_outbox(&mut self) -> Vec<ClientIntent> {
        std::mem::take(&mut self.outbox)
    }

    /// Take projectiles spawned since the last drain (local and remote),
    /// for the renderer/physics collaborator.
    pub fn take_spawned_projectiles(&mut self) -> Vec<Projectile> {
        std::mem::take(&mut self.spawned_projectiles)
    }
}

// =============================================================================
// TESTS
// =============================================================================
