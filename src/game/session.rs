//! Session State Machine
//!
//! Governs the local player's connection-scoped lifecycle. Transitions are
//! guarded: an input arriving while the session is in a state that does not
//! accept it is ignored (traced, never an error) to tolerate reordered or
//! late delivery at the transport boundary.

use tracing::{debug, info};

use crate::game::entity::EntityId;

/// Local player lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No transport connection.
    Disconnected,
    /// Transport connected, join intent sent.
    Joining,
    /// Join acknowledged; waiting for the server to place us.
    AwaitingSpawn,
    /// Local player is in the arena.
    Alive,
    /// Local player died; respawn-or-leave pending.
    Dead,
    /// Voluntary exit under way. Terminal.
    LeavingGame,
}

/// Connection-scoped state for the local player.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    client_id: Option<EntityId>,
    rank: Option<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a fresh, disconnected session.
    pub fn new() -> Self {
        Self {
            state: SessionState::Disconnected,
            client_id: None,
            rank: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Locally-assigned id, once the transport has confirmed connection.
    pub fn client_id(&self) -> Option<&EntityId> {
        self.client_id.as_ref()
    }

    /// Last known leaderboard position for the local player.
    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    /// Record the latest leaderboard position.
    pub fn set_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }

    /// Transport confirmed connection: Disconnected -> Joining.
    pub fn connected(&mut self, client_id: EntityId) -> bool {
        if self.state != SessionState::Disconnected {
            return self.rejected("connected");
        }
        self.client_id = Some(client_id);
        self.transition(SessionState::Joining)
    }

    /// Server acknowledged the join: Joining -> AwaitingSpawn.
    pub fn join_acknowledged(&mut self) -> bool {
        if self.state != SessionState::Joining {
            return self.rejected("join_acknowledged");
        }
        self.transition(SessionState::AwaitingSpawn)
    }

    /// Server placed the local player: AwaitingSpawn -> Alive.
    pub fn spawned(&mut self) -> bool {
        if self.state != SessionState::AwaitingSpawn {
            return self.rejected("spawned");
        }
        self.transition(SessionState::Alive)
    }

    /// Local death resolved: Alive -> Dead.
    pub fn died(&mut self) -> bool {
        if self.state != SessionState::Alive {
            return self.rejected("died");
        }
        self.transition(SessionState::Dead)
    }

    /// Player chose to respawn: Dead -> AwaitingSpawn.
    pub fn respawn_requested(&mut self) -> bool {
        if self.state != SessionState::Dead {
            return self.rejected("respawn_requested");
        }
        self.transition(SessionState::AwaitingSpawn)
    }

    /// Player chose to quit: Alive | Dead -> LeavingGame.
    pub fn leaving(&mut self) -> bool {
        if !matches!(self.state, SessionState::Alive | SessionState::Dead) {
            return self.rejected("leaving");
        }
        self.transition(SessionState::LeavingGame)
    }

    /// Transport lost: force Disconnected from any state. A reconnect
    /// builds a fresh session; there is no resume.
    pub fn disconnected(&mut self) {
        self.client_id = None;
        self.rank = None;
        self.transition(SessionState::Disconnected);
    }

    fn transition(&mut self, to: SessionState) -> bool {
        info!(from = ?self.state, to = ?to, "session transition");
        self.state = to;
        true
    }

    fn rejected(&self, input: &str) -> bool {
        debug!(state = ?self.state, input, "ignoring out-of-state input");
        false
    }
}
