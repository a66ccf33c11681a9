//! Protocol messages for client-server communication
//!
//! JSON wire format, internally tagged on `"type"` with camelCase names.
//! Inbound events are the server's authoritative view; outbound intents
//! express local actions for the server to validate and broadcast.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::game::entity::EntityId;

// =============================================================================
// SERVER -> CLIENT
// =============================================================================

/// One entry of the `existingPlayers` seed sent right after joining.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSnapshot {
    /// Server-assigned id.
    pub id: EntityId,
    /// Character type the player joined with.
    pub character: String,
    /// Display name.
    pub handle: String,
    /// Spawn-time X coordinate.
    pub x: f32,
    /// Spawn-time Y coordinate.
    pub y: f32,
}

/// One entry of a leaderboard broadcast.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Player the entry belongs to.
    pub id: EntityId,
    /// Best rank that player has reached.
    pub highest_rank: u32,
}

/// Authoritative events delivered by the server, in arrival order.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// Connection handshake completed; join has been accepted.
    ServerConnected,
    /// Players already in the arena when we joined.
    ExistingPlayers {
        /// Snapshot per player, each treated as a join.
        players: Vec<PlayerSnapshot>,
    },
    /// The server placed the local player.
    Spawn {
        /// Where to spawn.
        position: Vec2,
    },
    /// A remote player entered the arena.
    PlayerJoined {
        /// Server-assigned id.
        id: EntityId,
        /// Character type.
        character: String,
        /// Display name.
        handle: String,
        /// Entry position.
        position: Vec2,
    },
    /// A remote player left voluntarily.
    PlayerLeft {
        /// Who left.
        id: EntityId,
    },
    /// A remote player moved.
    PlayerMoved {
        /// Who moved.
        id: EntityId,
        /// New authoritative position.
        position: Vec2,
        /// Current motion direction.
        vector: Vec2,
    },
    /// A remote player fired.
    PlayerFired {
        /// Who fired.
        id: EntityId,
        /// Muzzle position (also their authoritative position).
        from: Vec2,
        /// Aim point.
        to: Vec2,
    },
    /// A remote player took damage.
    PlayerHit {
        /// Who was hit.
        id: EntityId,
        /// Their authoritative position.
        position: Vec2,
        /// Damage dealt.
        damage: i32,
        /// Who landed the hit.
        hit_by_id: EntityId,
    },
    /// A remote player died.
    PlayerDied {
        /// Who died.
        id: EntityId,
        /// Where they died.
        position: Vec2,
        /// Who killed them.
        killed_by_id: EntityId,
    },
    /// A remote player's connection dropped.
    PlayerDisconnected {
        /// Who dropped.
        id: EntityId,
    },
    /// Periodic leaderboard broadcast.
    UpdateLeaderboard {
        /// Current standings.
        leaderboard: Vec<LeaderboardEntry>,
    },
}

// =============================================================================
// CLIENT -> SERVER
// =============================================================================

/// Local actions sent to the server for validation and broadcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientIntent {
    /// Enter the arena with the chosen character and name.
    JoinGame {
        /// Character type.
        character: String,
        /// Display name.
        handle: String,
    },
    /// Movement update (debounced send-on-change-or-interval).
    Move {
        /// Optimistic local position.
        position: Vec2,
        /// Current motion direction.
        vector: Vec2,
    },
    /// The local player fired.
    Fire {
        /// Muzzle position.
        from: Vec2,
        /// Aim point.
        to: Vec2,
    },
    /// The local player took a non-fatal hit.
    Hit {
        /// Local position when hit.
        position: Vec2,
        /// Damage taken.
        damage: i32,
        /// The opponent whose projectile landed.
        hit_by_id: EntityId,
    },
    /// The local player died.
    Die {
        /// Local position at death.
        position: Vec2,
        /// The opponent held responsible.
        killer_id: EntityId,
    },
    /// Request to re-enter the arena after death.
    Respawn,
    /// Voluntary exit.
    LeaveGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_tags() {
        let join = ClientIntent::JoinGame {
            character: "knight".into(),
            handle: "Ann".into(),
        };
        assert_eq!(
            serde_json::to_string(&join).unwrap(),
            r#"{"type":"joinGame","character":"knight","handle":"Ann"}"#
        );

        assert_eq!(
            serde_json::to_string(&ClientIntent::Respawn).unwrap(),
            r#"{"type":"respawn"}"#
        );
        assert_eq!(
            serde_json::to_string(&ClientIntent::LeaveGame).unwrap(),
            r#"{"type":"leaveGame"}"#
        );
    }

    #[test]
    fn test_intent_camel_case_fields() {
        let die = ClientIntent::Die {
            position: Vec2::new(1.0, 2.0),
            killer_id: EntityId::from("p7"),
        };
        let json = serde_json::to_string(&die).unwrap();
        assert!(json.contains(r#""type":"die""#));
        assert!(json.contains(r#""killerId":"p7""#));

        let hit = ClientIntent::Hit {
            position: Vec2::ZERO,
            damage: 10,
            hit_by_id: EntityId::from("p7"),
        };
        assert!(serde_json::to_string(&hit).unwrap().contains(r#""hitById":"p7""#));
    }

    #[test]
    fn test_event_round_trip_from_wire() {
        let json = r#"{
            "type": "playerJoined",
            "id": "p1",
            "character": "knight",
            "handle": "Ann",
            "position": {"x": 10.0, "y": 20.0}
        }"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        match event {
            ServerEvent::PlayerJoined {
                id,
                character,
                handle,
                position,
            } => {
                assert_eq!(id, EntityId::from("p1"));
                assert_eq!(character, "knight");
                assert_eq!(handle, "Ann");
                assert_eq!(position, Vec2::new(10.0, 20.0));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_event_hit_by_id_parsing() {
        let json = r#"{
            "type": "playerHit",
            "id": "p1",
            "position": {"x": 0.0, "y": 0.0},
            "damage": 25,
            "hitById": "me"
        }"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        match event {
            ServerEvent::PlayerHit {
                damage, hit_by_id, ..
            } => {
                assert_eq!(damage, 25);
                assert_eq!(hit_by_id, EntityId::from("me"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_leaderboard_snapshot_parsing() {
        let json = r#"{
            "type": "updateLeaderboard",
            "leaderboard": [
                {"id": "p1", "highestRank": 1},
                {"id": "me", "highestRank": 4}
            ]
        }"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        match event {
            ServerEvent::UpdateLeaderboard { leaderboard } => {
                assert_eq!(leaderboard.len(), 2);
                assert_eq!(leaderboard[1].id, EntityId::from("me"));
                assert_eq!(leaderboard[1].highest_rank, 4);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_existing_players_flat_coordinates() {
        let json = r#"{
            "type": "existingPlayers",
            "players": [
                {"id": "p1", "character": "knight", "handle": "Ann", "x": 10.0, "y": 20.0}
            ]
        }"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        match event {
            ServerEvent::ExistingPlayers { players } => {
                assert_eq!(players.len(), 1);
                assert_eq!(players[0].x, 10.0);
                assert_eq!(players[0].y, 20.0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
