//! Leaderboard Tracker
//!
//! Derives the local player's rank from the server's periodic broadcast
//! snapshots. Remote players' ranks are not tracked client-side.

use crate::game::entity::EntityId;
use crate::network::protocol::LeaderboardEntry;

/// Pick the local player's entry out of a leaderboard snapshot.
///
/// Returns None when the snapshot has no entry for `client_id` (including
/// before the transport has assigned one).
pub fn local_rank(snapshot: &[LeaderboardEntry], client_id: &EntityId) -> Option<u32> {
    snapshot
        .iter()
        .find(|entry| &entry.id == client_id)
        .map(|entry| entry.highest_rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<LeaderboardEntry> {
        vec![
            LeaderboardEntry {
                id: EntityId::from("p1"),
                highest_rank: 1,
            },
            LeaderboardEntry {
                id: EntityId::from("me"),
                highest_rank: 4,
            },
        ]
    }

    #[test]
    fn test_finds_local_entry() {
        assert_eq!(local_rank(&snapshot(), &EntityId::from("me")), Some(4));
    }

    #[test]
    fn test_missing_entry_is_none() {
        assert_eq!(local_rank(&snapshot(), &EntityId::from("p9")), None);
        assert_eq!(local_rank(&[], &EntityId::from("me")), None);
    }
}
