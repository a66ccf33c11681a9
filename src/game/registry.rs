//! Entity Registry
//!
//! Pure store mapping server-assigned ids to remote actors. Answers "what
//! exists" and nothing else; how entries got there is the reconciler's
//! business. The local player is never stored here, so iterating the
//! registry always means "other players".
//!
//! Missing ids are expected (late or duplicate delivery at the transport
//! boundary): mutating calls on an absent id are no-ops, reads yield None.
//! Never an error.

use std::collections::BTreeMap;

use crate::game::entity::{EntityId, RemoteEntity};

/// Store of all known remote actors.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: BTreeMap<EntityId, RemoteEntity>,
}

impl EntityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the actor under `id`. Last write wins.
    pub fn upsert(&mut self, id: EntityId, entity: RemoteEntity) {
        self.entities.insert(id, entity);
    }

    /// Look up an actor.
    pub fn get(&self, id: &EntityId) -> Option<&RemoteEntity> {
        self.entities.get(id)
    }

    /// Look up an actor for mutation.
    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut RemoteEntity> {
        self.entities.get_mut(id)
    }

    /// Remove and return the actor under `id`, if present.
    pub fn remove(&mut self, id: &EntityId) -> Option<RemoteEntity> {
        self.entities.remove(id)
    }

    /// Drop every entry (session teardown).
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Number of known remote actors.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when no remote actors are known.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate all known actors. Order carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = &RemoteEntity> {
        self.entities.values()
    }
}
