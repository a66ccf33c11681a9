//! Client-Side Game State
//!
//! The synchronization core's state owners.
//!
//! ## Module Structure
//!
//! - `entity`: ids, actor state, stats, projectiles
//! - `registry`: pure store of remote actors
//! - `interp`: cosmetic position interpolation
//! - `local`: local actor controller (optimistic mutation)
//! - `session`: local player lifecycle state machine
//! - `leaderboard`: local rank derivation from broadcast snapshots

pub mod entity;
pub mod interp;
pub mod leaderboard;
pub mod local;
pub mod registry;
pub mod session;

// Re-export key types
pub use entity::{ActorState, EntityId, PlayerStats, Projectile, ProjectileOwner, RemoteEntity};
pub use local::{DamageOutcome, LocalPlayer};
pub use registry::EntityRegistry;
pub use session::{Session, SessionState};
