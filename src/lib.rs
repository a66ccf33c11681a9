//! # Arena Client Core
//!
//! State-synchronization core for the Arena multiplayer combat client:
//! reconciles the authoritative server event stream with locally-predicted
//! player actions, so the local player gets instant feedback while remote
//! players only ever reflect confirmed server state.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     ARENA CLIENT CORE                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  core/            - Shared primitives                        │
//! │  └── vec2.rs      - 2D float vector                          │
//! │                                                              │
//! │  game/            - State owners                             │
//! │  ├── entity.rs    - ids, actor state, stats, projectiles     │
//! │  ├── registry.rs  - pure store of remote actors              │
//! │  ├── interp.rs    - cosmetic position interpolation          │
//! │  ├── local.rs     - local actor controller (optimistic)      │
//! │  ├── session.rs   - local lifecycle state machine            │
//! │  └── leaderboard.rs - local rank from broadcast snapshots    │
//! │                                                              │
//! │  network/         - Wire boundary                            │
//! │  ├── protocol.rs  - ServerEvent / ClientIntent (JSON)        │
//! │  └── transport.rs - WebSocket adapter                        │
//! │                                                              │
//! │  client.rs        - GameClient: reconciler, combat resolver, │
//! │                     per-frame tick, intent outbox            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Authority Split
//!
//! The local player is mutated **optimistically**: input, fired shots and
//! incoming projectile impacts take effect the same frame, and the server
//! is informed through intents after the fact. Remote actors are mutated
//! **only** by confirmed server events; their displayed positions blend
//! cosmetically between updates, but the logical position is always the
//! latest authoritative value. Tolerated anomalies (unknown ids,
//! out-of-state events) degrade to traced no-ops; transport loss tears the
//! whole session down.
//!
//! Everything in [`client`] and [`game`] is synchronous and single-threaded
//! by design: the embedder drains the transport, feeds events in arrival
//! order, ticks once per frame, and flushes the intent outbox.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod client;
pub mod core;
pub mod game;
pub mod network;

// Re-export commonly used types
pub use client::{ClientConfig, FrameInput, GameClient};
pub use crate::core::vec2::Vec2;
pub use game::entity::{EntityId, PlayerStats, Projectile, ProjectileOwner, RemoteEntity};
pub use game::local::DamageOutcome;
pub use game::session::SessionState;
pub use network::protocol::{ClientIntent, ServerEvent};
pub use network::transport::{TransportError, WsTransport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
