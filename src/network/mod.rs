//! Networking Module
//!
//! Wire protocol types and the WebSocket transport adapter.
//! The sync core in [`crate::client`] consumes and produces the protocol
//! types only; swapping the transport does not touch it.

pub mod protocol;
pub mod transport;

pub use protocol::{ClientIntent, LeaderboardEntry, PlayerSnapshot, ServerEvent};
pub use transport::{TransportError, WsTransport};
