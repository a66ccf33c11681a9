//! Core primitives shared across the client.

pub mod vec2;

pub use vec2::Vec2;
