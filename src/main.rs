//! Headless demo client
//!
//! Connects to a server, joins as an idle observer, and mirrors the session
//! in the log. Useful for smoke-testing the protocol and transport without
//! the renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arena_client::{ClientConfig, EntityId, FrameInput, GameClient, SessionState, WsTransport};

const FRAME: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ws://127.0.0.1:8080".to_owned());
    let transport = WsTransport::connect(&url).await?;

    let mut client = GameClient::new(ClientConfig::new("knight", "Observer"));
    client.handle_connected(EntityId::from(uuid::Uuid::new_v4().to_string()));

    let mut ticker = tokio::time::interval(FRAME);
    let mut last = Instant::now();
    loop {
        ticker.tick().await;
        let now = Instant::now();
        let dt = now.saturating_duration_since(last);
        last = now;

        if transport.is_closed() {
            client.handle_disconnected();
            info!("connection closed, exiting");
            return Ok(());
        }

        for event in transport.poll_events() {
            client.handle_event(event, now);
        }
        client.tick(&FrameInput::default(), now, dt);
        for intent in client.drain_outbox() {
            transport.send(&intent)?;
        }
        // No renderer: spawned projectiles just get dropped.
        client.take_spawned_projectiles();

        if client.session().state() == SessionState::LeavingGame {
            return Ok(());
        }
    }
}
