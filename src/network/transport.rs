//! WebSocket transport adapter
//!
//! Ordered, bidirectional named-message channel to the game server. A
//! background reader task parses incoming JSON frames into [`ServerEvent`]s
//! on a shared queue the embedder drains once per frame (preserving arrival
//! order); outbound intents go through an mpsc channel drained by the writer
//! loop. Unparseable frames are logged and dropped. Close or error flips
//! the closed flag; the embedder reacts by tearing the session down — there
//! is no reconnect inside the adapter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, warn};

use super::protocol::{ClientIntent, ServerEvent};

/// Outgoing channel depth. Intents beyond this while the writer is stalled
/// are an error surfaced to the caller.
const OUTGOING_BUFFER: usize = 100;

/// Failures at the transport boundary. The sync core itself never produces
/// errors; everything here belongs to the socket edge.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The WebSocket connection could not be established or broke.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// An outbound intent could not be serialized.
    #[error("intent serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The writer task is gone; the connection is effectively closed.
    #[error("outgoing channel closed")]
    ChannelClosed,
}

/// Live connection to the game server.
pub struct WsTransport {
    outgoing: mpsc::Sender<String>,
    incoming: Arc<Mutex<Vec<ServerEvent>>>,
    closed: Arc<AtomicBool>,
}

impl WsTransport {
    /// Connect to `url` and spawn the reader/writer tasks.
    pub async fn connect(url: &str) -> Result<Self, TransportError> {
        info!("connecting to {url}");
        let (ws_stream, _) = connect_async(url).await?;
        info!("websocket connected");

        let (outgoing_tx, mut outgoing_rx) = mpsc::channel::<String>(OUTGOING_BUFFER);
        let incoming = Arc::new(Mutex::new(Vec::<ServerEvent>::new()));
        let closed = Arc::new(AtomicBool::new(false));

        let (mut write, mut read) = ws_stream.split();
        let queue_for_reader = incoming.clone();
        let closed_for_task = closed.clone();

        tokio::spawn(async move {
            let closed_for_reader = closed_for_task.clone();
            let reader = tokio::spawn(async move {
                while let Some(frame) = read.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            match serde_json::from_str::<ServerEvent>(&text) {
                                Ok(event) => {
                                    debug!(?event, "received");
                                    if let Ok(mut queue) = queue_for_reader.lock() {
                                        queue.push(event);
                                    }
                                }
                                Err(e) => {
                                    warn!("dropping unparseable frame: {e} - {text}");
                                }
                            }
                        }
                        Ok(Message::Close(_)) => {
                            info!("server closed connection");
                            break;
                        }
                        Err(e) => {
                            error!("websocket read error: {e}");
                            break;
                        }
                        _ => {}
                    }
                }
                closed_for_reader.store(true, Ordering::SeqCst);
            });

            while let Some(json) = outgoing_rx.recv().await {
                if let Err(e) = write.send(Message::Text(json)).await {
                    error!("failed to send intent: {e}");
                    break;
                }
            }

            closed_for_task.store(true, Ordering::SeqCst);
            reader.abort();
        });

        Ok(Self {
            outgoing: outgoing_tx,
            incoming,
            closed,
        })
    }

    /// Drain every event received since the last poll, in arrival order.
    pub fn poll_events(&self) -> Vec<ServerEvent> {
        match self.incoming.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }

    /// Queue an intent for the writer loop.
    pub fn send(&self, intent: &ClientIntent) -> Result<(), TransportError> {
        let json = serde_json::to_string(intent)?;
        self.outgoing
            .try_send(json)
            .map_err(|_| TransportError::ChannelClosed)
    }

    /// True once the connection has closed or errored.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
