//! HUD bridge: forwards meta updates to the client transport.
//!
//! The server has no real client connections, so the bridge writes each
//! update as a JSON payload to the log at debug level, which is exactly what
//! a network bridge would put on the wire.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use vitals_types::{MetaUpdate, PlayerId};

/// Encode an update the way it is sent to the client.
pub fn encode(update: &MetaUpdate) -> serde_json::Result<String> {
    serde_json::to_string(update)
}

/// Put one encoded update on the wire.
///
/// Returns whether anything was forwarded; an update that failed to encode
/// is logged and dropped.
fn forward(player: PlayerId, encoded: &serde_json::Result<String>) -> bool {
    match encoded {
        Ok(payload) => {
            debug!(player = %player, payload = %payload, "HUD meta");
            true
        }
        Err(e) => {
            warn!(player = %player, error = %e, "HUD meta failed to encode, not forwarded");
            false
        }
    }
}

/// Spawn a task draining `rx` until every sender is gone.
///
/// Returns the join handle; the task yields the number of updates forwarded.
pub fn spawn_bridge(mut rx: broadcast::Receiver<MetaUpdate>) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut forwarded: u64 = 0;
        loop {
            match rx.recv().await {
                Ok(update) => {
                    if forward(update.player, &encode(&update)) {
                        forwarded = forwarded.saturating_add(1);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "HUD bridge lagged, skipping to newest updates");
                }
                Err(RecvError::Closed) => break,
            }
        }
        forwarded
    })
}
