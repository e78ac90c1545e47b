//! Display sync: pushing vital values to the client HUD.
//!
//! Pushes are fire-and-forget. [`BroadcastEmitter`] fans updates out over a
//! tokio broadcast channel to whatever bridges them to clients;
//! [`RecordingEmitter`] keeps them in order for inspection.

use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;
use tracing::trace;
use vitals_types::{MetaUpdate, PlayerId, VitalName};

/// Capacity of the broadcast channel for meta updates.
///
/// A subscriber that falls behind by more than this many messages receives
/// [`broadcast::error::RecvError::Lagged`] and skips to the newest update.
pub const BROADCAST_CAPACITY: usize = 1024;

/// Pushes a named value to a player's client display.
pub trait MetaEmitter: Send + Sync {
    /// Push `value` for `vital` to `player`. No acknowledgment.
    fn emit(&self, player: PlayerId, vital: VitalName, value: f64);
}

/// Fans meta updates out to every subscriber of a broadcast channel.
#[derive(Debug, Clone)]
pub struct BroadcastEmitter {
    tx: broadcast::Sender<MetaUpdate>,
}

impl BroadcastEmitter {
    /// Create an emitter with a fresh channel.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx }
    }

    /// Subscribe to every update emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<MetaUpdate> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaEmitter for BroadcastEmitter {
    fn emit(&self, player: PlayerId, vital: VitalName, value: f64) {
        trace!(player = %player, vital = %vital, value, "Meta update");
        // No subscribers means no client is listening; the update is dropped.
        let _ = self.tx.send(MetaUpdate {
            player,
            vital,
            value,
        });
    }
}

/// Keeps every emitted update in order.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    updates: Mutex<Vec<MetaUpdate>>,
}

impl RecordingEmitter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates emitted for one player.
    pub fn updates_for(&self, player: PlayerId) -> Vec<MetaUpdate> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|u| u.player == player)
            .copied()
            .collect()
    }

    /// Most recent value pushed for a player's vital.
    pub fn last_value(&self, player: PlayerId, vital: VitalName) -> Option<f64> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|u| u.player == player && u.vital == vital)
            .map(|u| u.value)
    }

    /// Number of updates emitted so far.
    pub fn len(&self) -> usize {
        self.updates.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded updates.
    pub fn clear(&self) {
        self.updates.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl MetaEmitter for RecordingEmitter {
    fn emit(&self, player: PlayerId, vital: VitalName, value: f64) {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(MetaUpdate {
                player,
                vital,
                value,
            });
    }
}
