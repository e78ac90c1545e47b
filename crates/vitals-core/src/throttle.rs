//! Per-player tick throttle.
//!
//! The host fires ticks at its own cadence; vitals only change once per
//! configured interval. The throttle lives on the player's session, so its
//! state is dropped together with the connection.

/// Tracks when a player's vitals may next be updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateThrottle {
    next_update_at_ms: Option<i64>,
}

impl UpdateThrottle {
    /// A throttle that accepts the next tick immediately.
    pub const fn new() -> Self {
        Self {
            next_update_at_ms: None,
        }
    }

    /// Epoch milliseconds at which the next tick will be accepted, if any
    /// tick has been accepted yet.
    pub const fn next_update_at_ms(&self) -> Option<i64> {
        self.next_update_at_ms
    }

    /// Try to accept a tick at `now_ms`.
    ///
    /// Returns `false` while `now_ms` is before the next allowed time.
    /// Otherwise moves the window to `now_ms + interval_ms` and returns
    /// `true`.
    pub fn try_acquire(&mut self, now_ms: i64, interval_ms: u64) -> bool {
        if let Some(next) = self.next_update_at_ms
            && now_ms < next
        {
            return false;
        }
        let interval = i64::try_from(interval_ms).unwrap_or(i64::MAX);
        self.next_update_at_ms = Some(now_ms.saturating_add(interval));
        true
    }

    /// Forget the window so the next tick is accepted immediately.
    pub const fn reset(&mut self) {
        self.next_update_at_ms = None;
    }
}
