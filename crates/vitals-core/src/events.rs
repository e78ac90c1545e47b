//! Player sessions and the event dispatch seam.
//!
//! The host fires two kinds of player events that the vitals mechanic
//! subscribes to: a recurring per-player tick and a one-off character
//! selection. [`EventBus`] is the subscription surface; [`LocalEventBus`] is
//! an in-process dispatcher that also owns the connected [`PlayerSession`]s.

use std::collections::BTreeMap;

use tracing::info;
use vitals_types::PlayerId;

use crate::throttle::UpdateThrottle;

/// Per-connection state the host keeps for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    id: PlayerId,
    valid: bool,
    /// Tick throttle for this player's vitals.
    pub throttle: UpdateThrottle,
}

impl PlayerSession {
    /// A fresh, valid session.
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            valid: true,
            throttle: UpdateThrottle::new(),
        }
    }

    /// The player this session belongs to.
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Whether the connection can still receive updates.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Mark the session as no longer usable.
    pub const fn invalidate(&mut self) {
        self.valid = false;
    }
}

/// A callback run with the session of the player an event is for.
pub type PlayerHook = Box<dyn FnMut(&mut PlayerSession) + Send>;

/// Subscription surface for player events.
pub trait EventBus {
    /// Run `hook` on every player tick.
    fn on_player_tick(&mut self, hook: PlayerHook);

    /// Run `hook` whenever a player selects a character.
    fn on_character_selected(&mut self, hook: PlayerHook);
}

/// In-process event dispatcher owning the connected sessions.
///
/// Disconnecting a player drops its session and with it every piece of
/// per-player state hooks stored there.
#[derive(Default)]
pub struct LocalEventBus {
    sessions: BTreeMap<PlayerId, PlayerSession>,
    tick_hooks: Vec<PlayerHook>,
    selected_hooks: Vec<PlayerHook>,
}

impl LocalEventBus {
    /// Create a bus with no sessions and no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `player`.
    ///
    /// Returns `false` if the player is already connected.
    pub fn connect(&mut self, player: PlayerId) -> bool {
        if self.sessions.contains_key(&player) {
            return false;
        }
        self.sessions.insert(player, PlayerSession::new(player));
        info!(player = %player, "Player connected");
        true
    }

    /// Close a player's session, returning it if one was open.
    pub fn disconnect(&mut self, player: PlayerId) -> Option<PlayerSession> {
        let session = self.sessions.remove(&player);
        if session.is_some() {
            info!(player = %player, "Player disconnected");
        }
        session
    }

    /// Mark a player's session invalid without removing it.
    ///
    /// Returns `false` if the player is not connected.
    pub fn invalidate(&mut self, player: PlayerId) -> bool {
        self.sessions.get_mut(&player).is_some_and(|session| {
            session.invalidate();
            true
        })
    }

    /// Look up a connected player's session.
    pub fn session(&self, player: PlayerId) -> Option<&PlayerSession> {
        self.sessions.get(&player)
    }

    /// Number of connected players.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Ids of all connected players, in id order.
    pub fn players(&self) -> Vec<PlayerId> {
        self.sessions.keys().copied().collect()
    }

    /// Fire the character-selected event for one player.
    ///
    /// Returns `false` if the player is not connected.
    pub fn select_character(&mut self, player: PlayerId) -> bool {
        let Some(session) = self.sessions.get_mut(&player) else {
            return false;
        };
        for hook in &mut self.selected_hooks {
            hook(session);
        }
        true
    }

    /// Fire the tick event for one player.
    ///
    /// Returns `false` if the player is not connected.
    pub fn tick_player(&mut self, player: PlayerId) -> bool {
        let Some(session) = self.sessions.get_mut(&player) else {
            return false;
        };
        for hook in &mut self.tick_hooks {
            hook(session);
        }
        true
    }

    /// Fire the tick event for every connected player, in id order.
    ///
    /// Returns the number of sessions ticked.
    pub fn dispatch_tick(&mut self) -> usize {
        for session in self.sessions.values_mut() {
            for hook in &mut self.tick_hooks {
                hook(session);
            }
        }
        self.sessions.len()
    }

    /// Number of registered tick hooks.
    pub fn tick_hook_count(&self) -> usize {
        self.tick_hooks.len()
    }

    /// Number of registered character-selected hooks.
    pub fn selected_hook_count(&self) -> usize {
        self.selected_hooks.len()
    }
}

impl EventBus for LocalEventBus {
    fn on_player_tick(&mut self, hook: PlayerHook) {
        self.tick_hooks.push(hook);
    }

    fn on_character_selected(&mut self, hook: PlayerHook) {
        self.selected_hooks.push(hook);
    }
}
