//! Simulated players for running the server without a game client.
//!
//! Each step, demo players randomly eat, drink, die, respawn, or reconnect,
//! so every path of the vitals mechanic shows up in the logs.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};
use vitals_core::{
    AdjustMode, BroadcastEmitter, CharacterStore, InMemoryCharacterStore, LocalEventBus,
    SystemClock, VitalsSystem,
};
use vitals_types::{CharacterRecord, PlayerId, VitalName};

/// The vitals system as wired by the server.
pub type ServerVitals = VitalsSystem<InMemoryCharacterStore, BroadcastEmitter, SystemClock>;

/// Chance per step that a living player dies.
const DEATH_CHANCE: f64 = 0.01;
/// Chance per step that a dead player respawns.
const RESPAWN_CHANCE: f64 = 0.25;
/// Chance per step that a player eats or drinks.
const CONSUME_CHANCE: f64 = 0.05;
/// Chance per step that a player drops and reconnects.
const RECONNECT_CHANCE: f64 = 0.005;

/// Food restored by eating.
const MEAL_SIZE: f64 = 25.0;
/// Water restored by drinking.
const DRINK_SIZE: f64 = 30.0;

/// Drives a fixed roster of simulated players.
pub struct DemoPlayers {
    store: Arc<InMemoryCharacterStore>,
    vitals: ServerVitals,
    players: Vec<PlayerId>,
}

impl DemoPlayers {
    /// Create an empty roster.
    pub const fn new(store: Arc<InMemoryCharacterStore>, vitals: ServerVitals) -> Self {
        Self {
            store,
            vitals,
            players: Vec::new(),
        }
    }

    /// Connect `count` players, each with a freshly selected character.
    ///
    /// Some characters start with unset vitals to exercise first-time
    /// initialization.
    pub fn connect_all(&mut self, bus: &mut LocalEventBus, count: u32) {
        let mut rng = rand::rng();
        for _ in 0..count {
            let player = PlayerId::new();
            let record = if rng.random_bool(0.5) {
                CharacterRecord::default()
            } else {
                CharacterRecord::with_vitals(
                    rng.random_range(20.0..=100.0),
                    rng.random_range(20.0..=100.0),
                )
            };
            bus.connect(player);
            self.store.insert(player, record);
            bus.select_character(player);
            self.players.push(player);
        }
        info!(players = self.players.len(), "Demo players connected");
    }

    /// Apply one round of random player behaviour.
    pub fn step(&self, bus: &mut LocalEventBus) {
        let mut rng = rand::rng();
        for &player in &self.players {
            let Some(record) = self.store.get(player) else {
                continue;
            };

            if record.is_dead {
                if rng.random_bool(RESPAWN_CHANCE) {
                    self.store.set_dead(player, false);
                    info!(player = %player, "Demo player respawned");
                }
                continue;
            }

            if rng.random_bool(DEATH_CHANCE) {
                self.store.set_dead(player, true);
                info!(player = %player, "Demo player died");
                continue;
            }

            if rng.random_bool(CONSUME_CHANCE) {
                self.consume(player, VitalName::Food, MEAL_SIZE);
            }
            if rng.random_bool(CONSUME_CHANCE) {
                self.consume(player, VitalName::Water, DRINK_SIZE);
            }

            if rng.random_bool(RECONNECT_CHANCE) {
                bus.disconnect(player);
                bus.connect(player);
                bus.select_character(player);
            }
        }
    }

    /// Restore `amount` of a vital, returning the new value.
    ///
    /// A failed adjustment is logged and leaves the vital untouched.
    fn consume(&self, player: PlayerId, vital: VitalName, amount: f64) -> Option<f64> {
        match self
            .vitals
            .adjust_vital(player, vital, amount, AdjustMode::Relative)
        {
            Ok(update) => {
                debug!(player = %player, vital = %vital, value = update.value, "Demo player consumed");
                Some(update.value)
            }
            Err(e) => {
                debug!(player = %player, vital = %vital, reason = %e, "Demo player could not consume");
                None
            }
        }
    }

    /// Log every player's current vitals.
    pub fn report(&self) {
        for &player in &self.players {
            match self.vitals.vitals(player) {
                Ok((food, water)) => info!(player = %player, food, water, "Final vitals"),
                Err(e) => debug!(player = %player, reason = %e, "No final vitals"),
            }
        }
    }

    /// Number of players on the roster.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
