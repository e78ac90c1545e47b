//! Character record access.
//!
//! The host owns and persists character documents. [`CharacterStore`] is the
//! narrow slice of that API the vitals mechanic needs. The in-memory
//! [`InMemoryCharacterStore`] backs the server binary and the tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use vitals_types::{CharacterRecord, PlayerId, VitalName};

/// Read / write access to the active character of a player.
pub trait CharacterStore: Send + Sync {
    /// The player's active character record, if one is selected.
    fn get(&self, player: PlayerId) -> Option<CharacterRecord>;

    /// Persist a single vital on the player's active character.
    ///
    /// Writing for a player without a record does nothing.
    fn set(&self, player: PlayerId, vital: VitalName, value: f64);
}

/// Character records held in process memory.
///
/// Counts every accepted [`CharacterStore::set`] call so redundant writes
/// are observable.
#[derive(Debug, Default)]
pub struct InMemoryCharacterStore {
    records: RwLock<BTreeMap<PlayerId, CharacterRecord>>,
    writes: AtomicU64,
}

impl InMemoryCharacterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a player's active character.
    pub fn insert(&self, player: PlayerId, record: CharacterRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(player, record);
    }

    /// Remove a player's character, returning it if present.
    pub fn remove(&self, player: PlayerId) -> Option<CharacterRecord> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&player)
    }

    /// Mark a player's character dead or alive.
    ///
    /// Returns `false` if the player has no record.
    pub fn set_dead(&self, player: PlayerId, is_dead: bool) -> bool {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.get_mut(&player).is_some_and(|record| {
            record.is_dead = is_dead;
            true
        })
    }

    /// Number of vital writes accepted so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharacterStore for InMemoryCharacterStore {
    fn get(&self, player: PlayerId) -> Option<CharacterRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&player)
            .cloned()
    }

    fn set(&self, player: PlayerId, vital: VitalName, value: f64) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(record) = records.get_mut(&player) {
            record.set_vital(vital, value);
            self.writes.fetch_add(1, Ordering::Relaxed);
        }
    }
}
