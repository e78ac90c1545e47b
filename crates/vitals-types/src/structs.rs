//! Core record types shared between the vitals logic and its hosts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::VitalName;
use crate::ids::PlayerId;

/// Upper bound of every vital, and the value used to (re)fill one.
pub const VITAL_MAX: f64 = 100.0;

/// Lower bound of every vital.
pub const VITAL_MIN: f64 = 0.0;

/// The character document fields the vitals mechanic reads and writes.
///
/// The record is owned and persisted by the host's character store. A vital
/// that has never been written is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CharacterRecord {
    /// Food level, `None` until first written.
    pub food: Option<f64>,
    /// Water level, `None` until first written.
    pub water: Option<f64>,
    /// Whether the character is currently dead.
    pub is_dead: bool,
}

impl CharacterRecord {
    /// Create a living character with both vitals set.
    pub const fn with_vitals(food: f64, water: f64) -> Self {
        Self {
            food: Some(food),
            water: Some(water),
            is_dead: false,
        }
    }

    /// Read a vital by name.
    pub const fn vital(&self, vital: VitalName) -> Option<f64> {
        match vital {
            VitalName::Food => self.food,
            VitalName::Water => self.water,
        }
    }

    /// Write a vital by name.
    pub const fn set_vital(&mut self, vital: VitalName, value: f64) {
        match vital {
            VitalName::Food => self.food = Some(value),
            VitalName::Water => self.water = Some(value),
        }
    }
}

/// A single value pushed to a player's client HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MetaUpdate {
    /// Player whose HUD receives the value.
    pub player: PlayerId,
    /// The vital being synced; serialized as the meta key.
    pub vital: VitalName,
    /// The value to display.
    pub value: f64,
}
