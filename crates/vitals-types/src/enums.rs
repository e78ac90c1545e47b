//! Enumeration types for character vitals.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A vital tracked on every character.
///
/// The serialized form (`"food"`, `"water"`) doubles as the meta key pushed
/// to the client HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum VitalName {
    /// How fed the character is.
    Food,
    /// How hydrated the character is.
    Water,
}

impl VitalName {
    /// Every vital, in the order they are decayed and pushed.
    pub const ALL: [Self; 2] = [Self::Food, Self::Water];

    /// The meta key used when syncing this vital to the client.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for VitalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known vital.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vital name: {0}")]
pub struct UnknownVital(pub String);

impl FromStr for VitalName {
    type Err = UnknownVital;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "water" => Ok(Self::Water),
            _ => Err(UnknownVital(s.to_owned())),
        }
    }
}
