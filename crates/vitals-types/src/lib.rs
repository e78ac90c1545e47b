//! Shared type definitions for character vitals.
//!
//! Types defined here are used by the vitals logic, the host integrations,
//! and (through `ts-rs` bindings) the client HUD.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for player identifiers
//! - [`enums`] -- The closed set of vitals ([`VitalName`])
//! - [`structs`] -- Character record and HUD sync payload

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{UnknownVital, VitalName};
pub use ids::PlayerId;
pub use structs::{CharacterRecord, MetaUpdate, VITAL_MAX, VITAL_MIN};
