//! Food and water vitals for player characters.
//!
//! This crate holds the decay mechanic and the seams it uses to talk to the
//! game host. It performs no I/O of its own: character records, HUD pushes,
//! time, and event dispatch all go through traits the host implements. An
//! in-memory implementation of each seam is included for the server binary
//! and for tests.
//!
//! # Modules
//!
//! - [`clock`] -- Epoch-millisecond time source ([`Clock`])
//! - [`config`] -- Decay parameters and config file loading ([`VitalsConfig`])
//! - [`error`] -- Skip reasons for vitals operations ([`VitalsError`])
//! - [`events`] -- Player sessions and event subscription ([`EventBus`])
//! - [`store`] -- Character record access ([`CharacterStore`])
//! - [`sync`] -- HUD display sync ([`MetaEmitter`])
//! - [`system`] -- The decay mechanic itself ([`VitalsSystem`])
//! - [`throttle`] -- Per-player tick throttle ([`UpdateThrottle`])

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod store;
pub mod sync;
pub mod system;
pub mod throttle;

// Re-export primary types at crate root for convenience.
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, LoggingConfig, ServerConfig, ServerSection, VitalsConfig};
pub use error::VitalsError;
pub use events::{EventBus, LocalEventBus, PlayerHook, PlayerSession};
pub use store::{CharacterStore, InMemoryCharacterStore};
pub use sync::{BroadcastEmitter, MetaEmitter, RecordingEmitter};
pub use system::{
    AdjustMode, PingOutcome, VitalUpdate, VitalsSystem, normalize_vital, parse_delta,
};
pub use throttle::UpdateThrottle;
