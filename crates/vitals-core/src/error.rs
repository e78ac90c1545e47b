//! Error types for the vitals-core crate.
//!
//! Every path on which a vitals operation does nothing is reported as a
//! typed error instead of being swallowed. The event hooks installed by
//! [`crate::VitalsSystem::init`] log these at debug level and move on.

use vitals_types::PlayerId;

/// Reasons a vitals operation was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VitalsError {
    /// The player's session is no longer valid (disconnecting, kicked).
    #[error("player session is not valid: {0}")]
    InvalidPlayer(PlayerId),

    /// The player has no active character record.
    #[error("no character record for player: {0}")]
    CharacterNotFound(PlayerId),

    /// A string delta did not start with a number.
    #[error("invalid vital delta: {input:?}")]
    InvalidDelta {
        /// The rejected input.
        input: String,
    },
}
