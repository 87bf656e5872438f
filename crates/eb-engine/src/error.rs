//! Error types for the game engine.

use eb_core::{CoreError, LocationId};
use thiserror::Error;

use crate::registry::SessionId;

/// Result type for engine and registry operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures outside the rules: lookups and malformed input from a host.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No live game under this session id.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// The text is not a session id.
    #[error("invalid session id: \"{0}\"")]
    InvalidSessionId(String),

    /// A rumor table line is not `<category>: <note>`.
    #[error("rumor table line {line}: expected `<category>: <note>`, got \"{text}\"")]
    MalformedRumor {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Map or record data error.
    #[error("{0}")]
    Core(#[from] CoreError),
}

/// Why the rules refused an action. The message is shown to the player.
///
/// A rejected action leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The target is not one road away.
    #[error("Cannot move to {to} from {from}. Must be adjacent location.")]
    NotAdjacent {
        /// Current location.
        from: LocationId,
        /// Requested location.
        to: LocationId,
    },

    /// Both actions for the day are spent.
    #[error("No actions remaining")]
    NoActionsRemaining,

    /// Nothing to investigate here.
    #[error("No Rumor Token at this location to investigate!")]
    NoRumorToken,

    /// Verification is only possible at All-Hallows-The-Great.
    #[error("You can only verify rumors at All-Hallows-The-Great (Location II)!")]
    NotAtVerificationSite,

    /// Every rumor has already been verified.
    #[error("You have no unverified rumors to verify!")]
    NoUnverifiedRumors,

    /// The Beast is elsewhere, or not yet on the map.
    #[error("You must be in the same location as the Beast to hunt!")]
    BeastNotHere,

    /// The Beast shares the Inquisitor's location and must be fought first.
    #[error("The Beast is upon you! You must hunt before doing anything else.")]
    HuntInProgress,

    /// Victory or defeat has already been decided.
    #[error("The game has ended.")]
    GameOver,
}
