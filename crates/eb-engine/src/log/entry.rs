//! Game log entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line of the game log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    /// Sequential id, starting at 1.
    pub id: u64,
    /// Human-readable text, usually prefixed with `[Round N]`.
    pub message: String,
    /// When the entry was written.
    pub timestamp: DateTime<Utc>,
}
