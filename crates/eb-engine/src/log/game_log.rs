//! Game log storage and export.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::entry::GameLogEntry;

/// A chronological, append-only log of one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vec<GameLogEntry>,
}

impl GameLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message as-is.
    pub fn append(&mut self, message: impl Into<String>) -> &GameLogEntry {
        let id = self.entries.len() as u64 + 1;
        self.entries.push(GameLogEntry {
            id,
            message: message.into(),
            timestamp: Utc::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Append a message prefixed with `[Round N]`.
    pub fn append_round(&mut self, round: u32, message: impl AsRef<str>) -> &GameLogEntry {
        self.append(format!("[Round {round}] {}", message.as_ref()))
    }

    /// Get all entries.
    pub fn entries(&self) -> &[GameLogEntry] {
        &self.entries
    }

    /// Entries appended after the first `from` entries.
    pub fn since(&self, from: usize) -> &[GameLogEntry] {
        &self.entries[from.min(self.entries.len())..]
    }

    /// Only the messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Investigation Log\n\n");
        for entry in &self.entries {
            let stamp = entry.timestamp.format("%H:%M:%S");
            out.push_str(&format!("- `{stamp}` {}\n", entry.message));
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Investigation Log\n=================\n\n");
        for entry in &self.entries {
            out.push_str(&format!("{:>4}. {}\n", entry.id, entry.message));
        }
        out
    }
}
