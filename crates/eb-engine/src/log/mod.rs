//! The game log: an append-only record of everything that happened.

pub mod entry;
pub mod game_log;

pub use entry::GameLogEntry;
pub use game_log::GameLog;
