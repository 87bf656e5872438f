//! Core types for The Eleventh Beast: the fixed map and investigation records.
//!
//! This crate holds everything that never changes during a game (the eight
//! locations and the roads between them) plus the plain records the engine
//! accumulates (rumors, secrets, wards, weapons). It has no randomness and no
//! mutable state.

/// Error types used throughout the crate.
pub mod error;
/// Location identifiers and the static location table.
pub mod location;
/// The road graph and shortest-path search.
pub mod map;
/// Rumors, secrets, and equipment records.
pub mod record;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export location types.
pub use location::{LOCATIONS, Location, LocationId};
/// Re-export map queries.
pub use map::{calculate_distance, connections, find_path, is_adjacent, neighbors};
/// Re-export record types.
pub use record::{Category, Item, Rumor, Secret};
