//! What callers get back: owned, versioned copies of the game.
//!
//! Nothing here borrows from the engine, so a caller can keep, mutate, or
//! serialize a snapshot without affecting the game it came from.

use std::collections::BTreeMap;

use eb_core::{LOCATIONS, Location, LocationId};
use serde::{Deserialize, Serialize};

use crate::error::Rejection;
use crate::log::GameLogEntry;
use crate::state::GameState;

/// Version of the snapshot layout. Bumped on any breaking field change.
pub const SCHEMA_VERSION: u32 = 1;

/// A point-in-time copy of the game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Layout version, see [`SCHEMA_VERSION`].
    pub schema_version: u32,
    /// Every state field, flattened into the snapshot object.
    #[serde(flatten)]
    pub state: GameState,
}

impl GameSnapshot {
    /// Copy `state` into a new snapshot.
    pub fn of(state: &GameState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            state: state.clone(),
        }
    }
}

/// Result of an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Whether the action was carried out.
    pub success: bool,
    /// Outcome, or the reason for refusal.
    pub message: String,
    /// State after the action (unchanged when refused).
    pub game_data: GameSnapshot,
    /// The full game log after the action.
    pub game_log: Vec<GameLogEntry>,
    /// Individual hunt dice, for hunts that rolled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_rolls: Option<Vec<u32>>,
    /// The lowest hunt die, which decides the outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_roll: Option<u32>,
}

impl ActionResponse {
    /// A successful action.
    pub fn accepted(message: impl Into<String>, state: &GameState, log: &[GameLogEntry]) -> Self {
        Self {
            success: true,
            message: message.into(),
            game_data: GameSnapshot::of(state),
            game_log: log.to_vec(),
            dice_rolls: None,
            lowest_roll: None,
        }
    }

    /// A refused action.
    pub fn rejected(reason: &Rejection, state: &GameState, log: &[GameLogEntry]) -> Self {
        Self {
            success: false,
            message: reason.to_string(),
            game_data: GameSnapshot::of(state),
            game_log: log.to_vec(),
            dice_rolls: None,
            lowest_roll: None,
        }
    }

    /// Attach the hunt dice.
    pub fn with_dice(mut self, rolls: Vec<u32>) -> Self {
        self.lowest_roll = rolls.iter().copied().min();
        self.dice_rolls = Some(rolls);
        self
    }
}

/// Full bootstrap view: state, log, and the static map.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    /// Always true; present for symmetry with [`ActionResponse`].
    pub success: bool,
    /// Current state.
    pub game_data: GameSnapshot,
    /// The full game log.
    pub game_log: Vec<GameLogEntry>,
    /// The eight locations.
    pub locations: Vec<Location>,
    /// The road graph.
    pub location_connections: BTreeMap<LocationId, Vec<LocationId>>,
}

impl GameView {
    /// Assemble a view of `state` and `log`.
    pub fn new(state: &GameState, log: &[GameLogEntry]) -> Self {
        Self {
            success: true,
            game_data: GameSnapshot::of(state),
            game_log: log.to_vec(),
            locations: LOCATIONS.to_vec(),
            location_connections: eb_core::connections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new("Beast", "Inquisitor", 5)
    }

    #[test]
    fn snapshot_is_flat_and_versioned() {
        let json = serde_json::to_value(GameSnapshot::of(&state())).unwrap();
        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["player_location"], "II");
        assert_eq!(json["game_phase"], "beast-approaches");
        assert_eq!(json["current_month"], "May");
    }

    #[test]
    fn snapshot_roundtrip() {
        let mut s = state();
        s.place_token(LocationId::VI);
        s.beast_location = Some(LocationId::VIII);
        s.beast_distance = Some(2);
        let snap = GameSnapshot::of(&s);
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn snapshot_does_not_alias_state() {
        let mut s = state();
        let mut snap = GameSnapshot::of(&s);
        snap.state.wounds = 2;
        s.place_token(LocationId::I);
        assert_eq!(s.wounds, 0);
        assert!(snap.state.rumors_tokens.is_empty());
    }

    #[test]
    fn dice_fields_omitted_unless_hunting() {
        let r = ActionResponse::accepted("ok", &state(), &[]);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("dice_rolls").is_none());

        let r = r.with_dice(vec![4, 2, 6]);
        assert_eq!(r.lowest_roll, Some(2));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["dice_rolls"], serde_json::json!([4, 2, 6]));
    }

    #[test]
    fn rejection_carries_message() {
        let r = ActionResponse::rejected(&Rejection::NoRumorToken, &state(), &[]);
        assert!(!r.success);
        assert_eq!(r.message, "No Rumor Token at this location to investigate!");
    }

    #[test]
    fn view_includes_map() {
        let v = GameView::new(&state(), &[]);
        assert_eq!(v.locations.len(), 8);
        assert_eq!(v.location_connections[&LocationId::II].len(), 3);
    }
}
