//! The Beast's turn: where it stirs, when it appears, and how it closes in.

use eb_core::{LocationId, calculate_distance, find_path};

use super::GameEngine;
use crate::dice::Die;
use crate::state::GamePhase;

/// Lowest d6 result on which a materialized Beast moves toward the Inquisitor.
const BEAST_MOVE_THRESHOLD: u32 = 5;

impl GameEngine {
    /// Resolve one Beast Approaches phase. Returns whether it ended in a
    /// surprise hunt.
    pub(super) fn beast_approaches(&mut self) -> bool {
        let roll = Die::D8.roll(self.rng.as_mut());
        let Ok(target) = LocationId::from_roll(roll) else {
            tracing::warn!(roll, "d8 roll outside the map");
            return false;
        };
        tracing::debug!(roll, location = %target, "beast approach roll");

        let label = Self::location_label(target);
        self.note(format!(
            "THE BEAST APPROACHES - A whisper on the wind... The {} stirs at {label}.",
            self.state.beast_name
        ));

        let beast_at = self.state.beast_location;
        if self.state.has_token(target) {
            match beast_at {
                None => self.materialize(target),
                Some(at) if at != target => self.note(format!(
                    "The rumor at {label} intensifies, but the Beast hunts elsewhere."
                )),
                Some(_) => {}
            }
        } else {
            self.state.place_token(target);
            self.note(format!("A Rumor Token appears at {label}."));
            if beast_at.is_none() {
                return false;
            }
        }

        if self.state.beast_location == Some(target) && self.state.player_location == target {
            self.note(format!(
                "SURPRISE! The Beast is here with you at {label}! A hunt is triggered!"
            ));
            self.set_phase(GamePhase::Hunt);
            return true;
        }

        if self.state.beast_location.is_none() {
            return false;
        }

        let roll = Die::D6.roll(self.rng.as_mut());
        tracing::debug!(roll, "beast movement roll");
        if roll < BEAST_MOVE_THRESHOLD {
            return false;
        }

        self.note("The Beast moves closer... It approaches your location!");
        self.move_beast_closer();
        if self.state.beast_is_here() {
            let here = Self::location_label(self.state.player_location);
            self.note(format!(
                "SURPRISE! The Beast is here with you at {here}! A hunt is triggered!"
            ));
            self.set_phase(GamePhase::Hunt);
            return true;
        }
        false
    }

    fn materialize(&mut self, at: LocationId) {
        self.state.beast_location = Some(at);
        self.state.beast_distance = calculate_distance(self.state.player_location, at);
        tracing::info!(location = %at, distance = ?self.state.beast_distance, "beast materialized");
        self.note(format!(
            "The Beast has ARRIVED! {} materializes at {}!",
            self.state.beast_name,
            Self::location_label(at)
        ));
    }

    /// Move the Beast one road along the shortest path to the Inquisitor.
    ///
    /// A Beast one road away lunges onto the Inquisitor and forces a hunt.
    /// Returns whether the Beast moved.
    pub(super) fn move_beast_closer(&mut self) -> bool {
        let Some(from) = self.state.beast_location else {
            return false;
        };
        let path = find_path(from, self.state.player_location);

        match path.len() {
            2 => {
                self.state.beast_location = Some(self.state.player_location);
                self.state.beast_distance = Some(0);
                tracing::debug!(from = %from, to = %self.state.player_location, "beast lunges");
                self.note("The Beast lunges onto your location!");
                self.set_phase(GamePhase::Hunt);
                true
            }
            n if n > 2 => {
                let next = path[1];
                let remaining = n as u32 - 2;
                self.state.beast_location = Some(next);
                self.state.beast_distance = Some(remaining);
                tracing::debug!(from = %from, to = %next, remaining, "beast steps closer");
                self.note(format!(
                    "The {} prowls into {}, {remaining} road(s) from you.",
                    self.state.beast_name,
                    Self::location_label(next)
                ));
                true
            }
            _ => false,
        }
    }
}
