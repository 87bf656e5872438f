//! Player actions: move, investigate, verify, hunt.

use eb_core::{LocationId, Rumor, Secret, calculate_distance, is_adjacent};

use super::{GameEngine, Outcome};
use crate::dice::Die;
use crate::error::Rejection;
use crate::snapshot::ActionResponse;
use crate::state::{GamePhase, VERIFICATION_LOCATION};

/// Highest verification roll that reveals a truth; anything above is false.
const VERIFY_TRUE_MAX: u32 = 4;
/// Highest lowest-die result that slays the Beast.
const HUNT_SLAY_MAX: u32 = 2;
/// Highest lowest-die result that costs only one wound.
const HUNT_GRAZE_MAX: u32 = 4;

impl GameEngine {
    /// Walk to a neighboring location. Does not spend an action; call
    /// [`GameEngine::complete_action`] afterwards.
    ///
    /// Walking into the Beast forces a hunt.
    pub fn move_player(&mut self, target: LocationId) -> ActionResponse {
        let result = self.try_move(target);
        self.respond(result)
    }

    /// Search the current location's rumor token for a new rumor.
    pub fn investigate(&mut self) -> ActionResponse {
        let result = self.try_investigate();
        self.respond(result)
    }

    /// Test every unverified rumor at All-Hallows-The-Great.
    pub fn verify_rumors(&mut self) -> ActionResponse {
        let result = self.try_verify();
        self.respond(result)
    }

    /// Fight the Beast with one die per secret, at most five.
    pub fn hunt_beast(&mut self) -> ActionResponse {
        let result = self.try_hunt();
        self.respond(result)
    }

    fn try_move(&mut self, target: LocationId) -> Result<Outcome, Rejection> {
        self.ensure_free()?;
        let from = self.state.player_location;
        if !is_adjacent(from, target) {
            return Err(Rejection::NotAdjacent { from, to: target });
        }

        self.state.player_location = target;
        if let Some(beast) = self.state.beast_location {
            self.state.beast_distance = calculate_distance(target, beast);
        }
        let label = Self::location_label(target);
        self.note(format!(
            "{} moves to {label}.",
            self.state.inquisitor_name
        ));

        if self.state.beast_is_here() {
            self.note(format!(
                "SURPRISE! {} is here at {label}! A hunt is triggered!",
                self.state.beast_name
            ));
            self.set_phase(GamePhase::Hunt);
        }

        Ok(Outcome::new(format!("Moved to {}", target.name())))
    }

    fn try_investigate(&mut self) -> Result<Outcome, Rejection> {
        self.ensure_free()?;
        if self.state.actions_remaining == 0 {
            return Err(Rejection::NoActionsRemaining);
        }
        let here = self.state.player_location;
        if !self.state.has_token(here) {
            return Err(Rejection::NoRumorToken);
        }

        self.state.take_token(here);
        let draft = self
            .rumors
            .next_rumor(&self.state.investigation.rumors, self.rng.as_mut());
        let id = format!("rumor-{}", self.state.investigation.rumors.len() + 1);
        tracing::debug!(%id, category = %draft.category, "rumor uncovered");
        self.note(format!(
            "{} investigates at {} and uncovers a rumor: \"{}\"",
            self.state.inquisitor_name,
            Self::location_label(here),
            draft.note
        ));
        self.state
            .investigation
            .rumors
            .push(Rumor::new(id, here, draft.note, draft.category));
        self.state.investigations_completed += 1;

        Ok(Outcome::new("Investigation complete. New rumor added."))
    }

    fn try_verify(&mut self) -> Result<Outcome, Rejection> {
        self.ensure_free()?;
        if self.state.player_location != VERIFICATION_LOCATION {
            return Err(Rejection::NotAtVerificationSite);
        }
        if self.state.actions_remaining == 0 {
            return Err(Rejection::NoActionsRemaining);
        }
        let pending: Vec<usize> = self
            .state
            .investigation
            .rumors
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.verified)
            .map(|(i, _)| i)
            .collect();
        if pending.is_empty() {
            return Err(Rejection::NoUnverifiedRumors);
        }

        let (mut learned, mut dismissed) = (0, 0);
        for index in pending {
            let roll = Die::D6.roll(self.rng.as_mut());
            let rumor = &mut self.state.investigation.rumors[index];
            rumor.verified = true;
            let message = if roll > VERIFY_TRUE_MAX {
                rumor.is_false = true;
                dismissed += 1;
                format!(
                    "Rumor verification failed: \"{}\" is marked as a false rumor.",
                    rumor.note
                )
            } else {
                rumor.is_learned = true;
                learned += 1;
                format!(
                    "Rumor verified as truth: \"{}\" becomes a Learned Secret and provides insight into the Beast.",
                    rumor.note
                )
            };
            tracing::debug!(roll, rumor = %rumor.id, "rumor verified");
            self.note(message);
        }

        let truths: Vec<Secret> = self
            .state
            .investigation
            .rumors
            .iter()
            .filter(|r| r.is_learned)
            .map(Secret::from)
            .collect();
        for secret in truths {
            self.state.learn_secret(secret);
        }
        self.state.recount_equipment();

        self.note(format!(
            "{} completes verification at {}. {learned} truth(s) learned, {dismissed} false rumor(s) dismissed.",
            self.state.inquisitor_name,
            VERIFICATION_LOCATION.name()
        ));
        Ok(Outcome::new(format!(
            "Verification complete. {learned} truths learned, {dismissed} false rumors dismissed."
        )))
    }

    fn try_hunt(&mut self) -> Result<Outcome, Rejection> {
        self.ensure_running()?;
        if !self.state.beast_is_here() {
            return Err(Rejection::BeastNotHere);
        }
        if self.state.actions_remaining == 0 {
            return Err(Rejection::NoActionsRemaining);
        }

        let dice = self.state.hunt_dice();
        if dice == 0 {
            self.state.wound(1);
            self.note("You have no dice for the hunt! You take 1 wound and the Beast survives.");
            self.after_failed_hunt();
            return Ok(Outcome::new("Hunt failed. You take 1 wound with no dice."));
        }

        let rolls = Die::D6.roll_many(dice, self.rng.as_mut());
        let lowest = rolls.iter().copied().min().unwrap_or(Die::D6.sides());
        tracing::debug!(?rolls, lowest, "hunt rolled");

        let inquisitor = self.state.inquisitor_name.clone();
        let outcome = if lowest <= HUNT_SLAY_MAX {
            self.note(format!(
                "HUNT SUCCESS! {inquisitor} has slain the {}!",
                self.state.beast_name
            ));
            self.end_game(true);
            "Victory! Beast slain!"
        } else if lowest <= HUNT_GRAZE_MAX {
            self.state.wound(1);
            self.note(format!("The Beast survives! {inquisitor} takes 1 wound."));
            self.after_failed_hunt();
            "Beast survives. You take 1 wound."
        } else {
            self.state.wound(2);
            self.note(format!("The Beast is unharmed! {inquisitor} takes 2 wounds."));
            self.after_failed_hunt();
            "Beast unharmed. You take 2 wounds."
        };

        Ok(Outcome {
            message: format!("Hunt complete. {outcome}"),
            dice: Some(rolls),
        })
    }

    /// Fall if the wounds are fatal, otherwise return to taking actions.
    fn after_failed_hunt(&mut self) {
        if self.state.is_fatally_wounded() {
            self.end_game(false);
        } else {
            self.set_phase(GamePhase::TakeActions);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::tests::{opening, scripted};
    use crate::random::ScriptedRandom;
    use crate::state::GamePhase;
    use eb_core::{Category, LocationId, Rumor, Secret};

    fn secret(i: usize) -> Secret {
        Secret {
            id: format!("secret-{i}"),
            secret: format!("Ancient Secret {i}"),
            category: if i % 2 == 0 { Category::Ward } else { Category::Weapon },
        }
    }

    fn rumor(i: usize, category: Category) -> Rumor {
        Rumor::new(format!("rumor-{i}"), LocationId::I, format!("note {i}"), category)
    }

    // -----------------------------------------------------------------------
    // move
    // -----------------------------------------------------------------------

    #[test]
    fn move_to_neighbor() {
        let mut engine = scripted(opening());
        let r = engine.move_player(LocationId::IV);
        assert!(r.success);
        assert_eq!(r.message, "Moved to London Bridge");
        assert_eq!(r.game_data.state.player_location, LocationId::IV);
        // Moving does not spend an action.
        assert_eq!(r.game_data.state.actions_remaining, 2);
        assert!(
            r.game_log
                .last()
                .is_some_and(|e| e.message == "[Round 1] Agnes moves to London Bridge (Location IV).")
        );
    }

    #[test]
    fn move_to_distant_location_is_refused() {
        let mut engine = scripted(opening());
        let before = engine.snapshot();
        let log_len = engine.log().len();

        let r = engine.move_player(LocationId::VIII);

        assert!(!r.success);
        assert_eq!(r.message, "Cannot move to VIII from II. Must be adjacent location.");
        assert_eq!(r.game_data, before);
        assert_eq!(engine.log().len(), log_len);
    }

    #[test]
    fn moving_onto_the_beast_forces_a_hunt() {
        let mut engine = scripted(opening());
        engine.state.beast_location = Some(LocationId::V);
        engine.state.beast_distance = Some(1);

        let r = engine.move_player(LocationId::V);

        assert!(r.success);
        let s = &r.game_data.state;
        assert_eq!(s.game_phase, GamePhase::Hunt);
        assert_eq!(s.beast_distance, Some(0));
        assert!(
            r.game_log
                .iter()
                .any(|e| e.message.contains("SURPRISE! Beast is here at St. Thomas' Hospital"))
        );
    }

    #[test]
    fn moving_updates_beast_distance() {
        let mut engine = scripted(opening());
        engine.state.beast_location = Some(LocationId::VIII);
        engine.state.beast_distance = Some(2);
        engine.move_player(LocationId::I);
        assert_eq!(engine.state().beast_distance, Some(3));
    }

    #[test]
    fn hunt_phase_blocks_other_actions() {
        let mut engine = scripted(opening());
        engine.state.beast_location = Some(LocationId::V);
        engine.move_player(LocationId::V);

        assert!(!engine.move_player(LocationId::II).success);
        assert!(!engine.investigate().success);
        let r = engine.verify_rumors();
        assert_eq!(
            r.message,
            "The Beast is upon you! You must hunt before doing anything else."
        );
    }

    // -----------------------------------------------------------------------
    // investigate
    // -----------------------------------------------------------------------

    #[test]
    fn investigate_takes_token_and_adds_rumor() {
        let mut engine = scripted(opening().then_pick(0, 8));
        engine.move_player(LocationId::IV);

        let r = engine.investigate();

        assert!(r.success);
        assert_eq!(r.message, "Investigation complete. New rumor added.");
        let s = &r.game_data.state;
        assert!(!s.has_token(LocationId::IV));
        assert_eq!(s.investigations_completed, 1);
        let rumor = &s.investigation.rumors[0];
        assert_eq!(rumor.id, "rumor-1");
        assert_eq!(rumor.location, LocationId::IV);
        assert_eq!(rumor.note, "The creature moves only at night...");
        assert_eq!(rumor.category, Category::Ward);
        assert!(!rumor.verified);
    }

    #[test]
    fn investigate_without_token_is_refused() {
        let mut engine = scripted(opening());
        let before = engine.snapshot();
        let r = engine.investigate();
        assert!(!r.success);
        assert_eq!(r.message, "No Rumor Token at this location to investigate!");
        assert_eq!(r.game_data, before);
    }

    #[test]
    fn investigate_without_actions_is_refused() {
        let mut engine = scripted(opening());
        engine.state.place_token(LocationId::II);
        engine.state.actions_remaining = 0;
        let r = engine.investigate();
        assert!(!r.success);
        assert_eq!(r.message, "No actions remaining");
        assert!(engine.state().has_token(LocationId::II));
    }

    #[test]
    fn rumors_are_unique_until_the_pool_runs_dry() {
        let mut engine = scripted(opening());
        let mut seen = std::collections::HashSet::new();
        for &location in LocationId::all() {
            engine.state.player_location = location;
            engine.state.place_token(location);
            engine.state.actions_remaining = 2;

            assert!(engine.investigate().success);
            let note = engine.state.investigation.rumors.last().unwrap().note.clone();
            assert!(seen.insert(note), "repeated rumor at {location}");
        }
        assert_eq!(seen.len(), 8);
    }

    // -----------------------------------------------------------------------
    // verify
    // -----------------------------------------------------------------------

    #[test]
    fn verify_away_from_all_hallows_is_refused() {
        let mut engine = scripted(opening());
        engine.state.investigation.rumors.push(rumor(1, Category::Ward));
        engine.move_player(LocationId::I);
        let r = engine.verify_rumors();
        assert!(!r.success);
        assert_eq!(
            r.message,
            "You can only verify rumors at All-Hallows-The-Great (Location II)!"
        );
    }

    #[test]
    fn verify_with_nothing_to_verify_is_refused() {
        let mut engine = scripted(opening());
        let r = engine.verify_rumors();
        assert!(!r.success);
        assert_eq!(r.message, "You have no unverified rumors to verify!");
    }

    #[test]
    fn verify_splits_truth_from_falsehood() {
        let mut engine = scripted(opening().then_face(4, 6).then_face(5, 6).then_face(1, 6));
        engine.state.investigation.rumors.push(rumor(1, Category::Ward));
        engine.state.investigation.rumors.push(rumor(2, Category::Weapon));
        engine.state.investigation.rumors.push(rumor(3, Category::Weapon));

        let r = engine.verify_rumors();

        assert!(r.success);
        assert_eq!(
            r.message,
            "Verification complete. 2 truths learned, 1 false rumors dismissed."
        );
        let s = &r.game_data.state;
        let rumors = &s.investigation.rumors;
        assert!(rumors.iter().all(|r| r.verified));
        assert!(rumors[0].is_learned && !rumors[0].is_false);
        assert!(rumors[1].is_false && !rumors[1].is_learned);
        assert!(rumors[2].is_learned);

        let ids: Vec<&str> = s.investigation.secrets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["rumor-1", "rumor-3"]);
        assert_eq!(s.wards.len(), 1);
        assert_eq!(s.weapons.len(), 1);
        assert_eq!(s.equipment_collected, 2);
    }

    #[test]
    fn verify_skips_already_verified_rumors() {
        let mut engine = scripted(opening().then_face(1, 6).then_face(2, 6));
        engine.state.investigation.rumors.push(rumor(1, Category::Ward));
        engine.verify_rumors();
        engine.state.investigation.rumors.push(rumor(2, Category::Ward));

        let r = engine.verify_rumors();

        let s = &r.game_data.state;
        assert_eq!(s.investigation.secrets.len(), 2);
        assert_eq!(s.wards.len(), 2);
        assert_eq!(s.equipment_collected, 2);
    }

    // -----------------------------------------------------------------------
    // hunt
    // -----------------------------------------------------------------------

    fn hunting(script: ScriptedRandom, secrets: usize) -> crate::GameEngine {
        let mut engine = scripted(script);
        engine.state.beast_location = Some(engine.state.player_location);
        engine.state.beast_distance = Some(0);
        engine.state.investigation.secrets = (0..secrets).map(secret).collect();
        engine
    }

    #[test]
    fn hunt_elsewhere_is_refused() {
        let mut engine = scripted(opening());
        engine.state.beast_location = Some(LocationId::VII);
        let r = engine.hunt_beast();
        assert!(!r.success);
        assert_eq!(r.message, "You must be in the same location as the Beast to hunt!");
        assert!(r.dice_rolls.is_none());
    }

    #[test]
    fn hunt_before_beast_appears_is_refused() {
        let mut engine = scripted(opening());
        assert!(!engine.hunt_beast().success);
    }

    #[test]
    fn hunt_rolls_one_die_per_secret() {
        let mut engine = hunting(opening(), 4);
        let r = engine.hunt_beast();
        assert!(r.success);
        assert_eq!(r.dice_rolls.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn hunt_dice_capped_at_five() {
        let mut engine = hunting(opening(), 9);
        let r = engine.hunt_beast();
        assert_eq!(r.dice_rolls.as_ref().map(Vec::len), Some(5));
    }

    #[test]
    fn hunt_without_secrets_costs_a_wound() {
        let mut engine = hunting(opening(), 0);
        engine.state.game_phase = GamePhase::Hunt;

        let r = engine.hunt_beast();

        assert!(r.success);
        assert_eq!(r.message, "Hunt failed. You take 1 wound with no dice.");
        assert!(r.dice_rolls.is_none());
        let s = &r.game_data.state;
        assert_eq!(s.wounds, 1);
        assert_eq!(s.health, 2);
        assert_eq!(s.game_phase, GamePhase::TakeActions);
        assert!(!s.game_ended);
    }

    #[test]
    fn third_wound_without_dice_is_fatal() {
        let mut engine = hunting(opening(), 0);
        engine.state.wound(2);

        let r = engine.hunt_beast();

        assert!(r.success);
        assert!(r.dice_rolls.is_none());
        let s = &r.game_data.state;
        assert_eq!(s.wounds, 3);
        assert_eq!(s.health, 0);
        assert!(s.game_ended);
        assert!(!s.victorious);
        assert_eq!(s.game_phase, GamePhase::GameEnded);
        assert!(!engine.hunt_beast().success);
    }

    #[test]
    fn seeded_hunt_with_four_mixed_secrets_rolls_four_dice() {
        let mut engine = crate::GameEngine::new("Beast", "Agnes", Some(999));
        engine.state.beast_location = Some(engine.state.player_location);
        engine.state.beast_distance = Some(0);
        engine.state.investigation.secrets = (0..4).map(secret).collect();
        let categories: Vec<Category> = engine
            .state
            .investigation
            .secrets
            .iter()
            .map(|s| s.category)
            .collect();
        assert!(categories.contains(&Category::Ward) && categories.contains(&Category::Weapon));

        let r = engine.hunt_beast();

        assert!(r.success);
        let rolls = r.dice_rolls.expect("hunt with secrets rolls dice");
        assert_eq!(rolls.len(), 4);
        assert!(rolls.iter().all(|d| (1..=6).contains(d)));
        assert_eq!(r.lowest_roll, rolls.iter().copied().min());
    }

    #[test]
    fn lowest_die_of_two_slays_the_beast() {
        let mut engine = hunting(opening().then_face(6, 6).then_face(2, 6), 2);

        let r = engine.hunt_beast();

        assert_eq!(r.dice_rolls, Some(vec![6, 2]));
        assert_eq!(r.lowest_roll, Some(2));
        assert_eq!(r.message, "Hunt complete. Victory! Beast slain!");
        let s = &r.game_data.state;
        assert!(s.game_ended);
        assert!(s.victorious);
        assert_eq!(s.game_phase, GamePhase::GameEnded);
        assert!(
            r.game_log
                .last()
                .is_some_and(|e| e.message == "[Round 1] VICTORY! Agnes has defeated Beast!")
        );
    }

    #[test]
    fn middling_die_costs_one_wound() {
        let mut engine = hunting(opening().then_face(3, 6).then_face(5, 6), 2);
        let r = engine.hunt_beast();
        assert_eq!(r.lowest_roll, Some(3));
        let s = &r.game_data.state;
        assert_eq!(s.wounds, 1);
        assert!(!s.game_ended);
        assert_eq!(s.game_phase, GamePhase::TakeActions);
    }

    #[test]
    fn high_die_costs_two_wounds() {
        let mut engine = hunting(opening().then_face(5, 6), 1);
        let r = engine.hunt_beast();
        assert_eq!(r.message, "Hunt complete. Beast unharmed. You take 2 wounds.");
        assert_eq!(r.game_data.state.wounds, 2);
        assert_eq!(r.game_data.state.health, 1);
    }

    #[test]
    fn third_wound_is_fatal() {
        let mut engine = hunting(opening().then_face(6, 6), 1);
        engine.state.wound(2);

        let r = engine.hunt_beast();

        let s = &r.game_data.state;
        assert_eq!(s.wounds, 4);
        assert_eq!(s.health, 0);
        assert!(s.game_ended);
        assert!(!s.victorious);
        assert_eq!(s.game_phase, GamePhase::GameEnded);
        assert!(
            r.game_log
                .last()
                .is_some_and(|e| e.message.contains("DEFEAT! Agnes has fallen in combat."))
        );
    }

    #[test]
    fn no_actions_after_the_end() {
        let mut engine = hunting(opening().then_face(1, 6), 1);
        engine.hunt_beast();
        assert!(engine.state().game_ended);
        assert!(!engine.hunt_beast().success);
        assert!(!engine.move_player(LocationId::I).success);
        assert!(!engine.complete_action().success);
    }
}
