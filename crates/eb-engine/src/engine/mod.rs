//! The game engine: one game, its state machine, and its log.
//!
//! Every public operation runs to completion and returns an owned
//! [`ActionResponse`]. Refused operations change nothing.

mod actions;
mod beast;

use std::fmt;

use eb_core::LocationId;

use crate::calendar::next_day;
use crate::config::EngineConfig;
use crate::error::Rejection;
use crate::log::GameLog;
use crate::random::{RandomSource, SeededRandom};
use crate::rumors::{RumorPool, RumorSource};
use crate::snapshot::{ActionResponse, GameSnapshot, GameView};
use crate::state::{ACTIONS_PER_DAY, GamePhase, GameState};

/// What a successful action reports back.
struct Outcome {
    message: String,
    dice: Option<Vec<u32>>,
}

impl Outcome {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dice: None,
        }
    }
}

/// A single game of The Eleventh Beast.
///
/// Not synchronized: a host must not drive one engine from two threads at
/// once. Hosts usually keep engines in a [`crate::SessionRegistry`].
pub struct GameEngine {
    state: GameState,
    log: GameLog,
    rng: Box<dyn RandomSource>,
    rumors: Box<dyn RumorSource>,
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("log_entries", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Start a game. Without a seed, one is taken from the clock.
    pub fn new(
        beast_name: impl Into<String>,
        inquisitor_name: impl Into<String>,
        seed: Option<u64>,
    ) -> Self {
        let mut config = EngineConfig::default()
            .with_beast_name(beast_name)
            .with_inquisitor_name(inquisitor_name);
        config.seed = seed;
        Self::from_config(&config)
    }

    /// Start a game with seeded randomness and the built-in rumor table.
    pub fn from_config(config: &EngineConfig) -> Self {
        let seed = config.resolve_seed();
        Self::with_sources(
            &config.clone().with_seed(seed),
            Box::new(SeededRandom::new(seed)),
            Box::new(RumorPool::default()),
        )
    }

    /// Start a game with caller-supplied randomness and rumor content.
    ///
    /// The Beast's first approach is resolved before this returns.
    ///
    /// `GameState::seed` records `config.seed` and never looks at `rng`, so
    /// set it to whatever seeded `rng`. Left unset, the recorded seed is
    /// taken from the clock and cannot replay the game.
    pub fn with_sources(
        config: &EngineConfig,
        rng: Box<dyn RandomSource>,
        rumors: Box<dyn RumorSource>,
    ) -> Self {
        let seed = config.resolve_seed();
        let state = GameState::new(&config.beast_name, &config.inquisitor_name, seed);
        let mut log = GameLog::new();
        log.append(format!(
            "{} begins their investigation at {} on {} {}, {}.",
            state.inquisitor_name,
            state.player_location.name(),
            state.current_month,
            state.current_day,
            state.current_year,
        ));

        let mut engine = Self {
            state,
            log,
            rng,
            rumors,
        };
        tracing::info!(
            seed,
            beast = %engine.state.beast_name,
            inquisitor = %engine.state.inquisitor_name,
            "game started"
        );
        engine.run_approach_phase();
        engine
    }

    /// The live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The game log.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.state)
    }

    /// State, log, and the static map, for a client starting up.
    pub fn get_game_state(&self) -> GameView {
        GameView::new(&self.state, self.log.entries())
    }

    /// Spend one action. Spending the last one ends the day.
    pub fn complete_action(&mut self) -> ActionResponse {
        let result = self.try_complete_action();
        self.respond(result)
    }

    fn try_complete_action(&mut self) -> Result<Outcome, Rejection> {
        self.ensure_running()?;
        self.state.actions_remaining = self.state.actions_remaining.saturating_sub(1);
        if self.state.actions_remaining > 0 {
            return Ok(Outcome::new(format!(
                "Actions remaining: {}",
                self.state.actions_remaining
            )));
        }
        self.advance_day();
        Ok(Outcome::new(
            "New day begins! Beast approaches phase completed.",
        ))
    }

    /// Close the round, turn the calendar, and let the Beast approach.
    fn advance_day(&mut self) {
        self.note("All actions for this turn have been used. Proceeding to The Beast Approaches phase...");
        self.note(format!(
            "Day {} of {}. The round has ended.",
            self.state.current_day, self.state.current_month
        ));

        let (day, month) = next_day(self.state.current_day, self.state.current_month);
        self.state.current_day = day;
        self.state.current_month = month;
        self.state.current_round += 1;
        self.state.days_elapsed += 1;
        self.state.actions_remaining = ACTIONS_PER_DAY;

        self.note(format!(
            "Day {} of {}. The investigation continues...",
            self.state.current_day, self.state.current_month
        ));
        self.run_approach_phase();
    }

    /// Resolve the Beast's approach and settle on the phase the player sees.
    fn run_approach_phase(&mut self) {
        self.set_phase(GamePhase::BeastApproaches);
        let surprised = self.beast_approaches();
        let next = if surprised || self.state.beast_is_here() {
            GamePhase::Hunt
        } else {
            GamePhase::TakeActions
        };
        self.set_phase(next);
    }

    fn end_game(&mut self, victory: bool) {
        self.state.game_ended = true;
        self.state.victorious = victory;
        self.set_phase(GamePhase::GameEnded);
        let (inquisitor, beast) = (&self.state.inquisitor_name, &self.state.beast_name);
        let message = if victory {
            format!("VICTORY! {inquisitor} has defeated {beast}!")
        } else {
            format!("DEFEAT! {inquisitor} has fallen in combat.")
        };
        self.note(message);
        tracing::info!(
            victory,
            round = self.state.current_round,
            wounds = self.state.wounds,
            "game ended"
        );
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.state.game_phase != phase {
            tracing::info!(from = %self.state.game_phase, to = %phase, "phase change");
            self.state.game_phase = phase;
        }
    }

    /// Append a round-stamped line to the game log.
    fn note(&mut self, message: impl AsRef<str>) {
        self.log.append_round(self.state.current_round, message);
    }

    fn ensure_running(&self) -> Result<(), Rejection> {
        if self.state.game_ended {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }

    /// Refuse anything but the hunt while the Beast is upon the Inquisitor.
    fn ensure_free(&self) -> Result<(), Rejection> {
        self.ensure_running()?;
        if self.state.game_phase == GamePhase::Hunt {
            Err(Rejection::HuntInProgress)
        } else {
            Ok(())
        }
    }

    fn respond(&self, result: Result<Outcome, Rejection>) -> ActionResponse {
        match result {
            Ok(outcome) => {
                let response =
                    ActionResponse::accepted(outcome.message, &self.state, self.log.entries());
                match outcome.dice {
                    Some(rolls) => response.with_dice(rolls),
                    None => response,
                }
            }
            Err(reason) => {
                tracing::debug!(%reason, "action rejected");
                ActionResponse::rejected(&reason, &self.state, self.log.entries())
            }
        }
    }

    fn location_label(id: LocationId) -> String {
        format!("{} (Location {id})", id.name())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::state::{HOME_LOCATION, MAX_WOUNDS};

    /// Opening approach rolls IV: a token appears there and nothing else.
    pub(crate) fn opening() -> ScriptedRandom {
        ScriptedRandom::default().then_face(4, 8)
    }

    /// An engine driven entirely by `script`, starting with its opening roll.
    pub(crate) fn scripted(script: ScriptedRandom) -> GameEngine {
        GameEngine::with_sources(
            &EngineConfig::default()
                .with_seed(1)
                .with_beast_name("Beast")
                .with_inquisitor_name("Agnes"),
            Box::new(script),
            Box::new(RumorPool::default()),
        )
    }

    #[test]
    fn construction_opens_the_log_and_places_a_token() {
        let engine = scripted(opening());
        let s = engine.state();
        assert_eq!(s.player_location, HOME_LOCATION);
        assert_eq!(s.game_phase, GamePhase::TakeActions);
        assert!(s.has_token(LocationId::IV));
        assert!(s.beast_location.is_none());

        let messages = engine.log().messages();
        assert_eq!(
            messages[0],
            "Agnes begins their investigation at All-Hallows-The-Great on May 13, 1746."
        );
        assert!(messages[1].starts_with("[Round 1] THE BEAST APPROACHES"));
        assert!(messages[2].contains("A Rumor Token appears at London Bridge (Location IV)."));
    }

    #[test]
    fn new_with_seed_records_it() {
        let engine = GameEngine::new("Beast", "Agnes", Some(999));
        assert_eq!(engine.state().seed, 999);
        assert_eq!(engine.state().current_round, 1);
    }

    #[test]
    fn injected_sources_record_the_configured_seed() {
        let engine = scripted(opening());
        assert_eq!(engine.state().seed, 1);

        let seed = 31;
        let config = EngineConfig::default().with_seed(seed);
        let a = GameEngine::with_sources(
            &config,
            Box::new(SeededRandom::new(seed)),
            Box::new(RumorPool::default()),
        );
        let b = GameEngine::from_config(&config);
        assert_eq!(a.state().seed, seed);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn complete_action_counts_down() {
        let mut engine = scripted(opening());
        let r = engine.complete_action();
        assert!(r.success);
        assert_eq!(r.message, "Actions remaining: 1");
        assert_eq!(r.game_data.state.actions_remaining, 1);
        assert_eq!(r.game_data.state.current_round, 1);
    }

    #[test]
    fn last_action_advances_the_day() {
        // Second approach rolls VI: empty, no beast, so just a token.
        let mut engine = scripted(opening().then_face(6, 8));
        engine.complete_action();
        let before = engine.log().len();
        let r = engine.complete_action();

        assert!(r.success);
        let s = &r.game_data.state;
        assert_eq!(s.current_round, 2);
        assert_eq!(s.days_elapsed, 1);
        assert_eq!(s.actions_remaining, 2);
        assert_eq!(s.current_day, 14);
        assert_eq!(s.game_phase, GamePhase::TakeActions);
        assert!(s.has_token(LocationId::VI));

        let fresh: Vec<&str> = engine
            .log()
            .since(before)
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            fresh[0],
            "[Round 1] All actions for this turn have been used. Proceeding to The Beast Approaches phase..."
        );
        assert_eq!(fresh[1], "[Round 1] Day 13 of May. The round has ended.");
        assert_eq!(fresh[2], "[Round 2] Day 14 of May. The investigation continues...");
        assert!(fresh[3].starts_with("[Round 2] THE BEAST APPROACHES"));
    }

    #[test]
    fn month_rolls_over_after_day_31() {
        let mut engine = scripted(opening());
        engine.state.current_day = 31;
        engine.complete_action();
        engine.complete_action();
        assert_eq!(engine.state().current_day, 1);
        assert_eq!(engine.state().current_month, crate::calendar::Month::June);
    }

    #[test]
    fn ended_game_is_read_only() {
        let mut engine = scripted(opening());
        engine.state.wound(MAX_WOUNDS);
        engine.end_game(false);
        let before = engine.snapshot();
        let log_len = engine.log().len();

        let r = engine.complete_action();
        assert!(!r.success);
        assert_eq!(r.message, "The game has ended.");
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.log().len(), log_len);
    }

    #[test]
    fn view_carries_map() {
        let engine = scripted(opening());
        let view = engine.get_game_state();
        assert!(view.success);
        assert_eq!(view.locations.len(), 8);
        assert_eq!(view.game_log.len(), engine.log().len());
    }
}
