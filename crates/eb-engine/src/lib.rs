//! Rules engine for The Eleventh Beast.
//!
//! A [`GameEngine`] owns one game: the Inquisitor's position and wounds, the
//! rumors and secrets gathered so far, the Beast's whereabouts, and an
//! append-only game log. Every random decision is drawn from an injected
//! [`RandomSource`], so a seed plus a call sequence fully determines a game.
//! Hosts keep live games in a [`SessionRegistry`].

pub mod calendar;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod log;
pub mod random;
pub mod registry;
pub mod rumors;
pub mod snapshot;
pub mod state;

pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::{EngineError, EngineResult, Rejection};
pub use log::{GameLog, GameLogEntry};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use registry::{SessionId, SessionRegistry};
pub use rumors::{RumorDraft, RumorPool, RumorSource};
pub use snapshot::{ActionResponse, GameSnapshot, GameView, SCHEMA_VERSION};
pub use state::{GamePhase, GameState, Investigation};
