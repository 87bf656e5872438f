//! Live games keyed by session id.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::engine::GameEngine;
use crate::error::{EngineError, EngineResult};

/// Opaque handle for a hosted game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| EngineError::InvalidSessionId(s.to_string()))
    }
}

/// Owns every live game.
///
/// Games are independent: an action on one session never touches another.
/// Wrap the registry in a lock to share it across threads.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, GameEngine>,
}

impl SessionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game and return its id.
    pub fn create(&mut self, config: &EngineConfig) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, GameEngine::from_config(config));
        tracing::info!(session = %id, "session created");
        id
    }

    /// Host an already constructed game under a fresh id.
    pub fn insert(&mut self, engine: GameEngine) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, engine);
        id
    }

    /// Look up a game.
    pub fn get(&self, id: SessionId) -> EngineResult<&GameEngine> {
        self.sessions
            .get(&id)
            .ok_or(EngineError::SessionNotFound(id))
    }

    /// Look up a game for an action.
    pub fn get_mut(&mut self, id: SessionId) -> EngineResult<&mut GameEngine> {
        self.sessions
            .get_mut(&id)
            .ok_or(EngineError::SessionNotFound(id))
    }

    /// Run `f` against one game.
    pub fn with_session<R>(
        &mut self,
        id: SessionId,
        f: impl FnOnce(&mut GameEngine) -> R,
    ) -> EngineResult<R> {
        self.get_mut(id).map(f)
    }

    /// Drop a game, returning it if it existed.
    pub fn remove(&mut self, id: SessionId) -> Option<GameEngine> {
        let engine = self.sessions.remove(&id);
        if engine.is_some() {
            tracing::info!(session = %id, "session removed");
        }
        engine
    }

    /// Ids of every live game, sorted.
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no games are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
