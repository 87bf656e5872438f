//! Configuration for a new game.

/// Configuration for a game engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Name of the Beast being hunted.
    pub beast_name: String,
    /// Name of the player character.
    pub inquisitor_name: String,
    /// RNG seed. `None` derives one from the clock.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            beast_name: "The Eleventh Beast".to_string(),
            inquisitor_name: "The Inquisitor".to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the Beast's name.
    pub fn with_beast_name(mut self, name: impl Into<String>) -> Self {
        self.beast_name = name.into();
        self
    }

    /// Set the Inquisitor's name.
    pub fn with_inquisitor_name(mut self, name: impl Into<String>) -> Self {
        self.inquisitor_name = name.into();
        self
    }

    /// The configured seed, or one taken from the current Unix time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| chrono::Utc::now().timestamp().unsigned_abs())
    }
}
