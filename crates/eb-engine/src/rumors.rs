//! Rumor generation.
//!
//! The state machine only asks for "a rumor nobody has heard yet"; where the
//! text comes from is up to the [`RumorSource`]. [`RumorPool`] draws from a
//! fixed table.

use eb_core::{Category, Rumor};
use serde::{Deserialize, Serialize};

use crate::dice::pick_index;
use crate::error::{EngineError, EngineResult};
use crate::random::RandomSource;

/// The content of a rumor before it is placed on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RumorDraft {
    /// The rumor text.
    pub note: String,
    /// Equipment category the rumor points to.
    pub category: Category,
}

impl RumorDraft {
    /// Create a draft.
    pub fn new(note: impl Into<String>, category: Category) -> Self {
        Self {
            note: note.into(),
            category,
        }
    }
}

/// Produces rumors for investigations.
pub trait RumorSource: Send {
    /// Produce a rumor whose note does not appear in `known`, if any remain.
    ///
    /// Implementations must consume randomness only from `rng`.
    fn next_rumor(&mut self, known: &[Rumor], rng: &mut dyn RandomSource) -> RumorDraft;
}

/// The built-in rumor table.
pub const DEFAULT_RUMORS: &[(&str, Category)] = &[
    ("The creature moves only at night...", Category::Ward),
    ("It feeds on the sins of men...", Category::Weapon),
    ("A red cross marks its true name...", Category::Ward),
    ("It fears running water and iron...", Category::Weapon),
    ("The beast was summoned by dark rituals...", Category::Ward),
    ("Its screams can shatter the mind...", Category::Weapon),
    ("It leaves no trace, only destruction...", Category::Ward),
    ("Some say it is immortal...", Category::Weapon),
];

/// Draws rumors from a fixed table, never repeating one until all are known.
#[derive(Debug, Clone)]
pub struct RumorPool {
    entries: Vec<RumorDraft>,
}

impl Default for RumorPool {
    fn default() -> Self {
        Self {
            entries: DEFAULT_RUMORS
                .iter()
                .map(|(note, category)| RumorDraft::new(*note, *category))
                .collect(),
        }
    }
}

impl RumorPool {
    /// A pool over custom entries. An empty list falls back to the built-in table.
    pub fn new(entries: Vec<RumorDraft>) -> Self {
        if entries.is_empty() {
            Self::default()
        } else {
            Self { entries }
        }
    }

    /// Read a rumor table, one `<category>: <note>` entry per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. A table with no
    /// entries yields the built-in pool.
    ///
    /// ```
    /// use eb_engine::RumorPool;
    ///
    /// let pool = RumorPool::parse("ward: Salt on the sill\nweapon: A silver nail").unwrap();
    /// assert_eq!(pool.entries().len(), 2);
    /// ```
    pub fn parse(text: &str) -> EngineResult<Self> {
        let mut entries = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((category, note)) = line.split_once(':') else {
                return Err(EngineError::MalformedRumor {
                    line: index + 1,
                    text: line.to_string(),
                });
            };
            let note = note.trim();
            if note.is_empty() {
                return Err(EngineError::MalformedRumor {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
            entries.push(RumorDraft::new(note, category.parse::<Category>()?));
        }
        Ok(Self::new(entries))
    }

    /// All entries in the pool.
    pub fn entries(&self) -> &[RumorDraft] {
        &self.entries
    }

    /// Entries whose note has not yet been heard.
    pub fn unheard(&self, known: &[Rumor]) -> Vec<&RumorDraft> {
        self.entries
            .iter()
            .filter(|e| !known.iter().any(|r| r.note == e.note))
            .collect()
    }
}

impl RumorSource for RumorPool {
    fn next_rumor(&mut self, known: &[Rumor], rng: &mut dyn RandomSource) -> RumorDraft {
        let unheard = self.unheard(known);
        let choices: Vec<&RumorDraft> = if unheard.is_empty() {
            self.entries.iter().collect()
        } else {
            unheard
        };
        // `entries` is never empty, so neither is `choices`.
        let index = pick_index(choices.len(), rng).unwrap_or(0);
        choices[index].clone()
    }
}
