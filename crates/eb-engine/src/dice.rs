//! Dice used by the game rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// A polyhedral die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die: verification, beast movement, and the hunt.
    D6,
    /// Eight-sided die: where the Beast stirs.
    D8,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
        }
    }

    /// Roll once, consuming one value from `rng`.
    pub fn roll(self, rng: &mut dyn RandomSource) -> u32 {
        scale(rng.next_unit(), self.sides()) + 1
    }

    /// Roll `count` of this die, in order.
    pub fn roll_many(self, count: usize, rng: &mut dyn RandomSource) -> Vec<u32> {
        (0..count).map(|_| self.roll(rng)).collect()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Pick an index below `len` uniformly, consuming one value from `rng`.
///
/// Returns `None` only for an empty choice, which consumes nothing.
pub fn pick_index(len: usize, rng: &mut dyn RandomSource) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(scale(rng.next_unit(), len as u32) as usize)
}

fn scale(unit: f64, n: u32) -> u32 {
    let v = (unit.clamp(0.0, 1.0) * f64::from(n)).floor() as u32;
    v.min(n - 1)
}
