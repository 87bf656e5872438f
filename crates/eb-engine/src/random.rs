//! Sources of randomness for the engine.
//!
//! The engine never touches a global RNG. Each game owns one
//! [`RandomSource`]; every die roll and every random pick consumes exactly one
//! value from it, in call order.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A sequential stream of uniform values in `[0, 1)`.
pub trait RandomSource: Send {
    /// The next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Seed-derived randomness for real games.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a stream fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A fixed script of values, for tests that need exact rolls.
///
/// Once the script runs out every further value is `0.0`, which rolls the
/// lowest face.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f64>,
}

impl ScriptedRandom {
    /// Create a script from raw unit values.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append the value that makes a die with `sides` faces land on `face`.
    pub fn then_face(mut self, face: u32, sides: u32) -> Self {
        let sides = sides.max(1);
        let face = face.clamp(1, sides);
        self.values
            .push_back((f64::from(face) - 0.5) / f64::from(sides));
        self
    }

    /// Append the value that picks index `index` out of `len` choices.
    pub fn then_pick(self, index: usize, len: usize) -> Self {
        self.then_face(index as u32 + 1, len as u32)
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(0.0)
    }
}
