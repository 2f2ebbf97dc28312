//! Dice sources for battle rolls

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::DIE_FACES;

/// Anything that can roll a battle die
pub trait Dice {
    /// Roll one die, returning a value in `1..=DIE_FACES`
    fn roll(&mut self) -> u8;
}

/// Seeded pseudo-random dice used in real games
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomDice {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed chosen at startup, reported so a game can be replayed
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Dice that replay a fixed script, cycling when it runs out
///
/// An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of dice rolled so far
    pub fn rolled(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.rolls.is_empty() {
            return 1;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}
