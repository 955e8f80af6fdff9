use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

use super::digits::Digit;

/// The three distinct digits the computer is hiding for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret([Digit; 3]);

impl Secret {
    pub fn new(digits: [Digit; 3]) -> Self {
        Self(digits)
    }

    pub fn digits(&self) -> &[Digit; 3] {
        &self.0
    }

    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }
}

/// Source of fresh secrets, injected so tests can fix the digits.
pub trait SecretGenerator: Send + Sync {
    fn generate(&self) -> Secret;
}

/// Draws three digits without replacement from a shuffled 1-9 pool.
#[derive(Debug, Default)]
pub struct ShuffledSecretGenerator;

impl ShuffledSecretGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SecretGenerator for ShuffledSecretGenerator {
    fn generate(&self) -> Secret {
        let mut pool: Vec<Digit> = Digit::iter().collect();
        pool.shuffle(&mut rand::rng());
        Secret([pool[0], pool[1], pool[2]])
    }
}
