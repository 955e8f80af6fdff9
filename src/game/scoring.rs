use std::fmt;

use super::digits::Guess;
use super::secret::Secret;

/// Strike and ball counts for one scored guess.
///
/// Invariants: `strikes + balls <= 3`, and `strikes == 3` implies
/// `balls == 0` (an exact match leaves nothing to count as a ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintOutcome {
    strikes: u8,
    balls: u8,
}

impl HintOutcome {
    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    /// The canonical win condition. Callers must branch on this rather
    /// than comparing rendered hint strings.
    pub fn is_win(&self) -> bool {
        self.strikes == 3
    }
}

impl fmt::Display for HintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.strikes, self.balls) {
            (0, 0) => write!(f, "Nothing"),
            (0, balls) => write!(f, "{}", counted(balls, "ball")),
            (strikes, 0) => write!(f, "{}", counted(strikes, "strike")),
            (strikes, balls) => {
                write!(f, "{} {}", counted(balls, "ball"), counted(strikes, "strike"))
            }
        }
    }
}

fn counted(count: u8, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Scores a guess against the secret in a single left-to-right pass:
/// a digit matching its own position is a strike, otherwise a digit
/// present anywhere in the secret is a ball. The branches are mutually
/// exclusive per position, so a strike is never double-counted.
pub fn score(secret: &Secret, guess: &Guess) -> HintOutcome {
    let mut strikes = 0;
    let mut balls = 0;

    for (index, digit) in guess.digits().iter().enumerate() {
        if secret.digits()[index] == *digit {
            strikes += 1;
        } else if secret.contains(*digit) {
            balls += 1;
        }
    }

    HintOutcome { strikes, balls }
}
