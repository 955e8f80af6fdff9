use std::fmt;
use strum_macros::EnumIter;
use thiserror::Error;

/// Errors produced when parsing a player's guess from an input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("expected exactly 3 digits, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a digit between 1 and 9")]
    InvalidDigit(char),
    #[error("digit {0} appears more than once")]
    RepeatedDigit(Digit),
}

/// A single game digit. Zero is not part of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Digit {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl Digit {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<char> for Digit {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1' => Ok(Digit::One),
            '2' => Ok(Digit::Two),
            '3' => Ok(Digit::Three),
            '4' => Ok(Digit::Four),
            '5' => Ok(Digit::Five),
            '6' => Ok(Digit::Six),
            '7' => Ok(Digit::Seven),
            '8' => Ok(Digit::Eight),
            '9' => Ok(Digit::Nine),
            _ => Err(GuessError::InvalidDigit(c)),
        }
    }
}

/// Three distinct digits submitted by the player for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Guess([Digit; 3]);

impl Guess {
    pub fn digits(&self) -> &[Digit; 3] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl TryFrom<&str> for Guess {
    type Error = GuessError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 3 {
            return Err(GuessError::WrongLength(chars.len()));
        }

        let mut digits = [Digit::One; 3];
        for (index, c) in chars.iter().enumerate() {
            let digit = Digit::try_from(*c)?;
            if digits[..index].contains(&digit) {
                return Err(GuessError::RepeatedDigit(digit));
            }
            digits[index] = digit;
        }

        Ok(Guess(digits))
    }
}
