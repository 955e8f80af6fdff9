use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use super::digits::Guess;
use super::scoring::{score, HintOutcome};
use super::secret::Secret;

/// Maximum number of guesses the player may submit, fixed before play.
///
/// Validated at the boundary so a session can never start with a budget
/// that makes losing unreachable or winning impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttemptBudget(u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("the attempt count must be a whole number")]
    NotANumber,
    #[error("the attempt count must be at least 1")]
    NotPositive,
    #[error("the attempt count is too large")]
    TooLarge,
}

impl AttemptBudget {
    pub fn new(attempts: u32) -> Result<Self, BudgetError> {
        if attempts == 0 {
            return Err(BudgetError::NotPositive);
        }
        Ok(Self(attempts))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl FromStr for AttemptBudget {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let attempts: i64 = s.trim().parse().map_err(|_| BudgetError::NotANumber)?;
        if attempts < 1 {
            return Err(BudgetError::NotPositive);
        }
        let attempts = u32::try_from(attempts).map_err(|_| BudgetError::TooLarge)?;
        Self::new(attempts)
    }
}

/// Who won a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Winner {
    Player,
    System,
}

impl Winner {
    /// The announcement shown once when the session terminates. It is
    /// also the hint text of the terminal history entry.
    pub fn announcement(&self) -> &'static str {
        match self {
            Winner::Player => "You matched all three digits. You win!",
            Winner::System => "The computer wins.",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => write!(f, "Player"),
            Winner::System => write!(f, "Computer"),
        }
    }
}

/// One line of a session transcript. A `None` guess marks the terminal
/// win/loss message appended when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    pub guess: Option<Guess>,
    pub hint: String,
}

/// Outcome of submitting one valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Attempts remain and the guess was not a win.
    Continue(HintOutcome),
    /// All three digits matched in position.
    Won(HintOutcome),
    /// The attempt budget is exhausted.
    Lost(HintOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the session is still in progress")]
    StillInProgress,
    #[error("the session has already finished")]
    AlreadyFinished,
}

/// Everything a finished session hands over for record keeping. The
/// record service turns this into an identified, immutable result.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub attempt_count: u32,
    pub winner: Winner,
    pub history: Vec<HistoryEntry>,
}

/// One game from secret selection to a win or loss.
///
/// Invalid input never reaches the session: guesses arrive already
/// parsed, so every submission consumes exactly one attempt. The only
/// exits are `Turn::Won` and `Turn::Lost`.
#[derive(Debug)]
pub struct GameSession {
    secret: Secret,
    attempt_budget: AttemptBudget,
    submit_count: u32,
    winner: Option<Winner>,
    history: Vec<HistoryEntry>,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(secret: Secret, attempt_budget: AttemptBudget) -> Self {
        Self {
            secret,
            attempt_budget,
            submit_count: 0,
            winner: None,
            history: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Scores one valid guess, consuming an attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyFinished` if the session has
    /// already reached a terminal state.
    pub fn submit(&mut self, guess: Guess) -> Result<Turn, SessionError> {
        if self.winner.is_some() {
            return Err(SessionError::AlreadyFinished);
        }

        self.submit_count += 1;
        let hint = score(&self.secret, &guess);
        debug!(
            guess = %guess,
            attempt = self.submit_count,
            budget = self.attempt_budget.get(),
            hint = %hint,
            "scored guess"
        );

        self.history.push(HistoryEntry {
            guess: Some(guess),
            hint: hint.to_string(),
        });

        if hint.is_win() {
            self.finish(Winner::Player);
            Ok(Turn::Won(hint))
        } else if self.submit_count >= self.attempt_budget.get() {
            self.finish(Winner::System);
            Ok(Turn::Lost(hint))
        } else {
            Ok(Turn::Continue(hint))
        }
    }

    fn finish(&mut self, winner: Winner) {
        self.history.push(HistoryEntry {
            guess: None,
            hint: winner.announcement().to_string(),
        });
        self.winner = Some(winner);
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Consumes the finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StillInProgress` if no terminal state has
    /// been reached yet.
    pub fn into_outcome(self) -> Result<SessionOutcome, SessionError> {
        let winner = self.winner.ok_or(SessionError::StillInProgress)?;
        Ok(SessionOutcome {
            started_at: self.started_at,
            ended_at: Utc::now(),
            attempt_count: self.submit_count,
            winner,
            history: self.history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn secret(s: &str) -> Secret {
        Secret::new(*Guess::try_from(s).unwrap().digits())
    }

    fn guess(s: &str) -> Guess {
        Guess::try_from(s).unwrap()
    }

    fn budget(attempts: u32) -> AttemptBudget {
        AttemptBudget::new(attempts).unwrap()
    }

    #[rstest]
    #[case("5", Ok(5))]
    #[case(" 12 ", Ok(12))]
    #[case("4294967295", Ok(u32::MAX))]
    #[case("0", Err(BudgetError::NotPositive))]
    #[case("-3", Err(BudgetError::NotPositive))]
    #[case("abc", Err(BudgetError::NotANumber))]
    #[case("", Err(BudgetError::NotANumber))]
    #[case("2.5", Err(BudgetError::NotANumber))]
    // 2^32 must not truncate to a zero budget.
    #[case("4294967296", Err(BudgetError::TooLarge))]
    #[case("9999999999", Err(BudgetError::TooLarge))]
    fn test_budget_parsing(#[case] input: &str, #[case] expected: Result<u32, BudgetError>) {
        let parsed = input.parse::<AttemptBudget>();
        match expected {
            Ok(attempts) => assert_eq!(parsed.unwrap().get(), attempts),
            Err(err) => assert_eq!(parsed.unwrap_err(), err),
        }
    }

    #[test]
    fn test_correct_first_guess_wins_with_budget_one() {
        let mut session = GameSession::new(secret("123"), budget(1));
        let turn = session.submit(guess("123")).unwrap();
        assert!(matches!(turn, Turn::Won(hint) if hint.is_win()));

        let outcome = session.into_outcome().unwrap();
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.attempt_count, 1);
    }

    #[test]
    fn test_wrong_first_guess_loses_with_budget_one() {
        let mut session = GameSession::new(secret("123"), budget(1));
        let turn = session.submit(guess("456")).unwrap();
        assert!(matches!(turn, Turn::Lost(_)));

        let outcome = session.into_outcome().unwrap();
        assert_eq!(outcome.winner, Winner::System);
        assert_eq!(outcome.attempt_count, 1);
    }

    #[test]
    fn test_session_continues_while_attempts_remain() {
        let mut session = GameSession::new(secret("123"), budget(3));
        assert!(matches!(session.submit(guess("456")).unwrap(), Turn::Continue(_)));
        assert!(matches!(session.submit(guess("321")).unwrap(), Turn::Continue(_)));
        assert!(matches!(session.submit(guess("123")).unwrap(), Turn::Won(_)));
    }

    #[test]
    fn test_win_on_final_attempt_beats_exhaustion() {
        let mut session = GameSession::new(secret("123"), budget(2));
        assert!(matches!(session.submit(guess("456")).unwrap(), Turn::Continue(_)));
        assert!(matches!(session.submit(guess("123")).unwrap(), Turn::Won(_)));
        assert_eq!(session.winner(), Some(Winner::Player));
    }

    #[test]
    fn test_history_tracks_guesses_and_terminal_message() {
        let mut session = GameSession::new(secret("123"), budget(2));
        session.submit(guess("456")).unwrap();
        session.submit(guess("789")).unwrap();

        let outcome = session.into_outcome().unwrap();
        let guess_entries = outcome
            .history
            .iter()
            .filter(|entry| entry.guess.is_some())
            .count();
        assert_eq!(guess_entries as u32, outcome.attempt_count);

        let last = outcome.history.last().unwrap();
        assert!(last.guess.is_none());
        assert_eq!(last.hint, Winner::System.announcement());
    }

    #[test]
    fn test_submitting_after_finish_is_rejected() {
        let mut session = GameSession::new(secret("123"), budget(1));
        session.submit(guess("123")).unwrap();
        assert_eq!(
            session.submit(guess("456")).unwrap_err(),
            SessionError::AlreadyFinished
        );
    }

    #[test]
    fn test_outcome_requires_terminal_state() {
        let session = GameSession::new(secret("123"), budget(5));
        assert_eq!(
            session.into_outcome().unwrap_err(),
            SessionError::StillInProgress
        );
    }
}
