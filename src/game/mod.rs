// Public API
pub use digits::{Digit, Guess, GuessError};
pub use scoring::{score, HintOutcome};
pub use secret::{Secret, SecretGenerator, ShuffledSecretGenerator};
pub use session::{
    AttemptBudget, BudgetError, GameSession, HistoryEntry, SessionError, SessionOutcome, Turn,
    Winner,
};

// Internal modules
mod digits;
mod scoring;
mod secret;
mod session;
