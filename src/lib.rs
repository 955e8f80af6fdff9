// Library crate for the number baseball game
// This file exposes the public API for integration tests

pub mod app;
pub mod console;
pub mod game;
pub mod record;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::App;
pub use console::{Console, StdConsole};
pub use game::{AttemptBudget, GameSession, Guess, Secret, SecretGenerator, ShuffledSecretGenerator};
pub use record::{InMemoryRecordRepository, RecordRepository, RecordService};
pub use shared::AppError;
