use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::game::Winner;

use super::{RecordError, RecordTally, SessionResult};

/// Process-lifetime store of finished sessions. Touched only at
/// session boundaries, never mid-game.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Stores a result. Each finished session must be recorded exactly once.
    async fn record(&self, result: SessionResult) -> Result<(), RecordError>;
    /// All results in insertion order (insertion order is chronological).
    async fn all_results(&self) -> Result<Vec<SessionResult>, RecordError>;
    async fn tally(&self) -> Result<RecordTally, RecordError>;
}

#[derive(Debug, Default)]
struct RecordState {
    tally: RecordTally,
    results: Vec<SessionResult>,
}

#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    state: Arc<RwLock<RecordState>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RecordState::default())),
        }
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn record(&self, result: SessionResult) -> Result<(), RecordError> {
        let mut state = self.state.write().await;
        if state.results.iter().any(|r| r.id == result.id) {
            return Err(RecordError::AlreadyRecorded(result.id));
        }

        state.tally.total_games += 1;
        match result.winner {
            Winner::Player => state.tally.player_wins += 1,
            Winner::System => state.tally.system_wins += 1,
        }
        state.results.push(result);

        Ok(())
    }

    async fn all_results(&self) -> Result<Vec<SessionResult>, RecordError> {
        let state = self.state.read().await;
        Ok(state.results.clone())
    }

    async fn tally(&self) -> Result<RecordTally, RecordError> {
        let state = self.state.read().await;
        Ok(state.tally)
    }
}
