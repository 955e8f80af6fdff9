use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use crate::game::{SessionOutcome, Winner};

use super::{PartitionStats, RecordError, RecordRepository, RecordTally, SessionResult, Stats};

/// Assigns session ids, finalizes outcomes into immutable results and
/// derives statistics over everything recorded so far.
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Turns a finished session into an identified result and records it.
    pub async fn finalize(&self, outcome: SessionOutcome) -> Result<SessionResult, RecordError> {
        let id = self.repository.tally().await?.total_games + 1;
        let result = SessionResult {
            id,
            started_at: outcome.started_at,
            ended_at: outcome.ended_at,
            attempt_count: outcome.attempt_count,
            winner: outcome.winner,
            history: outcome.history,
        };
        self.repository.record(result.clone()).await?;
        info!(
            id = result.id,
            winner = %result.winner,
            attempts = result.attempt_count,
            "session recorded"
        );
        Ok(result)
    }

    pub async fn all_results(&self) -> Result<Vec<SessionResult>, RecordError> {
        self.repository.all_results().await
    }

    pub async fn tally(&self) -> Result<RecordTally, RecordError> {
        self.repository.tally().await
    }

    pub async fn statistics(&self) -> Result<Stats, RecordError> {
        let results = self.repository.all_results().await?;
        Ok(compute_stats(&results))
    }
}

fn compute_stats(results: &[SessionResult]) -> Stats {
    let attempts = || results.iter().map(|r| r.attempt_count);
    Stats {
        total_games: results.len() as u32,
        min_attempts: attempts().min().unwrap_or(0),
        max_attempts: attempts().max().unwrap_or(0),
        player: partition_stats(results, Winner::Player),
        system: partition_stats(results, Winner::System),
    }
}

fn partition_stats(results: &[SessionResult], winner: Winner) -> PartitionStats {
    let attempts: Vec<u32> = results
        .iter()
        .filter(|r| r.winner == winner)
        .map(|r| r.attempt_count)
        .collect();

    if attempts.is_empty() {
        return PartitionStats::default();
    }

    let wins = attempts.len() as u32;
    let average_attempts = attempts.iter().sum::<u32>() as f64 / wins as f64;

    // BTreeMap iterates keys in ascending order, so on a tie the
    // smallest attempt count is kept.
    let mut frequencies: BTreeMap<u32, u32> = BTreeMap::new();
    for attempt in &attempts {
        *frequencies.entry(*attempt).or_default() += 1;
    }
    let mut most_frequent_attempts = 0;
    let mut best_count = 0;
    for (attempt, count) in frequencies {
        if count > best_count {
            most_frequent_attempts = attempt;
            best_count = count;
        }
    }

    PartitionStats {
        wins,
        average_attempts,
        most_frequent_attempts,
    }
}
