use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::{HistoryEntry, Winner};

/// An immutable record of one finished session. Created exactly once,
/// when the session terminates, and owned by the record repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    /// 1-based, monotonically increasing across the process.
    pub id: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub attempt_count: u32,
    pub winner: Winner,
    pub history: Vec<HistoryEntry>,
}

/// Running counters kept alongside the result list. Derivable from the
/// results, but maintained incrementally as each session is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTally {
    pub total_games: u32,
    pub player_wins: u32,
    pub system_wins: u32,
}

/// Aggregate statistics computed on demand over all stored results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_games: u32,
    /// 0 when no games have been recorded.
    pub min_attempts: u32,
    /// 0 when no games have been recorded.
    pub max_attempts: u32,
    pub player: PartitionStats,
    pub system: PartitionStats,
}

/// Statistics for one winner partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionStats {
    pub wins: u32,
    /// 0.0 when the partition is empty; rendered with two decimals.
    pub average_attempts: f64,
    /// The most common attempt count in the partition; ties break
    /// toward the smallest value. 0 when the partition is empty.
    pub most_frequent_attempts: u32,
}
