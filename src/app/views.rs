//! Plain-text rendering of records and statistics.

use chrono::{DateTime, Utc};

use crate::record::{PartitionStats, SessionResult, Stats};

pub fn result_header(result: &SessionResult) -> String {
    format!(
        "- [{}] / started: {} / ended: {} / attempts: {} / winner: {}",
        result.id,
        format_time(result.started_at),
        format_time(result.ended_at),
        result.attempt_count,
        result.winner
    )
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y. %m. %d %H:%M").to_string()
}

pub fn stats_lines(stats: &Stats) -> Vec<String> {
    vec![
        format!("Total games: {}", stats.total_games),
        format!("Fewest attempts: {}", stats.min_attempts),
        format!("Most attempts: {}", stats.max_attempts),
        partition_line("Player", &stats.player),
        partition_line("Computer", &stats.system),
    ]
}

fn partition_line(name: &str, partition: &PartitionStats) -> String {
    format!(
        "{} wins: {} / average attempts: {:.2} / most frequent attempts: {}",
        name, partition.wins, partition.average_attempts, partition.most_frequent_attempts
    )
}
