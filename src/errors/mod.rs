use thiserror::Error;

use crate::domain::models::Seat;

/// Invalid input to the uma adjuster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("invalid rank {rank} for the {seat} seat: ranks must be within 1..=4")]
    InvalidRank { seat: Seat, rank: u8 },
}

/// Validation failures while assembling a game record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecorderError {
    #[error("invalid player stats {input:?}: expected 5 or 8 comma-separated fields, found {found}")]
    StatsFieldCount { input: String, found: usize },
    #[error("invalid player stats {input:?}: {field} must be an integer")]
    StatsFieldValue { input: String, field: &'static str },
    #[error("invalid game date {0:?}: expected a calendar date as YYYYMMDD")]
    InvalidDate(String),
    #[error("invalid rank list {0:?}: expected four ranks, e.g. 2,1,4,3")]
    InvalidRankList(String),
    #[error("invalid uma table {0:?}: expected four numbers, e.g. 45,5,-15,-35")]
    InvalidUmaTable(String),
    #[error("per-seat stats must all use the 5-field form or all use the 8-field form")]
    MixedStatsVariants,
}
