use chrono::{DateTime, Utc};
use lexigrid_engine::{PlacementToken, PoolSeed, ScoringRule};
use serde::{Deserialize, Serialize};

/// Recorded game with enough metadata to replay it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedGame {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed of the tile pool
    pub seed: PoolSeed,
    /// Scoring rule the game was played with
    pub scoring: ScoringRule,
    /// Player names in turn order
    pub players: Vec<String>,
    /// Score of each player when the game ended, in turn order
    pub final_scores: Vec<u32>,
    /// Applied placements in the order they were played
    pub turns: Vec<TurnRecord>,
}

/// One applied placement.
///
/// Rejected and malformed commands are not recorded: they leave the game
/// state untouched, so replaying only the applied turns reproduces the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Applied-turn number (0-indexed)
    pub turn: usize,
    /// Turn index of the player who placed
    pub player: usize,
    pub word: String,
    pub tokens: Vec<PlacementToken>,
    /// Points the placement earned
    pub score: u32,
}
