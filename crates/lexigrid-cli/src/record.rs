use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use lexigrid_engine::{AppliedTurn, GameConfig, Player, PoolSeed, ScoringRule};

use crate::schema::record::{RecordedGame, TurnRecord};

/// Applied turns of a game in progress.
///
/// Holds the setup the game was created with so that the recording can be
/// replayed against a fresh controller.
#[derive(Debug)]
pub struct GameHistory {
    seed: PoolSeed,
    scoring: ScoringRule,
    players: Vec<String>,
    turns: Vec<TurnRecord>,
}

impl GameHistory {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            seed: config.seed,
            scoring: config.scoring,
            players: config.player_names.clone(),
            turns: vec![],
        }
    }

    pub fn record(&mut self, applied: &AppliedTurn) {
        self.turns.push(TurnRecord {
            turn: applied.turn,
            player: applied.player,
            word: applied.placement.word(),
            tokens: applied.placement.tokens().to_vec(),
            score: applied.score.total,
        });
    }

    pub fn to_recorded_game(&self, players: &[Player]) -> RecordedGame {
        RecordedGame {
            recorded_at: Utc::now(),
            seed: self.seed,
            scoring: self.scoring,
            players: self.players.clone(),
            final_scores: players.iter().map(Player::score).collect(),
            turns: self.turns.clone(),
        }
    }

    /// Saves the recorded game to a JSON file.
    ///
    /// The filename is generated from the current timestamp:
    /// `game_{YYYYMMDD_HHMMSS}.json`
    ///
    /// # Arguments
    ///
    /// * `players` - Final state of the players, for the final scores
    /// * `record_dir` - Directory to save the recording (created if it doesn't exist)
    pub fn save(&self, players: &[Player], record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let data = self.to_recorded_game(players);
        let filename = format!("game_{}.json", data.recorded_at.format("%Y%m%d_%H%M%S"));
        let filepath = record_dir.join(filename);

        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &data)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        Ok(filepath)
    }
}
