use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// A participant: their rack and running score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
    score: u32,
    turn_index: usize,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, turn_index: usize) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            turn_index,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Position of this player in the turn order, starting at 0.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}
