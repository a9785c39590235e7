use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Letter, LetterCounts, LetterTile};

/// A player's rack of tiles.
///
/// The rack nominally holds [`Hand::CAPACITY`] tiles. Since tiles are only
/// drawn to replace the ones just played, it never grows beyond that in
/// ordinary play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    letters: LetterCounts,
}

impl Hand {
    pub const CAPACITY: usize = 7;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the hand holds at least the requested count of each letter.
    #[must_use]
    pub fn contains(&self, required: &LetterCounts) -> bool {
        self.letters.covers(required)
    }

    /// Returns the letters of `required` that the hand lacks.
    #[must_use]
    pub fn missing(&self, required: &LetterCounts) -> LetterCounts {
        self.letters.shortfall(required)
    }

    /// Removes one tile with `letter`.
    ///
    /// Returns `false` and leaves the hand unchanged if there is none.
    #[must_use = "a failed removal means the hand did not hold the letter"]
    pub fn remove(&mut self, letter: Letter) -> bool {
        self.letters.remove(letter)
    }

    pub fn add(&mut self, tile: LetterTile) {
        self.letters.add(tile.letter());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn letters(&self) -> &LetterCounts {
        &self.letters
    }
}

impl Extend<LetterTile> for Hand {
    fn extend<T: IntoIterator<Item = LetterTile>>(&mut self, iter: T) {
        for tile in iter {
            self.add(tile);
        }
    }
}

impl FromIterator<LetterTile> for Hand {
    fn from_iter<T: IntoIterator<Item = LetterTile>>(iter: T) -> Self {
        let mut hand = Self::new();
        hand.extend(iter);
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.letters, f)
    }
}
