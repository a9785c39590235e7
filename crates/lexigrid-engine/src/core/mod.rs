//! Core value types and the board.
//!
//! - [`Letter`] / [`LetterTile`] - letter symbols, point values and the tile distribution
//! - [`LetterCounts`] - multiset of letters
//! - [`Coordinate`] / [`Direction`] - bounds-checked board addressing
//! - [`Premium`] / [`PremiumTable`] - premium squares
//! - [`Board`] - the 15×15 grid

pub use self::{board::*, coordinate::*, letter::*, letter_counts::*, premium::*};

pub(crate) mod board;
pub(crate) mod coordinate;
pub(crate) mod letter;
pub(crate) mod letter_counts;
pub(crate) mod premium;
