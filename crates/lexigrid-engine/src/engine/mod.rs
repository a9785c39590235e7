//! Game rules and turn sequencing.
//!
//! This module builds the rules of play on top of the [`core`](crate::core)
//! data structures:
//!
//! - [`TilePool`] - Seeded reserve of undealt tiles
//! - [`Hand`] - A player's rack, as a multiset of letters
//! - [`Placement`] - A word to lay down, token by token
//! - [`ScoringEngine`] - Points for a placement, with or without premium squares
//! - [`Dictionary`] - Word list behind the [`WordValidator`] seam
//! - [`TurnController`] - The turn state machine
//!
//! # Game Flow
//!
//! 1. Create a [`TurnController`] from a [`GameConfig`]; every player is dealt
//!    [`Hand::CAPACITY`] tiles
//! 2. The current player issues a [`Command`]
//! 3. An accepted placement is scored, written to the board, and the hand is
//!    refilled; play passes to the next player
//! 4. A rejected placement changes nothing and the same player goes again
//! 5. Repeat until a player quits
//!
//! # Example
//!
//! ```
//! use lexigrid_engine::{
//!     Command, Coordinate, Dictionary, GameConfig, Placement, PlacementToken, TurnController,
//!     TurnOutcome,
//! };
//!
//! let dictionary = Dictionary::parse("A\nI\nO\n");
//! let mut game = TurnController::new(GameConfig::default(), Box::new(dictionary)).unwrap();
//!
//! // Play any single vowel the first player happens to hold.
//! let vowel = game
//!     .current_player()
//!     .hand()
//!     .letters()
//!     .iter()
//!     .find(|l| matches!(l.as_char(), 'A' | 'I' | 'O'));
//!
//! if let Some(letter) = vowel {
//!     let token = PlacementToken::new(Coordinate::new(7, 7).unwrap(), letter);
//!     let placement = Placement::from_tokens([token]).unwrap();
//!     let outcome = game.submit(Command::Place(placement)).unwrap();
//!     assert!(matches!(outcome, TurnOutcome::Applied(_)));
//!     assert_eq!(game.current_player().turn_index(), 1);
//! }
//! ```

pub use self::{
    dictionary::*, hand::*, placement::*, player::*, scoring::*, tile_pool::*,
    turn_controller::*,
};

mod dictionary;
mod hand;
mod placement;
mod player;
mod scoring;
mod tile_pool;
mod turn_controller;
