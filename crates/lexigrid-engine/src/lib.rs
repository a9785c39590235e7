//! Rules engine for a two-player word-placement board game.
//!
//! Players take turns laying words on a 15x15 board from a hand of seven
//! letter tiles drawn out of a shared pool. The crate is split in two layers:
//!
//! - [`core`] - Plain data: letters, coordinates, premium squares, the board
//! - [`engine`] - Rules: tile pool, hands, placements, scoring, turn sequencing
//!
//! Input parsing and rendering live outside this crate; a frontend drives a
//! game by implementing [`CommandSource`] or by calling
//! [`TurnController::submit`] directly.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
