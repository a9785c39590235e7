use tracing::{debug, warn};

use super::{
    coordinate::{BOARD_SIZE, Coordinate},
    letter::LetterTile,
    premium::{Premium, PremiumTable},
};

/// Row-major grid of cells; `grid[row][col]`.
pub type Grid = [[Option<LetterTile>; BOARD_SIZE]; BOARD_SIZE];

/// The 15×15 playing grid and its premium squares.
///
/// All mutation goes through [`Board::place`], which writes unconditionally.
/// Whether a placement is legal is decided before it reaches the board; the
/// board itself never rejects a write.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Board, Coordinate, Letter, LetterTile};
///
/// let mut board = Board::new();
/// let center = Coordinate::new(7, 7).unwrap();
///
/// let displaced = board.place([(center, LetterTile::new(Letter::A))]);
/// assert!(displaced.is_empty());
/// assert_eq!(board.tile_at(center), Some(LetterTile::new(Letter::A)));
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    premiums: PremiumTable,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: usize = BOARD_SIZE;

    /// Creates an empty board with the standard premium layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_premium_table(PremiumTable::standard())
    }

    /// Creates an empty board with a custom premium layout.
    #[must_use]
    pub fn with_premium_table(premiums: PremiumTable) -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            premiums,
        }
    }

    /// Writes each tile to its cell, replacing whatever was there.
    ///
    /// Returns the tiles that were displaced, in write order. Callers that track
    /// tile conservation are responsible for putting them somewhere.
    pub fn place<I>(&mut self, cells: I) -> Vec<LetterTile>
    where
        I: IntoIterator<Item = (Coordinate, LetterTile)>,
    {
        let mut displaced = vec![];
        for (coord, tile) in cells {
            let cell = &mut self.grid[coord.row()][coord.col()];
            if let Some(previous) = cell.replace(tile) {
                warn!(%coord, old = %previous.letter(), new = %tile.letter(), "overwriting occupied cell");
                displaced.push(previous);
            } else {
                debug!(%coord, letter = %tile.letter(), "tile placed");
            }
        }
        displaced
    }

    #[must_use]
    pub fn premium_at(&self, coord: Coordinate) -> Option<Premium> {
        self.premiums.get(coord)
    }

    #[must_use]
    pub fn premium_table(&self) -> &PremiumTable {
        &self.premiums
    }

    #[must_use]
    pub fn tile_at(&self, coord: Coordinate) -> Option<LetterTile> {
        self.grid[coord.row()][coord.col()]
    }

    #[must_use]
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.tile_at(coord).is_some()
    }

    /// Returns the number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Returns a read-only view of the whole grid.
    #[must_use]
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<LetterTile>; BOARD_SIZE]> {
        self.grid.iter()
    }
}
