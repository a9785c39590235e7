use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 15;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("coordinate ({row}, {col}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board")]
pub struct CoordinateError {
    pub row: usize,
    pub col: usize,
}

/// A cell address on the board.
///
/// Both components are always within `0..BOARD_SIZE`; the only way to obtain a
/// `Coordinate` is through a bounds-checked constructor.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Coordinate, Direction};
///
/// let start = Coordinate::new(7, 13).unwrap();
/// assert_eq!(start.step(Direction::Horizontal, 1), Coordinate::new(7, 14).ok());
/// assert_eq!(start.step(Direction::Horizontal, 2), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordinateError { row, col });
        }
        Ok(Self::new_unchecked(row, col))
    }

    /// Like [`Self::new`], for compile-time tables whose entries are known to be valid.
    pub(crate) const fn new_const(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the coordinate `distance` cells away in `direction`, or `None`
    /// if that falls off the board.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Horizontal => (self.row(), self.col() + distance),
            Direction::Vertical => (self.row() + distance, self.col()),
        };
        Self::new(row, col).ok()
    }

    /// Iterates every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Self::new_unchecked(row, col)))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn new_unchecked(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row(), coord.col())
    }
}

/// Direction in which consecutive tokens of a placement advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_bounds() {
        assert!(Coordinate::new(0, 0).is_ok());
        assert!(Coordinate::new(14, 14).is_ok());
        assert!(Coordinate::new(15, 0).is_err());
        assert!(Coordinate::new(0, 15).is_err());

        let err = Coordinate::new(20, 3).unwrap_err();
        assert_eq!(err.row, 20);
        assert_eq!(err.col, 3);
    }

    #[test]
    fn test_step() {
        let c = Coordinate::new(3, 4).unwrap();
        assert_eq!(c.step(Direction::Horizontal, 0), Some(c));
        assert_eq!(c.step(Direction::Vertical, 2), Coordinate::new(5, 4).ok());
        assert_eq!(c.step(Direction::Vertical, 11), Coordinate::new(14, 4).ok());
        assert_eq!(c.step(Direction::Vertical, 12), None);
        assert_eq!(c.step(Direction::Horizontal, 10), Coordinate::new(3, 14).ok());
        assert_eq!(c.step(Direction::Horizontal, 11), None);
    }

    #[test]
    fn test_all_visits_every_cell_once() {
        let cells: Vec<_> = Coordinate::all().collect();
        assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(cells[0], Coordinate::new(0, 0).unwrap());
        assert_eq!(cells[BOARD_SIZE], Coordinate::new(1, 0).unwrap());
    }

    #[test]
    fn test_value_equality_and_hashing() {
        use std::collections::HashSet;

        let a = Coordinate::new(7, 3).unwrap();
        let b = Coordinate::new(7, 3).unwrap();
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_as_pair() {
        let c = Coordinate::new(2, 8).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[2,8]");
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Coordinate>("[15,0]").is_err());
    }
}
