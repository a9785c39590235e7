use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 26 letter symbols printed on a tile.
///
/// Each letter carries a fixed point value and a fixed number of copies in a
/// freshly created [`TilePool`](crate::TilePool). Blank tiles are not modeled.
///
/// # Example
///
/// ```
/// use lexigrid_engine::Letter;
///
/// assert_eq!(Letter::from_char('Q'), Some(Letter::Q));
/// assert_eq!(Letter::Q.point_value(), 10);
/// assert_eq!(Letter::E.tile_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

/// Point value of each letter, indexed by `Letter as usize`.
const POINT_VALUES: [u32; Letter::LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Number of copies of each letter in a new pool, indexed by `Letter as usize`.
const TILE_COUNTS: [u8; Letter::LEN] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

impl Letter {
    /// Number of letter symbols (26).
    pub const LEN: usize = 26;

    /// All letters in alphabetical order.
    pub const ALL: [Letter; Letter::LEN] = {
        use Letter::{A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z};
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ]
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the points a tile with this letter is worth.
    #[must_use]
    pub const fn point_value(self) -> u32 {
        POINT_VALUES[self as usize]
    }

    /// Returns how many tiles with this letter a new pool holds.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        TILE_COUNTS[self as usize] as usize
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Parses an uppercase ASCII letter.
    ///
    /// Lowercase input is rejected; callers that accept free-form input should
    /// upper-case it first.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self::ALL[(c as u8 - b'A') as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A letter tile.
///
/// The point value is fixed by the letter, so a tile can only be constructed
/// from a [`Letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterTile {
    letter: Letter,
}

impl LetterTile {
    #[must_use]
    pub const fn new(letter: Letter) -> Self {
        Self { letter }
    }

    #[must_use]
    pub const fn letter(self) -> Letter {
        self.letter
    }

    #[must_use]
    pub const fn point_value(self) -> u32 {
        self.letter.point_value()
    }
}

impl From<Letter> for LetterTile {
    fn from(letter: Letter) -> Self {
        Self::new(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversion_covers_alphabet() {
        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
        }
        assert_eq!(Letter::A.as_char(), 'A');
        assert_eq!(Letter::Z.as_char(), 'Z');
    }

    #[test]
    fn test_from_char_rejects_non_uppercase() {
        assert_eq!(Letter::from_char('a'), None);
        assert_eq!(Letter::from_char('('), None);
        assert_eq!(Letter::from_char('1'), None);
        assert_eq!(Letter::from_char('Ä'), None);
    }

    #[test]
    fn test_point_values() {
        assert_eq!(Letter::C.point_value(), 3);
        assert_eq!(Letter::A.point_value(), 1);
        assert_eq!(Letter::T.point_value(), 1);
        assert_eq!(Letter::K.point_value(), 5);
        assert_eq!(Letter::J.point_value(), 8);
        assert_eq!(Letter::X.point_value(), 8);
        assert_eq!(Letter::Z.point_value(), 10);
    }

    #[test]
    fn test_tile_counts_sum_to_pool_size() {
        let total: usize = Letter::ALL.iter().map(|l| l.tile_count()).sum();
        assert_eq!(total, 98);
        assert_eq!(Letter::E.tile_count(), 12);
        assert_eq!(Letter::Q.tile_count(), 1);
        assert_eq!(Letter::Z.tile_count(), 1);
    }

    #[test]
    fn test_tile_takes_point_value_from_letter() {
        let tile = LetterTile::new(Letter::Q);
        assert_eq!(tile.letter(), Letter::Q);
        assert_eq!(tile.point_value(), 10);
        assert_eq!(LetterTile::from(Letter::E).point_value(), 1);
    }
}
