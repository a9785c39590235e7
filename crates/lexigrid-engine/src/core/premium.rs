use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// What a premium square multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PremiumKind {
    /// Multiplies the value of the tile placed on the square.
    Letter,
    /// Multiplies the value of the whole word.
    Word,
}

/// A scoring multiplier attached to a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Premium {
    kind: PremiumKind,
    multiplier: u32,
}

impl Premium {
    pub const DOUBLE_LETTER: Self = Self::letter(2);
    pub const TRIPLE_LETTER: Self = Self::letter(3);
    pub const DOUBLE_WORD: Self = Self::word(2);
    pub const TRIPLE_WORD: Self = Self::word(3);

    #[must_use]
    pub const fn letter(multiplier: u32) -> Self {
        Self {
            kind: PremiumKind::Letter,
            multiplier,
        }
    }

    #[must_use]
    pub const fn word(multiplier: u32) -> Self {
        Self {
            kind: PremiumKind::Word,
            multiplier,
        }
    }

    #[must_use]
    pub const fn kind(self) -> PremiumKind {
        self.kind
    }

    #[must_use]
    pub const fn multiplier(self) -> u32 {
        self.multiplier
    }
}

const fn tl(row: u8, col: u8) -> (Coordinate, Premium) {
    (Coordinate::new_const(row, col), Premium::TRIPLE_LETTER)
}

const fn dl(row: u8, col: u8) -> (Coordinate, Premium) {
    (Coordinate::new_const(row, col), Premium::DOUBLE_LETTER)
}

/// The 36 premium squares of the standard layout.
const STANDARD_PREMIUMS: [(Coordinate, Premium); 36] = [
    tl(1, 5),
    tl(5, 5),
    tl(9, 5),
    tl(13, 5),
    tl(5, 1),
    tl(9, 1),
    tl(1, 9),
    tl(5, 9),
    tl(9, 9),
    tl(13, 9),
    tl(5, 13),
    tl(9, 13),
    dl(0, 3),
    dl(0, 11),
    dl(2, 5),
    dl(2, 8),
    dl(3, 0),
    dl(3, 7),
    dl(3, 14),
    dl(6, 2),
    dl(6, 6),
    dl(6, 8),
    dl(6, 12),
    dl(7, 3),
    dl(7, 11),
    dl(8, 2),
    dl(8, 6),
    dl(8, 8),
    dl(8, 12),
    dl(11, 0),
    dl(11, 7),
    dl(11, 14),
    dl(12, 6),
    dl(12, 8),
    dl(14, 3),
    dl(14, 11),
];

/// Mapping from board squares to their premiums.
///
/// Squares absent from the table score at face value.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Coordinate, Premium, PremiumTable};
///
/// let table = PremiumTable::standard();
/// assert_eq!(table.len(), 36);
/// assert_eq!(table.get(Coordinate::new(1, 5).unwrap()), Some(Premium::TRIPLE_LETTER));
/// assert_eq!(table.get(Coordinate::new(7, 7).unwrap()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PremiumTable {
    premiums: HashMap<Coordinate, Premium>,
}

impl PremiumTable {
    /// Returns the standard layout: 12 triple-letter and 24 double-letter squares.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_PREMIUMS.into_iter().collect()
    }

    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<Premium> {
        self.premiums.get(&coord).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.premiums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.premiums.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Premium)> + '_ {
        self.premiums.iter().map(|(&coord, &premium)| (coord, premium))
    }
}

/// Later entries for the same coordinate replace earlier ones.
impl FromIterator<(Coordinate, Premium)> for PremiumTable {
    fn from_iter<T: IntoIterator<Item = (Coordinate, Premium)>>(iter: T) -> Self {
        Self {
            premiums: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_standard_has_no_duplicate_coordinates() {
        // A duplicate would collapse in the map and shrink the table.
        assert_eq!(PremiumTable::standard().len(), STANDARD_PREMIUMS.len());
    }

    #[test]
    fn test_standard_multiplier_counts() {
        let table = PremiumTable::standard();
        let triples = table.iter().filter(|(_, p)| p.multiplier() == 3).count();
        let doubles = table.iter().filter(|(_, p)| p.multiplier() == 2).count();
        assert_eq!(triples, 12);
        assert_eq!(doubles, 24);
        assert_eq!(table.len(), 36);
        assert!(table.iter().all(|(_, p)| p.kind() == PremiumKind::Letter));
    }

    #[test]
    fn test_standard_spot_checks() {
        let table = PremiumTable::standard();
        assert_eq!(table.get(at(13, 9)), Some(Premium::TRIPLE_LETTER));
        assert_eq!(table.get(at(9, 13)), Some(Premium::TRIPLE_LETTER));
        assert_eq!(table.get(at(0, 3)), Some(Premium::DOUBLE_LETTER));
        assert_eq!(table.get(at(14, 11)), Some(Premium::DOUBLE_LETTER));
        assert_eq!(table.get(at(3, 14)), Some(Premium::DOUBLE_LETTER));
        assert_eq!(table.get(at(0, 0)), None);
        assert_eq!(table.get(at(7, 7)), None);
    }

    #[test]
    fn test_custom_table() {
        let table: PremiumTable = [(at(0, 0), Premium::TRIPLE_WORD), (at(0, 1), Premium::DOUBLE_WORD)]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(at(0, 0)).map(Premium::kind), Some(PremiumKind::Word));
        assert!(PremiumTable::default().is_empty());
    }
}
