use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::{BOARD_SIZE, Coordinate, Letter, LetterCounts, LetterTile};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("placement has more than {BOARD_SIZE} tokens")]
    TooManyTokens,
    #[display("placement has no tokens")]
    Empty,
    #[display("placement uses cell {coordinate} more than once")]
    DuplicateCoordinate { coordinate: Coordinate },
}

/// Whether a token puts a tile from the hand or reuses one on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
pub enum TokenKind {
    /// A tile taken from the player's hand.
    New,
    /// A tile already on the board that the word passes through.
    AlreadyPlaced,
}

/// One letter of a placement and the cell it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementToken {
    pub coordinate: Coordinate,
    pub letter: Letter,
    pub kind: TokenKind,
}

impl PlacementToken {
    #[must_use]
    pub const fn new(coordinate: Coordinate, letter: Letter) -> Self {
        Self {
            coordinate,
            letter,
            kind: TokenKind::New,
        }
    }

    #[must_use]
    pub const fn already_placed(coordinate: Coordinate, letter: Letter) -> Self {
        Self {
            coordinate,
            letter,
            kind: TokenKind::AlreadyPlaced,
        }
    }
}

/// The structured payload of a PLACE command.
///
/// An ordered, non-empty sequence of at most [`BOARD_SIZE`] tokens on distinct
/// cells. Coordinates are assigned by whoever builds the placement; the engine
/// only distinguishes new tiles from tiles already on the board.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Coordinate, Direction, Letter, Placement, PlacementToken};
///
/// let start = Coordinate::new(7, 7).unwrap();
/// let tokens = [Letter::C, Letter::A, Letter::T]
///     .into_iter()
///     .enumerate()
///     .map(|(i, l)| PlacementToken::new(start.step(Direction::Horizontal, i).unwrap(), l));
/// let placement = Placement::from_tokens(tokens).unwrap();
///
/// assert_eq!(placement.word(), "CAT");
/// assert_eq!(placement.new_tile_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    tokens: ArrayVec<PlacementToken, BOARD_SIZE>,
}

impl Placement {
    pub fn from_tokens<I>(tokens: I) -> Result<Self, PlacementError>
    where
        I: IntoIterator<Item = PlacementToken>,
    {
        let mut buf: ArrayVec<PlacementToken, BOARD_SIZE> = ArrayVec::new();
        for token in tokens {
            if buf.iter().any(|t| t.coordinate == token.coordinate) {
                return Err(PlacementError::DuplicateCoordinate {
                    coordinate: token.coordinate,
                });
            }
            buf.try_push(token)
                .map_err(|_| PlacementError::TooManyTokens)?;
        }
        if buf.is_empty() {
            return Err(PlacementError::Empty);
        }
        Ok(Self { tokens: buf })
    }

    #[must_use]
    pub fn tokens(&self) -> &[PlacementToken] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the letters of all tokens in order.
    #[must_use]
    pub fn word(&self) -> String {
        self.tokens.iter().map(|t| t.letter.as_char()).collect()
    }

    pub fn new_tokens(&self) -> impl Iterator<Item = &PlacementToken> + '_ {
        self.tokens.iter().filter(|t| t.kind.is_new())
    }

    /// Returns the letters the player must supply from their hand.
    #[must_use]
    pub fn new_letters(&self) -> LetterCounts {
        self.new_tokens().map(|t| t.letter).collect()
    }

    #[must_use]
    pub fn new_tile_count(&self) -> usize {
        self.new_tokens().count()
    }

    /// Returns the board writes for the new tokens.
    pub fn new_cells(&self) -> impl Iterator<Item = (Coordinate, LetterTile)> + '_ {
        self.new_tokens()
            .map(|t| (t.coordinate, LetterTile::new(t.letter)))
    }
}
