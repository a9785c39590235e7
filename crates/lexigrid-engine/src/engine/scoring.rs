use serde::{Deserialize, Serialize};

use crate::core::{Board, PremiumKind};

use super::placement::Placement;

/// Points awarded for using every tile of a full hand in one placement.
pub const BINGO_BONUS: u32 = 50;

/// Number of new tiles a placement must use to earn [`BINGO_BONUS`].
pub const BINGO_TILE_COUNT: usize = 7;

/// How premium squares take part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Premium squares apply on first use; letter premiums before word premiums,
    /// word premiums stack multiplicatively.
    #[default]
    Premium,
    /// Premium squares are ignored: letter values plus the bingo bonus.
    Flat,
}

/// The parts a placement's score is made of.
///
/// `total == letter_sum * word_multiplier + bingo_bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of token values after letter premiums.
    pub letter_sum: u32,
    /// Product of the word premiums used (1 if none).
    pub word_multiplier: u32,
    /// [`BINGO_BONUS`] or 0.
    pub bingo_bonus: u32,
    pub total: u32,
}

/// Computes the points a placement earns.
///
/// Scoring is a pure function of the placement and the board *as it was before
/// the placement*. A premium square is used only by a new tile landing on a
/// cell that was empty until now, which makes every premium a one-time bonus.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Board, Coordinate, Letter, Placement, PlacementToken, ScoringEngine};
///
/// let board = Board::new();
/// // (7,3) is a double-letter square.
/// let tokens = [(7, 3, Letter::C), (7, 4, Letter::A), (7, 5, Letter::T)]
///     .map(|(r, c, l)| PlacementToken::new(Coordinate::new(r, c).unwrap(), l));
/// let placement = Placement::from_tokens(tokens).unwrap();
///
/// assert_eq!(ScoringEngine::default().score(&placement, &board).total, 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    rule: ScoringRule,
}

impl ScoringEngine {
    #[must_use]
    pub const fn new(rule: ScoringRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    #[must_use]
    pub fn score(&self, placement: &Placement, board: &Board) -> ScoreBreakdown {
        let mut letter_sum = 0;
        let mut word_multiplier = 1;

        for token in placement.tokens() {
            let mut value = token.letter.point_value();
            let premium = match self.rule {
                ScoringRule::Premium
                    if token.kind.is_new() && !board.is_occupied(token.coordinate) =>
                {
                    board.premium_at(token.coordinate)
                }
                _ => None,
            };
            if let Some(premium) = premium {
                match premium.kind() {
                    PremiumKind::Letter => value *= premium.multiplier(),
                    PremiumKind::Word => word_multiplier *= premium.multiplier(),
                }
            }
            letter_sum += value;
        }

        let bingo_bonus = if placement.new_tile_count() == BINGO_TILE_COUNT {
            BINGO_BONUS
        } else {
            0
        };

        ScoreBreakdown {
            letter_sum,
            word_multiplier,
            bingo_bonus,
            total: letter_sum * word_multiplier + bingo_bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{Coordinate, Direction, Letter, LetterTile, Premium, PremiumTable},
        engine::placement::PlacementToken,
    };

    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    /// Builds a horizontal placement starting at `start`.
    /// Upper-case letters are new tiles, lower-case ones already placed.
    fn across(start: Coordinate, letters: &str) -> Placement {
        let tokens = letters.chars().enumerate().map(|(i, c)| {
            let coord = start.step(Direction::Horizontal, i).unwrap();
            let letter = Letter::from_char(c.to_ascii_uppercase()).unwrap();
            if c.is_ascii_uppercase() {
                PlacementToken::new(coord, letter)
            } else {
                PlacementToken::already_placed(coord, letter)
            }
        });
        Placement::from_tokens(tokens).unwrap()
    }

    fn premium() -> ScoringEngine {
        ScoringEngine::new(ScoringRule::Premium)
    }

    fn flat() -> ScoringEngine {
        ScoringEngine::new(ScoringRule::Flat)
    }

    #[test]
    fn test_plain_word_scores_letter_sum() {
        // Row 4 has no premium squares.
        let board = Board::new();
        let score = premium().score(&across(at(4, 0), "CAT"), &board);
        assert_eq!(score.total, 5);
        assert_eq!(score.bingo_bonus, 0);
        assert_eq!(flat().score(&across(at(4, 0), "CAT"), &board).total, 5);
    }

    #[test]
    fn test_seven_new_tiles_earn_bingo() {
        let board = Board::new();
        let placement = across(at(4, 0), "GRADERS");
        let letter_sum: u32 = placement.tokens().iter().map(|t| t.letter.point_value()).sum();
        assert_eq!(letter_sum, 9);
        let score = premium().score(&placement, &board);
        assert_eq!(score.bingo_bonus, BINGO_BONUS);
        assert_eq!(score.total, 59);
    }

    #[test]
    fn test_already_placed_tokens_do_not_count_toward_bingo() {
        let mut board = Board::new();
        board.place([(at(4, 7), LetterTile::new(Letter::S))]);
        let placement = across(at(4, 0), "GRADERSs");
        assert_eq!(placement.new_tile_count(), 7);
        assert_eq!(premium().score(&placement, &board).total, 10 + BINGO_BONUS);

        let six_new = across(at(4, 0), "GRADErs");
        assert_eq!(premium().score(&six_new, &board).bingo_bonus, 0);
        assert_eq!(premium().score(&six_new, &board).total, 9);
    }

    #[test]
    fn test_letter_premium_applies_to_new_tile() {
        let board = Board::new();
        // (1,5) is triple-letter: Z on it is worth 30.
        let placement = across(at(1, 4), "AZO");
        assert_eq!(premium().score(&placement, &board).total, 1 + 30 + 1);
        assert_eq!(flat().score(&placement, &board).total, 12);
    }

    #[test]
    fn test_premium_used_only_once() {
        let mut board = Board::new();
        board.place([(at(1, 5), LetterTile::new(Letter::Z))]);
        // The Z already sits on the triple-letter square.
        let placement = across(at(1, 4), "AzO");
        assert_eq!(premium().score(&placement, &board).total, 12);

        // A new tile written over an occupied premium square does not use it either.
        let overwrite = across(at(1, 4), "AZO");
        assert_eq!(premium().score(&overwrite, &board).total, 12);
    }

    #[test]
    fn test_word_premiums_stack_multiplicatively() {
        let table: PremiumTable = [
            (at(0, 0), Premium::DOUBLE_WORD),
            (at(0, 2), Premium::TRIPLE_WORD),
            (at(0, 1), Premium::DOUBLE_LETTER),
        ]
        .into_iter()
        .collect();
        let board = Board::with_premium_table(table);
        // C(3) + A(1*2) + T(1) = 6, times 2 * 3.
        let score = premium().score(&across(at(0, 0), "CAT"), &board);
        assert_eq!(score.letter_sum, 6);
        assert_eq!(score.word_multiplier, 6);
        assert_eq!(score.total, 36);
    }

    #[test]
    fn test_bingo_added_after_word_multiplier() {
        let table: PremiumTable = [(at(0, 0), Premium::DOUBLE_WORD)].into_iter().collect();
        let board = Board::with_premium_table(table);
        let score = premium().score(&across(at(0, 0), "GRADERS"), &board);
        assert_eq!(score.total, 9 * 2 + BINGO_BONUS);
    }

    #[test]
    fn test_scoring_does_not_mutate_board() {
        let board = Board::new();
        let before = board.tile_count();
        let _ = premium().score(&across(at(7, 3), "CAT"), &board);
        assert_eq!(board.tile_count(), before);
    }
}
