use std::fmt::Write as _;

use lexigrid_engine::{BOARD_SIZE, Board, Player};

const CELL_WIDTH: usize = 4;

/// Draws the board as a text grid, one line per row with a rule above each.
pub fn render_board(board: &Board) -> String {
    let rule = "-".repeat(BOARD_SIZE * CELL_WIDTH);
    let mut out = String::new();
    for row in board.rows() {
        out.push_str(&rule);
        out.push('\n');
        for cell in row {
            let letter = cell.map_or(' ', |tile| tile.letter().as_char());
            write!(&mut out, "| {letter} ").unwrap();
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push_str("-\n");
    out
}

pub fn render_scores(players: &[Player]) -> String {
    let mut out = String::new();
    for player in players {
        writeln!(&mut out, "{}: {}", player.name(), player.score()).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use lexigrid_engine::{Coordinate, Letter, LetterTile};

    use super::*;

    #[test]
    fn test_empty_board() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 * BOARD_SIZE + 1);

        let rule = "-".repeat(60);
        let empty_row = format!("{}|", "|   ".repeat(BOARD_SIZE));
        for row in 0..BOARD_SIZE {
            assert_eq!(lines[2 * row], rule);
            assert_eq!(lines[2 * row + 1], empty_row);
        }
        assert_eq!(lines[2 * BOARD_SIZE], "-".repeat(61));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_tiles_are_drawn_in_their_cells() {
        let mut board = Board::new();
        board.place([
            (Coordinate::new(0, 0).unwrap(), LetterTile::new(Letter::C)),
            (Coordinate::new(0, 1).unwrap(), LetterTile::new(Letter::A)),
            (Coordinate::new(14, 14).unwrap(), LetterTile::new(Letter::T)),
        ]);
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("| C | A |   |"));
        assert!(lines[29].ends_with("|   | T |"));
        assert_eq!(lines[1].len(), 61);
    }

    #[test]
    fn test_scores() {
        let players = [Player::new("Ann", 0), Player::new("Bo", 1)];
        assert_eq!(render_scores(&players), "Ann: 0\nBo: 0\n");
    }
}
