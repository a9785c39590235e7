//! Console command syntax.
//!
//! ```text
//! place <row> <col> <h|v> <tokens>
//! quit
//! ```
//!
//! Keywords are case-insensitive. Tokens are letters, upper-cased on input; a
//! letter wrapped in parentheses, e.g. `(T)`, is a tile already on the board.
//! Tokens may be separated by spaces or written together (`CA(T)`). Anything
//! that does not fit becomes [`Command::Error`].

use lexigrid_engine::{Command, Coordinate, Direction, Letter, Placement, PlacementToken};

pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Command::Error;
    };

    if keyword.eq_ignore_ascii_case("quit") {
        return match words.next() {
            None => Command::Quit,
            Some(_) => Command::Error,
        };
    }
    if keyword.eq_ignore_ascii_case("place") {
        return parse_placement(words).map_or(Command::Error, Command::Place);
    }
    Command::Error
}

fn parse_placement<'a, I>(mut words: I) -> Option<Placement>
where
    I: Iterator<Item = &'a str>,
{
    let row = words.next()?.parse().ok()?;
    let col = words.next()?.parse().ok()?;
    let direction = parse_direction(words.next()?)?;
    let start = Coordinate::new(row, col).ok()?;

    let tokens = parse_tokens(&words.collect::<String>())?
        .into_iter()
        .enumerate()
        .map(|(i, (letter, already_placed))| {
            let coord = start.step(direction, i)?;
            Some(if already_placed {
                PlacementToken::already_placed(coord, letter)
            } else {
                PlacementToken::new(coord, letter)
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Placement::from_tokens(tokens).ok()
}

fn parse_direction(word: &str) -> Option<Direction> {
    match word.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Direction::Horizontal),
        "v" | "vertical" => Some(Direction::Vertical),
        _ => None,
    }
}

/// Returns each letter and whether it was marked as already placed.
fn parse_tokens(text: &str) -> Option<Vec<(Letter, bool)>> {
    let mut tokens = vec![];
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '(' {
            let letter = Letter::from_char(chars.next()?.to_ascii_uppercase())?;
            if chars.next()? != ')' {
                return None;
            }
            tokens.push((letter, true));
        } else {
            tokens.push((Letter::from_char(c.to_ascii_uppercase())?, false));
        }
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use lexigrid_engine::TokenKind;

    use super::*;

    fn placement(line: &str) -> Placement {
        match parse_command(line) {
            Command::Place(p) => p,
            other => panic!("expected placement for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_quit() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("  QUIT \n"), Command::Quit);
        assert_eq!(parse_command("quit now"), Command::Error);
    }

    #[test]
    fn test_horizontal_placement() {
        let p = placement("place 7 3 h C A T");
        assert_eq!(p.word(), "CAT");
        let coords: Vec<(usize, usize)> = p.tokens().iter().map(|t| t.coordinate.into()).collect();
        assert_eq!(coords, [(7, 3), (7, 4), (7, 5)]);
        assert!(p.tokens().iter().all(|t| t.kind == TokenKind::New));
    }

    #[test]
    fn test_vertical_placement_with_already_placed() {
        let p = placement("PLACE 2 9 V ho(u)se");
        assert_eq!(p.word(), "HOUSE");
        let coords: Vec<(usize, usize)> = p.tokens().iter().map(|t| t.coordinate.into()).collect();
        assert_eq!(coords, [(2, 9), (3, 9), (4, 9), (5, 9), (6, 9)]);
        assert!(p.tokens()[2].kind.is_already_placed());
        assert_eq!(p.new_tile_count(), 4);
    }

    #[test]
    fn test_spaced_and_joined_tokens_agree() {
        assert_eq!(placement("place 0 0 h CA(T)"), placement("place 0 0 h C A (T)"));
    }

    #[test]
    fn test_malformed_input_is_error() {
        for line in [
            "",
            "   ",
            "pass",
            "place",
            "place 7",
            "place 7 3",
            "place 7 3 h",
            "place x 3 h CAT",
            "place -1 3 h CAT",
            "place 7 3 d CAT",
            "place 15 0 h A",
            "place 7 3 h C4T",
            "place 7 3 h CA(T",
            "place 7 3 h CA(TS)",
            "place 7 3 h CA()",
        ] {
            assert_eq!(parse_command(line), Command::Error, "{line:?}");
        }
    }

    #[test]
    fn test_word_running_off_the_board_is_error() {
        assert!(parse_command("place 7 12 h CAT").is_place());
        assert_eq!(parse_command("place 7 13 h CAT"), Command::Error);
        assert_eq!(parse_command("place 13 0 v CAT"), Command::Error);
    }
}
