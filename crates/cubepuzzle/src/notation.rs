//! Move notation.
//!
//! A move sequence is a whitespace-separated list of tokens. Each token is a
//! face letter (`L`, `R`, `F`, `B`, `U`, or `D`) followed by an optional
//! suffix:
//!
//! | Suffix | Meaning                        |
//! |--------|--------------------------------|
//! | none   | one clockwise quarter turn     |
//! | `'`    | one counterclockwise turn      |
//! | `2`    | two clockwise quarter turns    |
//! | `2'`   | two counterclockwise turns     |
//!
//! Face letters are case-sensitive.

use itertools::Itertools;

use crate::{Direction, FaceId, Move, PuzzleError, Result};

/// Parses a whitespace-separated sequence of moves.
///
/// Returns [`PuzzleError::InvalidMove`] containing the first token that could
/// not be parsed. Nothing is returned for an empty or blank string.
pub fn parse_moves(s: &str) -> Result<Vec<Move>> {
    let mut moves = vec![];
    for token in s.split_whitespace() {
        let (twist, count) = parse_token(token)?;
        moves.extend(std::iter::repeat_n(twist, count));
    }
    Ok(moves)
}

fn parse_token(token: &str) -> Result<(Move, usize)> {
    let invalid = || PuzzleError::InvalidMove(token.to_string());

    let mut chars = token.chars();
    let face = chars
        .next()
        .and_then(face_from_symbol)
        .ok_or_else(invalid)?;
    let (direction, count) = match chars.as_str() {
        "" => (Direction::Clockwise, 1),
        "'" => (Direction::CounterClockwise, 1),
        "2" => (Direction::Clockwise, 2),
        "2'" => (Direction::CounterClockwise, 2),
        _ => return Err(invalid()),
    };
    Ok((Move::new(face, direction), count))
}

fn face_from_symbol(c: char) -> Option<FaceId> {
    Some(match c {
        'L' => FaceId::Left,
        'R' => FaceId::Right,
        'F' => FaceId::Front,
        'B' => FaceId::Back,
        'U' => FaceId::Up,
        'D' => FaceId::Down,
        _ => return None,
    })
}

/// Formats a sequence of moves, one quarter turn per token, separated by
/// spaces.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_moves() {
        use Direction::{Clockwise as CW, CounterClockwise as CCW};

        assert_eq!(
            parse_moves("U R' F2").unwrap(),
            vec![
                Move::new(FaceId::Up, CW),
                Move::new(FaceId::Right, CCW),
                Move::new(FaceId::Front, CW),
                Move::new(FaceId::Front, CW),
            ],
        );
        assert_eq!(
            parse_moves("  D2'\tL\n").unwrap(),
            vec![
                Move::new(FaceId::Down, CCW),
                Move::new(FaceId::Down, CCW),
                Move::new(FaceId::Left, CW),
            ],
        );
        assert_eq!(parse_moves("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_invalid_moves() {
        for (s, bad_token) in [
            ("Q", "Q"),
            ("U Q R", "Q"),
            ("u", "u"),
            ("R3", "R3"),
            ("F''", "F''"),
            ("'", "'"),
        ] {
            assert_eq!(
                parse_moves(s),
                Err(PuzzleError::InvalidMove(bad_token.to_string())),
                "{s:?}",
            );
        }
    }

    #[test]
    fn test_format_moves() {
        let moves = parse_moves("U R' F2").unwrap();
        let s = format_moves(&moves);
        assert_eq!(s, "U R' F F");
        assert_eq!(parse_moves(&s).unwrap(), moves);

        let all: Vec<Move> = FaceId::iter()
            .cartesian_product(Direction::iter())
            .map(|(face, direction)| Move::new(face, direction))
            .collect();
        assert_eq!(parse_moves(&format_moves(&all)).unwrap(), all);
    }

    #[test]
    fn test_single_move_from_str() {
        assert_eq!("B'".parse(), Ok(Move::new(FaceId::Back, Direction::CounterClockwise)));
        assert_eq!(
            "B2".parse::<Move>(),
            Err(PuzzleError::InvalidMove("B2".to_string())),
        );
    }
}
