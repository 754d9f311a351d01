//! Game termination: elimination wins and stalemate ties

use crate::board::Board;
use crate::pieces::PlayerColor;
use crate::rules::{is_valid, CAPTURE_OFFSETS, SIMPLE_OFFSETS};
use serde::{Deserialize, Serialize};

/// Game outcome after a move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    None,
    Win(PlayerColor),
    Tie,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::None)
    }

    pub fn winner(&self) -> Option<PlayerColor> {
        match self {
            Outcome::Win(color) => Some(*color),
            _ => None,
        }
    }
}

/// Decide whether the game has ended.
///
/// A side with no pieces left loses. Equal, nonzero piece counts with no
/// legal move for either side is a tie. Everything else continues.
pub fn evaluate(board: &Board) -> Outcome {
    let red = board.count(PlayerColor::Red);
    let black = board.count(PlayerColor::Black);

    match (red, black) {
        (0, 0) => Outcome::None,
        (_, 0) => Outcome::Win(PlayerColor::Red),
        (0, _) => Outcome::Win(PlayerColor::Black),
        (r, b) if r == b
            && !has_any_move(board, PlayerColor::Red)
            && !has_any_move(board, PlayerColor::Black) =>
        {
            Outcome::Tie
        }
        _ => Outcome::None,
    }
}

/// True if some piece of `color` has a legal simple or capture move
pub fn has_any_move(board: &Board, color: PlayerColor) -> bool {
    board.pieces_of(color).into_iter().any(|(origin, _)| {
        SIMPLE_OFFSETS
            .iter()
            .chain(CAPTURE_OFFSETS.iter())
            .filter_map(|&step| origin.offset(step))
            .any(|dest| is_valid(board, origin, dest))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::pieces::Piece;

    fn board_with(pieces: &[(i8, i8, Piece)]) -> Board {
        let mut board = Board::default();
        for &(row, col, piece) in pieces {
            board.place(Position::new(row, col), piece).unwrap();
        }
        board
    }

    #[test]
    fn test_win_by_elimination() {
        let board = board_with(&[(3, 0, Piece::man(PlayerColor::Red))]);
        assert_eq!(evaluate(&board), Outcome::Win(PlayerColor::Red));

        let board = board_with(&[(0, 1, Piece::man(PlayerColor::Black))]);
        assert_eq!(evaluate(&board), Outcome::Win(PlayerColor::Black));
        assert_eq!(evaluate(&board).winner(), Some(PlayerColor::Black));
        assert_eq!(Outcome::Tie.winner(), None);
    }

    #[test]
    fn test_game_continues() {
        let board = board_with(&[
            (3, 0, Piece::man(PlayerColor::Red)),
            (0, 1, Piece::man(PlayerColor::Black)),
        ]);
        assert_eq!(evaluate(&board), Outcome::None);
    }

    #[test]
    fn test_tie_when_both_sides_are_stuck() {
        // Red on its promotion row can only move up; black on its own is the same
        let board = board_with(&[
            (0, 1, Piece::man(PlayerColor::Red)),
            (3, 2, Piece::man(PlayerColor::Black)),
        ]);
        assert!(!has_any_move(&board, PlayerColor::Red));
        assert!(!has_any_move(&board, PlayerColor::Black));
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_no_tie_with_unequal_counts() {
        let board = board_with(&[
            (0, 1, Piece::man(PlayerColor::Red)),
            (0, 3, Piece::man(PlayerColor::Red)),
            (3, 2, Piece::man(PlayerColor::Black)),
        ]);
        assert_eq!(evaluate(&board), Outcome::None);
    }

    #[test]
    fn test_no_tie_when_one_side_can_move() {
        let board = board_with(&[
            (0, 1, Piece::man(PlayerColor::Red)),
            (2, 2, Piece::man(PlayerColor::Black)),
        ]);
        assert!(has_any_move(&board, PlayerColor::Black));
        assert_eq!(evaluate(&board), Outcome::None);
    }

    #[test]
    fn test_has_any_move_sees_captures() {
        // The only red move is a jump
        let board = board_with(&[
            (3, 0, Piece::man(PlayerColor::Red)),
            (2, 1, Piece::man(PlayerColor::Black)),
        ]);
        assert!(has_any_move(&board, PlayerColor::Red));
    }
}
