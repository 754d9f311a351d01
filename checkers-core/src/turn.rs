//! Turn sequencing and the mandatory-capture advisory

use crate::board::{Board, Position};
use crate::pieces::PlayerColor;
use crate::rules::{validate, MoveKind, CAPTURE_OFFSETS};
use serde::{Deserialize, Serialize};

/// Whose move it is. Two states, flipped only by [`TurnController::advance_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    current: PlayerColor,
}

impl TurnController {
    pub fn new(first: PlayerColor) -> Self {
        Self { current: first }
    }

    pub fn current(&self) -> PlayerColor {
        self.current
    }

    /// Hand the move to the other side. Callers only do this after a
    /// successful move that did not end the game.
    pub fn advance_turn(&mut self) -> PlayerColor {
        self.current = self.current.opponent();
        self.current
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(PlayerColor::Red)
    }
}

/// True if any piece of `color` can jump an opposing piece right now
pub fn has_mandatory_capture(board: &Board, color: PlayerColor) -> bool {
    board.pieces_of(color).into_iter().any(|(origin, _)| {
        CAPTURE_OFFSETS
            .iter()
            .filter_map(|&jump| origin.offset(jump))
            .any(|dest| validate(board, origin, dest) == Ok(MoveKind::Capture))
    })
}

/// Origins of every piece of `color` that has a capture available
pub fn mandatory_captures(board: &Board, color: PlayerColor) -> Vec<Position> {
    board
        .pieces_of(color)
        .into_iter()
        .map(|(origin, _)| origin)
        .filter(|&origin| {
            CAPTURE_OFFSETS
                .iter()
                .filter_map(|&jump| origin.offset(jump))
                .any(|dest| validate(board, origin, dest) == Ok(MoveKind::Capture))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Piece;

    #[test]
    fn test_turn_alternates() {
        let mut turn = TurnController::default();
        assert_eq!(turn.current(), PlayerColor::Red);
        assert_eq!(turn.advance_turn(), PlayerColor::Black);
        assert_eq!(turn.advance_turn(), PlayerColor::Red);
    }

    #[test]
    fn test_mandatory_capture_detection() {
        let mut board = Board::default();
        board.place(Position::new(3, 0), Piece::man(PlayerColor::Red)).unwrap();
        board.place(Position::new(3, 2), Piece::man(PlayerColor::Red)).unwrap();
        board.place(Position::new(0, 3), Piece::man(PlayerColor::Black)).unwrap();
        assert!(!has_mandatory_capture(&board, PlayerColor::Red));

        board.place(Position::new(2, 1), Piece::man(PlayerColor::Black)).unwrap();
        assert!(has_mandatory_capture(&board, PlayerColor::Red));
        assert_eq!(
            mandatory_captures(&board, PlayerColor::Red),
            vec![Position::new(3, 0), Position::new(3, 2)]
        );
        // Black men move downward and cannot jump the red pieces behind them
        assert!(!has_mandatory_capture(&board, PlayerColor::Black));
    }

    #[test]
    fn test_every_piece_is_scanned() {
        // Only the last piece in scan order has a capture
        let mut board = Board::default();
        board.place(Position::new(0, 1), Piece::man(PlayerColor::Black)).unwrap();
        board.place(Position::new(1, 0), Piece::man(PlayerColor::Black)).unwrap();
        board.place(Position::new(1, 2), Piece::man(PlayerColor::Black)).unwrap();
        board.place(Position::new(2, 1), Piece::man(PlayerColor::Red)).unwrap();
        board.place(Position::new(3, 2), Piece::man(PlayerColor::Red)).unwrap();
        assert_eq!(mandatory_captures(&board, PlayerColor::Black), vec![Position::new(1, 2)]);
    }
}
