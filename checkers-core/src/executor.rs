//! Applying validated moves to the board

use crate::board::{Board, Position};
use crate::rules::MoveKind;

/// Apply a move that [`crate::rules::validate`] has already accepted.
///
/// Relocates the piece, removes the jumped piece on a capture and crowns the
/// piece if it lands on its promotion row.
///
/// # Panics
///
/// Panics if `origin` is empty or the destination is occupied, which cannot
/// happen when the move was validated against this board.
pub fn apply(board: &mut Board, origin: Position, dest: Position) -> MoveKind {
    let piece = board.remove(origin).expect("no piece at validated origin");

    let kind = if (dest.row - origin.row).abs() == 2 {
        let jumped = origin.midpoint(dest);
        let captured = board.remove(jumped);
        debug_assert!(captured.is_some(), "validated capture with empty midpoint");
        tracing::debug!("{} captures at {}", piece.color, jumped);
        MoveKind::Capture
    } else {
        MoveKind::Simple
    };

    let landed = piece.landed_on(dest.row, board.size());
    if landed.is_king && !piece.is_king {
        tracing::debug!("{} piece crowned at {}", piece.color, dest);
    }

    board
        .place(dest, landed)
        .expect("validated destination must be empty and on the board");

    kind
}
