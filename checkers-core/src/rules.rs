//! Move validation: diagonal steps, captures and direction of travel

use crate::board::{Board, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One-cell diagonal offsets (row, col)
pub const SIMPLE_OFFSETS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Two-cell diagonal jump offsets (row, col)
pub const CAPTURE_OFFSETS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Kind of a legal move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Simple,
    Capture,
}

/// Why a proposed move was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum InvalidMoveReason {
    #[error("destination is outside the board")]
    OutOfBounds,

    #[error("destination is occupied")]
    DestinationOccupied,

    #[error("no piece at the origin")]
    NoPieceAtOrigin,

    #[error("men may only move toward the opponent's side")]
    WrongDirection,

    #[error("move is not diagonal")]
    NotDiagonal,

    #[error("move is longer than a two-cell jump")]
    TooFar,

    #[error("no piece to jump over")]
    NothingToCapture,

    #[error("cannot jump over an own piece")]
    CannotCaptureOwnPiece,

    #[error("a capture is available and must be taken")]
    CaptureRequired,
}

/// Decide whether the piece at `origin` may move to `dest`.
///
/// Simple and capture moves are checked independently: an available capture
/// does not make a simple move illegal here. Turn ownership is the caller's
/// concern.
pub fn validate(board: &Board, origin: Position, dest: Position) -> Result<MoveKind, InvalidMoveReason> {
    if !board.in_bounds(dest) {
        return Err(InvalidMoveReason::OutOfBounds);
    }
    if board.is_occupied(dest) {
        return Err(InvalidMoveReason::DestinationOccupied);
    }

    let piece = board.piece_at(origin).ok_or(InvalidMoveReason::NoPieceAtOrigin)?;

    let dr = dest.row - origin.row;
    let dc = dest.col - origin.col;

    if !piece.moves_forward(dr) {
        return Err(InvalidMoveReason::WrongDirection);
    }

    match (dr.abs(), dc.abs()) {
        (1, 1) => Ok(MoveKind::Simple),
        (2, 2) => {
            let jumped = board
                .piece_at(origin.midpoint(dest))
                .ok_or(InvalidMoveReason::NothingToCapture)?;
            if jumped.color == piece.color {
                Err(InvalidMoveReason::CannotCaptureOwnPiece)
            } else {
                Ok(MoveKind::Capture)
            }
        }
        (r, c) if r != c || r == 0 => Err(InvalidMoveReason::NotDiagonal),
        _ => Err(InvalidMoveReason::TooFar),
    }
}

/// Boolean view of [`validate`]
pub fn is_valid(board: &Board, origin: Position, dest: Position) -> bool {
    validate(board, origin, dest).is_ok()
}

/// Every legal destination from `origin`, probing the 4 capture and 4 simple offsets
pub fn legal_destinations(board: &Board, origin: Position) -> Vec<(Position, MoveKind)> {
    CAPTURE_OFFSETS
        .iter()
        .chain(SIMPLE_OFFSETS.iter())
        .filter_map(|&offset| {
            let dest = origin.offset(offset)?;
            validate(board, origin, dest).ok().map(|kind| (dest, kind))
        })
        .collect()
}

/// Landing squares of the captures available from `origin`
pub fn capture_destinations(board: &Board, origin: Position) -> Vec<Position> {
    CAPTURE_OFFSETS
        .iter()
        .filter_map(|&offset| origin.offset(offset))
        .filter(|&dest| validate(board, origin, dest) == Ok(MoveKind::Capture))
        .collect()
}
