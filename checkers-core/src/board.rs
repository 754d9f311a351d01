//! Square board geometry and piece storage

use crate::pieces::{Piece, PlayerColor};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reference board dimension (rows and columns)
pub const BOARD_SIZE: i8 = 4;

/// Cell coordinates, 0-indexed from the top-left corner.
///
/// Signed so that off-board candidates like `(0, -1)` can be expressed and
/// rejected by a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Position shifted by a (row, col) offset, or `None` if it leaves the `i8` range
    pub fn offset(&self, (dr, dc): (i8, i8)) -> Option<Position> {
        Some(Position::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// Cell halfway between two on-board positions
    pub fn midpoint(&self, other: Position) -> Position {
        Position::new(
            self.row + (other.row - self.row) / 2,
            self.col + (other.col - self.col) / 2,
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors raised by direct board mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("cell {0} is empty")]
    EmptyCell(Position),
}

/// Sparse N x N board: position -> piece. Absent keys are empty cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: i8,
    cells: FxHashMap<Position, Piece>,
}

impl Board {
    pub fn new(size: i8) -> Self {
        Self {
            size,
            cells: FxHashMap::default(),
        }
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    /// Check if a position lies in `[0, N) x [0, N)`
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.row) && (0..self.size).contains(&pos.col)
    }

    /// Put a piece on an empty, on-board cell
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<(), BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        if self.cells.contains_key(&pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.cells.insert(pos, piece);
        Ok(())
    }

    /// Remove whatever sits at `pos`, if anything
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.cells.remove(&pos)
    }

    /// Strict removal: the cell must be on the board and occupied
    pub fn take(&mut self, pos: Position) -> Result<Piece, BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        self.cells.remove(&pos).ok_or(BoardError::EmptyCell(pos))
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells.get(&pos).copied()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// All pieces of one color, ordered by (row, col)
    pub fn pieces_of(&self, color: PlayerColor) -> Vec<(Position, Piece)> {
        let mut pieces: Vec<_> = self
            .cells
            .iter()
            .filter(|(_, piece)| piece.color == color)
            .map(|(&pos, &piece)| (pos, piece))
            .collect();
        pieces.sort_unstable_by_key(|&(pos, _)| pos);
        pieces
    }

    /// Every occupied cell, ordered by (row, col)
    pub fn entries(&self) -> Vec<(Position, Piece)> {
        let mut entries: Vec<_> = self.cells.iter().map(|(&pos, &piece)| (pos, piece)).collect();
        entries.sort_unstable_by_key(|&(pos, _)| pos);
        entries
    }

    pub fn count(&self, color: PlayerColor) -> usize {
        self.cells.values().filter(|piece| piece.color == color).count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{:>2}", row)?;
            for col in 0..self.size {
                let c = self
                    .piece_at(Position::new(row, col))
                    .map_or('.', |piece| piece.symbol());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
