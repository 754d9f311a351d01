//! Piece and side definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side color. Red moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Black,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::Red,
        }
    }

    /// Row delta of a forward step: red advances toward row 0, black toward row N-1
    pub fn forward(self) -> i8 {
        match self {
            PlayerColor::Red => -1,
            PlayerColor::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned
    pub fn back_rank(self, size: i8) -> i8 {
        match self {
            PlayerColor::Red => 0,
            PlayerColor::Black => size - 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Black => "black",
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board. It has no identity beyond the cell it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PlayerColor,
    pub is_king: bool,
}

impl Piece {
    pub const fn man(color: PlayerColor) -> Self {
        Self { color, is_king: false }
    }

    pub const fn king(color: PlayerColor) -> Self {
        Self { color, is_king: true }
    }

    /// Whether moving `row_delta` rows respects this piece's direction of travel
    pub fn moves_forward(&self, row_delta: i8) -> bool {
        self.is_king || row_delta.signum() == self.color.forward()
    }

    /// Copy of this piece after landing on `row`; promotion is one-way
    pub fn landed_on(self, row: i8, size: i8) -> Self {
        Self {
            color: self.color,
            is_king: self.is_king || row == self.color.back_rank(size),
        }
    }

    /// Single-character glyph: `r`/`b` for men, `R`/`B` for kings
    pub fn symbol(&self) -> char {
        match (self.color, self.is_king) {
            (PlayerColor::Red, false) => 'r',
            (PlayerColor::Red, true) => 'R',
            (PlayerColor::Black, false) => 'b',
            (PlayerColor::Black, true) => 'B',
        }
    }
}
