//! Setup - starting layout and house rules

use crate::board::{Board, BoardError, Position, BOARD_SIZE};
use crate::pieces::{Piece, PlayerColor};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Whether an available capture must be taken
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureRule {
    /// Captures are reported but simple moves stay legal
    #[default]
    Advisory,
    /// A simple move is rejected while the mover has any capture
    Mandatory,
}

/// One starting piece: a `(row, col, color)` triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: i8,
    pub col: i8,
    pub color: PlayerColor,
}

impl Placement {
    pub const fn new(row: i8, col: i8, color: PlayerColor) -> Self {
        Self { row, col, color }
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("board size must be positive, got {0}")]
    InvalidSize(i8),

    #[error("invalid starting placement: {0}")]
    Board(#[from] BoardError),
}

/// Starting layout for a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub name: String,
    #[serde(default = "default_size")]
    pub size: i8,
    #[serde(default)]
    pub capture_rule: CaptureRule,
    pub pieces: Vec<Placement>,
}

fn default_size() -> i8 {
    BOARD_SIZE
}

impl Setup {
    /// Two red men on the bottom row and two black men on the top row,
    /// on alternating dark squares so they face each other
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            size: BOARD_SIZE,
            capture_rule: CaptureRule::Advisory,
            pieces: vec![
                Placement::new(3, 0, PlayerColor::Red),
                Placement::new(3, 2, PlayerColor::Red),
                Placement::new(0, 1, PlayerColor::Black),
                Placement::new(0, 3, PlayerColor::Black),
            ],
        }
    }

    pub fn with_capture_rule(mut self, capture_rule: CaptureRule) -> Self {
        self.capture_rule = capture_rule;
        self
    }

    /// Build the starting board, rejecting duplicate or off-board placements
    pub fn to_board(&self) -> Result<Board, SetupError> {
        if self.size <= 0 {
            return Err(SetupError::InvalidSize(self.size));
        }

        let mut board = Board::new(self.size);
        for placement in &self.pieces {
            board.place(
                Position::new(placement.row, placement.col),
                Piece::man(placement.color),
            )?;
        }
        Ok(board)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read setup: {}", path.display()))?;
        let setup: Setup = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse setup: {}", path.display()))?;
        Ok(setup)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write setup: {}", path.display()))?;
        Ok(())
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::standard()
    }
}
