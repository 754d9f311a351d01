//! Checkers Core - rules engine for a small-board checkers variant
//!
//! This crate provides the game logic only:
//! - Board geometry and sparse piece storage
//! - Move validation (diagonal steps, jumps, direction of travel)
//! - Move execution with capture and king promotion
//! - Turn sequencing and the mandatory-capture advisory
//! - Win and tie detection
//!
//! Rendering and input handling belong to the caller.

pub mod board;
pub mod pieces;
pub mod rules;
pub mod executor;
pub mod turn;
pub mod outcome;
pub mod setup;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, BoardError, Position, BOARD_SIZE};
pub use pieces::{Piece, PlayerColor};
pub use rules::{validate, is_valid, InvalidMoveReason, MoveKind, CAPTURE_OFFSETS, SIMPLE_OFFSETS};
pub use executor::apply;
pub use turn::{has_mandatory_capture, mandatory_captures, TurnController};
pub use outcome::{evaluate, has_any_move, Outcome};
pub use setup::{CaptureRule, Placement, Setup, SetupError};
pub use game::{new_game, GameState, MoveError, SelectError};
