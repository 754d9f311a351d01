//! Game state and the move-attempt flow

use crate::board::{Board, Position};
use crate::executor;
use crate::outcome::{evaluate, Outcome};
use crate::pieces::PlayerColor;
use crate::rules::{self, validate, InvalidMoveReason, MoveKind};
use crate::setup::{CaptureRule, Setup, SetupError};
use crate::turn::{has_mandatory_capture, mandatory_captures, TurnController};
use thiserror::Error;

/// Rejected piece selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no piece at {0}")]
    NoPieceHere(Position),

    #[error("piece at {0} belongs to the other player")]
    NotYourPiece(Position),

    #[error("game already over")]
    GameOver,
}

/// Rejected move attempt. The board and turn are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game already over")]
    GameOver,

    #[error("no piece selected")]
    NothingSelected,

    #[error("no piece at {0}")]
    NoPieceHere(Position),

    #[error("piece at {0} belongs to the other player")]
    NotYourPiece(Position),

    #[error("illegal move: {0}")]
    Invalid(#[from] InvalidMoveReason),
}

/// A single game in progress. Each game owns its board; nothing is shared.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: TurnController,
    selected: Option<Position>,
    capture_rule: CaptureRule,
    move_count: u32,
    outcome: Outcome,
}

/// Start a game from a setup. Red moves first.
pub fn new_game(setup: &Setup) -> Result<GameState, SetupError> {
    GameState::new(setup)
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub fn new(setup: &Setup) -> Result<Self, SetupError> {
        let board = setup.to_board()?;
        tracing::debug!("New game '{}' with {} pieces", setup.name, board.len());

        Ok(Self {
            board,
            turn: TurnController::new(PlayerColor::Red),
            selected: None,
            capture_rule: setup.capture_rule,
            move_count: 0,
            outcome: Outcome::None,
        })
    }

    /// Discard this game and start over from `setup`
    pub fn restart(&mut self, setup: &Setup) -> Result<(), SetupError> {
        *self = Self::new(setup)?;
        Ok(())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerColor {
        self.turn.current()
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn capture_rule(&self) -> CaptureRule {
        self.capture_rule
    }

    /// Number of successful moves so far
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Select one of the current player's pieces, replacing any earlier selection
    pub fn select_piece(&mut self, pos: Position) -> Result<(), SelectError> {
        if self.is_over() {
            return Err(SelectError::GameOver);
        }

        let piece = self.board.piece_at(pos).ok_or(SelectError::NoPieceHere(pos))?;
        if piece.color != self.current_player() {
            return Err(SelectError::NotYourPiece(pos));
        }

        self.selected = Some(pos);
        tracing::debug!("{} selected piece at {}", piece.color, pos);
        if has_mandatory_capture(&self.board, piece.color) {
            tracing::debug!("{} has a capture available", piece.color);
        }
        Ok(())
    }

    /// Move the selected piece to `dest`
    pub fn move_selected(&mut self, dest: Position) -> Result<MoveKind, MoveError> {
        let origin = self.selected.ok_or(MoveError::NothingSelected)?;
        self.attempt_move(origin, dest)
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Validate and play a move for the current player.
    ///
    /// On success the outcome is re-evaluated and the turn passes to the
    /// opponent unless the game just ended. The selection is cleared either way.
    pub fn attempt_move(&mut self, origin: Position, dest: Position) -> Result<MoveKind, MoveError> {
        self.selected = None;

        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player();
        let piece = self.board.piece_at(origin).ok_or(MoveError::NoPieceHere(origin))?;
        if piece.color != mover {
            return Err(MoveError::NotYourPiece(origin));
        }

        let kind = validate(&self.board, origin, dest)?;
        if kind == MoveKind::Simple
            && self.capture_rule == CaptureRule::Mandatory
            && has_mandatory_capture(&self.board, mover)
        {
            return Err(InvalidMoveReason::CaptureRequired.into());
        }

        executor::apply(&mut self.board, origin, dest);
        self.move_count += 1;
        tracing::debug!("{} moved {} -> {} ({:?})", mover, origin, dest, kind);

        self.outcome = evaluate(&self.board);
        match self.outcome {
            Outcome::None => {
                self.turn.advance_turn();
            }
            Outcome::Win(winner) => {
                tracing::info!("{} wins after {} moves", winner, self.move_count);
            }
            Outcome::Tie => {
                tracing::info!("Tie after {} moves", self.move_count);
            }
        }

        Ok(kind)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Every cell the piece at `origin` may legally move to
    pub fn query_legal_destinations(&self, origin: Position) -> Vec<Position> {
        rules::legal_destinations(&self.board, origin)
            .into_iter()
            .map(|(dest, _)| dest)
            .collect()
    }

    /// Destinations worth highlighting: captures if the piece has any,
    /// simple moves otherwise
    pub fn query_move_hints(&self, origin: Position) -> Vec<Position> {
        let captures = rules::capture_destinations(&self.board, origin);
        if !captures.is_empty() {
            return captures;
        }
        self.query_legal_destinations(origin)
    }

    /// Landing cells of every capture the current player could make,
    /// sorted and without duplicates
    pub fn query_mandatory_captures(&self) -> Vec<Position> {
        let mut landings: Vec<Position> = mandatory_captures(&self.board, self.current_player())
            .into_iter()
            .flat_map(|origin| rules::capture_destinations(&self.board, origin))
            .collect();
        landings.sort_unstable();
        landings.dedup();
        landings
    }
}

// ============================================================================
// TESTS
// ============================================================================
