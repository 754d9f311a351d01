//! Replay command - play a list of moves through the engine
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_setup(), play_moves(), report_results()
//! - Level 3: play_single_move()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use checkers_core::{new_game, CaptureRule, GameState, MoveKind, Outcome, Position, Setup};

use crate::notation::{format_position, parse_move};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    /// Setup JSON file (defaults to the standard 4x4 layout)
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// Reject simple moves while a capture is available
    #[arg(long)]
    pub mandatory_capture: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Moves in `row,col-row,col` form, played alternately starting with red
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,
}

/// One applied move
#[derive(Clone, Debug, serde::Serialize)]
struct MoveRecord {
    number: u32,
    player: String,
    from: String,
    to: String,
    kind: MoveKind,
}

/// Final state of a replay
#[derive(Clone, Debug)]
struct ReplayResults {
    records: Vec<MoveRecord>,
    state: GameState,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run replay command
///
/// 1. Load the setup
/// 2. Play every move, stopping at the first rejected one
/// 3. Report the board and outcome
pub fn run(args: ReplayArgs) -> Result<()> {
    let setup = load_setup(&args)?;

    tracing::info!(
        "Replaying {} moves on '{}' ({:?} capture)",
        args.moves.len(),
        setup.name,
        setup.capture_rule
    );

    let results = play_moves(&setup, &args.moves)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the setup from file or fall back to the standard layout
pub fn load_setup(args: &ReplayArgs) -> Result<Setup> {
    let setup = match &args.setup {
        Some(path) => Setup::load(path)?,
        None => Setup::standard(),
    };

    if args.mandatory_capture {
        Ok(setup.with_capture_rule(CaptureRule::Mandatory))
    } else {
        Ok(setup)
    }
}

/// Play all moves in order
fn play_moves(setup: &Setup, moves: &[String]) -> Result<ReplayResults> {
    let mut state = new_game(setup).context("Invalid setup")?;
    let mut records = Vec::with_capacity(moves.len());

    for text in moves {
        if state.is_over() {
            tracing::warn!("Game already over, ignoring remaining moves from `{}`", text);
            break;
        }

        let record = play_single_move(&mut state, text)?;
        tracing::info!(
            "Move {}: {} {} -> {} ({:?})",
            record.number,
            record.player,
            record.from,
            record.to,
            record.kind
        );
        records.push(record);
    }

    Ok(ReplayResults { records, state })
}

/// Print the final board and outcome
fn report_results(results: &ReplayResults, args: &ReplayArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Select and move one piece, as a click-click user would
fn play_single_move(state: &mut GameState, text: &str) -> Result<MoveRecord> {
    let (from, to) = parse_move(text)?;
    let player = state.current_player();

    state
        .select_piece(from)
        .with_context(|| format!("Move {} (`{}`) rejected", state.move_count() + 1, text))?;
    let kind = state
        .move_selected(to)
        .with_context(|| format!("Move {} (`{}`) rejected", state.move_count() + 1, text))?;

    Ok(MoveRecord {
        number: state.move_count(),
        player: player.to_string(),
        from: format_position(from),
        to: format_position(to),
        kind,
    })
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn describe_outcome(state: &GameState) -> String {
    let outcome = state.outcome();
    if let Some(winner) = outcome.winner() {
        return format!("{} wins", winner);
    }
    if outcome.is_over() {
        "tie".to_string()
    } else {
        format!("in progress, {} to move", state.current_player())
    }
}

/// Print results as JSON
fn print_json_results(results: &ReplayResults) {
    #[derive(serde::Serialize)]
    struct JsonPiece {
        row: i8,
        col: i8,
        color: String,
        king: bool,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        moves: &'a [MoveRecord],
        outcome: Outcome,
        winner: Option<String>,
        current_player: String,
        pieces: Vec<JsonPiece>,
    }

    let state = &results.state;
    let output = JsonOutput {
        moves: &results.records,
        outcome: state.outcome(),
        winner: state.outcome().winner().map(|color| color.to_string()),
        current_player: state.current_player().to_string(),
        pieces: state
            .board()
            .entries()
            .into_iter()
            .map(|(pos, piece): (Position, _)| JsonPiece {
                row: pos.row,
                col: pos.col,
                color: piece.color.to_string(),
                king: piece.is_king,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &ReplayResults) {
    println!("\n=== Replay ===");
    for record in &results.records {
        println!(
            "  {:>2}. {:<5} {} -> {} ({:?})",
            record.number, record.player, record.from, record.to, record.kind
        );
    }
    println!();
    print!("{}", results.state.board());
    println!("\nOutcome: {}", describe_outcome(&results.state));
}

// ============================================================================
// TESTS
// ============================================================================
