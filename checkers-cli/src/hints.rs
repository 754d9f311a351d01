//! Hints command - show where a piece may move after a sequence of moves

use anyhow::{Context, Result};
use clap::Args;

use checkers_core::{new_game, Position};

use crate::notation::{format_position, parse_move, parse_position};
use crate::replay::{load_setup, ReplayArgs};

#[derive(Args)]
pub struct HintsArgs {
    /// Cell of the piece to inspect, as `row,col`
    #[arg(long, value_name = "CELL")]
    pub at: String,

    #[command(flatten)]
    pub game: ReplayArgs,
}

pub fn run(args: HintsArgs) -> Result<()> {
    let setup = load_setup(&args.game)?;
    let mut state = new_game(&setup).context("Invalid setup")?;

    for text in &args.game.moves {
        let (from, to) = parse_move(text)?;
        state
            .attempt_move(from, to)
            .with_context(|| format!("Move `{}` rejected", text))?;
    }

    let at = parse_position(&args.at)?;
    let legal = state.query_legal_destinations(at);
    let hints = state.query_move_hints(at);
    let captures = state.query_mandatory_captures();

    tracing::debug!("{} legal destinations from {}", legal.len(), at);

    if args.game.json {
        let output = serde_json::json!({
            "at": at,
            "current_player": state.current_player(),
            "legal": legal,
            "hints": hints,
            "mandatory_captures": captures,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", state.board());
        println!("\n{} to move", state.current_player());
        println!("Legal from {}:  {}", format_position(at), format_list(&legal));
        println!("Hints:          {}", format_list(&hints));
        println!("Captures ({}):  {}", state.current_player(), format_list(&captures));
    }

    Ok(())
}

fn format_list(cells: &[Position]) -> String {
    if cells.is_empty() {
        return "-".to_string();
    }
    cells
        .iter()
        .map(|&pos| format_position(pos))
        .collect::<Vec<_>>()
        .join(" ")
}
