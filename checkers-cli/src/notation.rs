//! Text notation for cells and moves: `3,0` and `3,0-2,1`

use anyhow::{anyhow, bail, Context, Result};
use checkers_core::Position;

/// Parse `row,col`
pub fn parse_position(text: &str) -> Result<Position> {
    let (row, col) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `row,col`, got `{}`", text))?;

    let row: i8 = row
        .trim()
        .parse()
        .with_context(|| format!("bad row in `{}`", text))?;
    let col: i8 = col
        .trim()
        .parse()
        .with_context(|| format!("bad column in `{}`", text))?;

    Ok(Position::new(row, col))
}

/// Parse `row,col-row,col`
pub fn parse_move(text: &str) -> Result<(Position, Position)> {
    let Some((from, to)) = text.split_once('-') else {
        bail!("expected `row,col-row,col`, got `{}`", text);
    };
    Ok((parse_position(from)?, parse_position(to)?))
}

pub fn format_position(pos: Position) -> String {
    format!("{},{}", pos.row, pos.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3,0").unwrap(), Position::new(3, 0));
        assert_eq!(parse_position(" 1 , 2 ").unwrap(), Position::new(1, 2));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
    }

    #[test]
    fn test_parse_move() {
        let (from, to) = parse_move("3,0-2,1").unwrap();
        assert_eq!(from, Position::new(3, 0));
        assert_eq!(to, Position::new(2, 1));
        assert!(parse_move("3,0 2,1").is_err());
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(Position::new(0, 3)), "0,3");
    }
}
