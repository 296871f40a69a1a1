//! Line-oriented puzzle input.

use gridrank_core::{parse_level, solve_tokens, Grid};
use std::io::BufRead;

use crate::error::CliError;

/// Read the level line, validate it, then read and solve the token line.
///
/// The level is rejected before the token line is read, so a bad level is
/// reported even when no second line follows.
pub fn solve_from_reader(reader: impl BufRead) -> Result<Grid, CliError> {
    let mut lines = reader.lines();

    let level_line = lines.next().ok_or(CliError::MissingLine("level"))??;
    let level = parse_level(&level_line)?;

    let tokens_line = lines.next().ok_or(CliError::MissingLine("token"))??;
    Ok(solve_tokens(level, &tokens_line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridrank_core::PuzzleError;
    use std::io::Cursor;

    #[test]
    fn solves_two_line_input() {
        let tokens: Vec<String> = (1..=25).map(|n| n.to_string()).collect();
        let input = format!("1\n{}\n", tokens.join(" "));
        let grid = solve_from_reader(Cursor::new(input)).expect("puzzle to solve");
        assert_eq!(grid.rows()[2], [11, 12, 13, 14, 15]);
    }

    #[test]
    fn bad_level_is_reported_without_token_line() {
        let result = solve_from_reader(Cursor::new("5\n"));
        assert!(matches!(
            result,
            Err(CliError::Puzzle(PuzzleError::InvalidLevel(5)))
        ));
    }

    #[test]
    fn empty_input_is_missing_level() {
        let result = solve_from_reader(Cursor::new(""));
        assert!(matches!(result, Err(CliError::MissingLine("level"))));
    }

    #[test]
    fn missing_token_line_is_unexpected() {
        let result = solve_from_reader(Cursor::new("1\n"));
        assert!(matches!(result, Err(CliError::MissingLine("token"))));
    }
}
