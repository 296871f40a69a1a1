//! End-to-end puzzle pipeline.
//!
//! Validation happens in the same order a reader of the input would notice the
//! problem: the level line first, then the token count, then each token.

use tracing::debug;

use crate::convert::convert_tokens;
use crate::error::PuzzleError;
use crate::grid::{format_grid, Grid, GRID_CELLS};
use crate::level::Level;
use crate::ranking::calculate_ranks;

/// Parses and validates the level line.
pub fn parse_level(line: &str) -> Result<Level, PuzzleError> {
    let text = line.trim();
    let selector: i64 = text
        .parse()
        .map_err(|_| PuzzleError::malformed_level(text))?;
    Level::try_from(selector)
}

/// Splits the token line on whitespace and checks there are exactly 25 tokens.
pub fn split_tokens(line: &str) -> Result<Vec<&str>, PuzzleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != GRID_CELLS {
        return Err(PuzzleError::WrongTokenCount(tokens.len()));
    }
    Ok(tokens)
}

/// Solves one puzzle from its two input lines.
pub fn solve(level_line: &str, tokens_line: &str) -> Result<Grid, PuzzleError> {
    let level = parse_level(level_line)?;
    solve_tokens(level, tokens_line)
}

/// Solves a puzzle whose level has already been validated.
///
/// Lets line-oriented callers reject a bad level before reading the token line.
pub fn solve_tokens(level: Level, tokens_line: &str) -> Result<Grid, PuzzleError> {
    debug!(%level, "solving puzzle");

    let tokens = split_tokens(tokens_line)?;
    let values = convert_tokens(&tokens, level)?;
    debug!(?values, "tokens converted");

    let ranks = calculate_ranks(&values);
    debug!(?ranks, "ranks calculated");

    format_grid(&ranks)
}
