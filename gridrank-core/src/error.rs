//! Error types for the puzzle pipeline.

use thiserror::Error;

use crate::grid::GRID_CELLS;

/// Failures a puzzle run can report.
///
/// Every variant is a user-facing validation failure; the CLI prints it with
/// an `Error: ` prefix and stops the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The level line is not a decimal integer.
    #[error("Invalid puzzle level: '{0}' is not an integer.")]
    MalformedLevel(String),

    /// The level is an integer outside 1..=3.
    #[error("Invalid puzzle level. Must be between 1 and 3.")]
    InvalidLevel(i64),

    /// The token line does not hold exactly 25 tokens.
    #[error("Input must contain exactly {expected} numbers/symbols.", expected = GRID_CELLS)]
    WrongTokenCount(usize),

    /// A token could not be parsed as a decimal integer after decoding.
    #[error("Invalid input: {token} cannot be converted to number")]
    InvalidInput {
        /// The token text after level decoding
        token: String,
    },

    /// The rank list handed to the grid formatter has the wrong length.
    #[error("Grid layout requires exactly {expected} ranks, got {0}", expected = GRID_CELLS)]
    Layout(usize),
}

impl PuzzleError {
    /// Create an InvalidInput error for the given token text.
    pub fn invalid_input(token: impl Into<String>) -> Self {
        Self::InvalidInput {
            token: token.into(),
        }
    }

    /// Create a MalformedLevel error from the offending level text.
    pub fn malformed_level(text: impl Into<String>) -> Self {
        Self::MalformedLevel(text.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_reported_wording() {
        assert_eq!(
            PuzzleError::InvalidLevel(4).to_string(),
            "Invalid puzzle level. Must be between 1 and 3."
        );
        assert_eq!(
            PuzzleError::WrongTokenCount(24).to_string(),
            "Input must contain exactly 25 numbers/symbols."
        );
        assert_eq!(
            PuzzleError::invalid_input("abc").to_string(),
            "Invalid input: abc cannot be converted to number"
        );
    }

    #[test]
    fn layout_error_reports_actual_length() {
        assert_eq!(
            PuzzleError::Layout(3).to_string(),
            "Grid layout requires exactly 25 ranks, got 3"
        );
    }
}
