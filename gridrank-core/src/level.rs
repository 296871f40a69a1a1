//! Puzzle level selection.
//!
//! The level decides how raw tokens are decoded before ranking:
//!
//! | level | variant              | decoding                                  |
//! |-------|----------------------|-------------------------------------------|
//! | 1     | [`Level::Plain`]     | none, tokens are decimal integers          |
//! | 2     | [`Level::Symbols`]   | punctuation symbols become digits first   |
//! | 3     | [`Level::Weighted`]  | parsed integer goes through the weight table |

use std::fmt;

use crate::error::PuzzleError;

/// Returns true iff `level` is one of the supported selectors 1, 2 or 3.
pub fn is_valid_level(level: i64) -> bool {
    (1..=3).contains(&level)
}

/// A validated puzzle level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Level 1
    Plain,
    /// Level 2
    Symbols,
    /// Level 3
    Weighted,
}

impl Level {
    /// The numeric selector this level was read from.
    pub fn selector(self) -> i64 {
        match self {
            Level::Plain => 1,
            Level::Symbols => 2,
            Level::Weighted => 3,
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = PuzzleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Plain),
            2 => Ok(Level::Symbols),
            3 => Ok(Level::Weighted),
            other => Err(PuzzleError::InvalidLevel(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}
