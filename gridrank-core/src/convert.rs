//! Token conversion: raw token text to numeric values.

use tracing::trace;

use crate::decoding::{decode_symbols, decode_weight};
use crate::error::PuzzleError;
use crate::level::Level;

/// Converts a single raw token according to `level`.
///
/// Level 2 tokens are symbol-decoded before parsing; level 3 values go through
/// the weight decoder after parsing. A parse failure reports the text that was
/// parsed, so level 2 errors show the decoded digits.
pub fn convert_token(token: &str, level: Level) -> Result<i64, PuzzleError> {
    let text = match level {
        Level::Symbols => decode_symbols(token),
        Level::Plain | Level::Weighted => token.to_string(),
    };

    let parsed: i64 = text
        .parse()
        .map_err(|_| PuzzleError::invalid_input(&text))?;

    let value = match level {
        Level::Weighted => decode_weight(parsed),
        Level::Plain | Level::Symbols => parsed,
    };
    trace!(token, value, "converted token");
    Ok(value)
}

/// Converts every token in order, stopping at the first one that fails.
///
/// No partial output is returned on failure.
pub fn convert_tokens<S: AsRef<str>>(tokens: &[S], level: Level) -> Result<Vec<i64>, PuzzleError> {
    tokens
        .iter()
        .map(|token| convert_token(token.as_ref(), level))
        .collect()
}
