//! Failures surfaced by the command-line front end.

use config::ConfigError;
use gridrank_core::PuzzleError;
use thiserror::Error;

/// Everything that can end a run.
///
/// Puzzle validation failures are the expected kind and print with `Error: `;
/// anything else prints with `Unexpected error: `.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("EOF when reading the {0} line")]
    MissingLine(&'static str),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to render grid: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Prefix that tells expected failures apart from unexpected ones.
    pub fn prefix(&self) -> &'static str {
        match self {
            CliError::Puzzle(_) => "Error",
            _ => "Unexpected error",
        }
    }

    /// The one line printed for this failure.
    pub fn report_line(&self) -> String {
        format!("{}: {}", self.prefix(), self)
    }
}
