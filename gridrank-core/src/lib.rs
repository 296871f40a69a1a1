//! # gridrank-core
//!
//! Decoding and ranking engine for the 5x5 grid-ranking puzzle.
//!
//! A puzzle run takes a level selector and 25 raw tokens. Each token is decoded
//! according to its level, the decoded values are ranked ascending (ties go to
//! the earlier token), and the ranks are laid out as a 5x5 grid:
//!
//! ```text
//! level line  -> Level          (level)
//! token line  -> Vec<i64>       (convert, decoding)
//! values      -> Vec<usize>     (ranking)
//! ranks       -> Grid           (grid)
//! ```
//!
//! [`pipeline::solve`] runs the whole thing; the individual stages are public so
//! callers can drive them separately.

pub mod convert;
pub mod decoding;
pub mod error;
pub mod grid;
pub mod level;
pub mod pipeline;
pub mod ranking;

pub use convert::convert_tokens;
pub use error::PuzzleError;
pub use grid::{format_grid, Grid, OutputStyle, GRID_CELLS, GRID_SIDE};
pub use level::{is_valid_level, Level};
pub use pipeline::{parse_level, solve, solve_tokens, split_tokens};
pub use ranking::calculate_ranks;
