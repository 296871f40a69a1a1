//! Grid layout and rendering.
//!
//! Ranks are laid out row-major: the token at linear position `5 * row + col`
//! lands in `rows()[row][col]`.

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Number of rows and columns in a puzzle grid.
pub const GRID_SIDE: usize = 5;

/// Number of cells (and therefore tokens and ranks) in a puzzle grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// A 5x5 arrangement of ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: [[usize; GRID_SIDE]; GRID_SIDE],
}

impl Grid {
    /// The rows, top to bottom.
    pub fn rows(&self) -> &[[usize; GRID_SIDE]; GRID_SIDE] {
        &self.rows
    }

    /// Renders the grid as output lines in the given style.
    ///
    /// `List` and `Plain` produce one line per row; `Json` produces a single
    /// line holding the whole grid.
    pub fn render(&self, style: OutputStyle) -> Result<Vec<String>, serde_json::Error> {
        let lines = match style {
            OutputStyle::List => self.rows.iter().map(|row| format!("{:?}", row)).collect(),
            OutputStyle::Plain => self
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|rank| rank.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
            OutputStyle::Json => vec![serde_json::to_string(self)?],
        };
        Ok(lines)
    }
}

/// How a solved grid is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputStyle {
    /// Bracketed, comma-separated rows: `[1, 2, 3, 4, 5]`
    #[default]
    List,
    /// Space-separated rows: `1 2 3 4 5`
    Plain,
    /// The whole grid as one JSON array of arrays
    Json,
}

impl OutputStyle {
    /// Style names accepted on the command line and in config files.
    pub const NAMES: [&'static str; 3] = ["list", "plain", "json"];
}

/// Arranges exactly 25 ranks into five rows of five.
pub fn format_grid(ranks: &[usize]) -> Result<Grid, PuzzleError> {
    if ranks.len() != GRID_CELLS {
        return Err(PuzzleError::Layout(ranks.len()));
    }

    let mut rows = [[0; GRID_SIDE]; GRID_SIDE];
    for (row, chunk) in rows.iter_mut().zip(ranks.chunks_exact(GRID_SIDE)) {
        row.copy_from_slice(chunk);
    }
    Ok(Grid { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_grid() -> Grid {
        let ranks: Vec<usize> = (1..=GRID_CELLS).collect();
        format_grid(&ranks).expect("25 ranks to lay out")
    }

    #[test]
    fn lays_out_row_major() {
        let grid = sequential_grid();
        assert_eq!(grid.rows()[0], [1, 2, 3, 4, 5]);
        assert_eq!(grid.rows()[4], [21, 22, 23, 24, 25]);
        assert_eq!(grid.rows()[2][3], 14);
    }

    #[test]
    fn ranks_flatten_back_to_input() {
        let ranks: Vec<usize> = (1..=GRID_CELLS).rev().collect();
        let grid = format_grid(&ranks).expect("25 ranks to lay out");
        let flattened: Vec<usize> = grid.rows().iter().flatten().copied().collect();
        assert_eq!(flattened, ranks);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(format_grid(&[1, 2, 3]), Err(PuzzleError::Layout(3)));
        let too_many: Vec<usize> = (1..=26).collect();
        assert_eq!(format_grid(&too_many), Err(PuzzleError::Layout(26)));
    }

    #[test]
    fn renders_list_style() {
        let lines = sequential_grid()
            .render(OutputStyle::List)
            .expect("list to render");
        insta::assert_snapshot!(lines.join("\n"), @r"
        [1, 2, 3, 4, 5]
        [6, 7, 8, 9, 10]
        [11, 12, 13, 14, 15]
        [16, 17, 18, 19, 20]
        [21, 22, 23, 24, 25]
        ");
    }

    #[test]
    fn renders_plain_style() {
        let lines = sequential_grid()
            .render(OutputStyle::Plain)
            .expect("plain to render");
        insta::assert_snapshot!(lines.join("\n"), @r"
        1 2 3 4 5
        6 7 8 9 10
        11 12 13 14 15
        16 17 18 19 20
        21 22 23 24 25
        ");
    }

    #[test]
    fn renders_json_style() {
        let lines = sequential_grid()
            .render(OutputStyle::Json)
            .expect("json to render");
        assert_eq!(lines.len(), 1);
        insta::assert_snapshot!(lines[0].as_str(), @"[[1,2,3,4,5],[6,7,8,9,10],[11,12,13,14,15],[16,17,18,19,20],[21,22,23,24,25]]");
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let value = serde_json::to_value(sequential_grid()).expect("grid to serialize");
        assert_eq!(value[1][0], 6);
    }

    #[test]
    fn style_names_parse() {
        for name in OutputStyle::NAMES {
            let style: Result<OutputStyle, _> = serde_json::from_value(serde_json::json!(name));
            assert!(style.is_ok(), "style {} should deserialize", name);
        }
        let unknown: Result<OutputStyle, _> = serde_json::from_value(serde_json::json!("table"));
        assert!(unknown.is_err());
        assert_eq!(OutputStyle::default(), OutputStyle::List);
    }
}
