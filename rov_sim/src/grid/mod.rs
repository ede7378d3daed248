//! # Grid module
//!
//! Provides the read-only obstacle map the rover drives over. Rows may have
//! different lengths, in which case each row wraps around using its own length.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Character used for a free cell in the textual map format.
pub const FREE_CHAR: char = '.';

/// Character used for a blocked cell in the textual map format.
pub const BLOCKED_CHAR: char = '#';

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An obstacle map, indexed by `(row, col)`. A `true` cell is blocked.
///
/// Rows are stored independently so a grid may be jagged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

/// A single cell address in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while building a grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("The grid has no rows")]
    Empty,

    #[error("Row {0} of the grid has no cells")]
    EmptyRow(usize),

    #[error("Unrecognised map character {0:?} at row {1}, column {2}")]
    InvalidCell(char, usize, usize),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Grid {
    /// Create a new grid from a list of rows of blocked flags.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        if let Some(idx) = rows.iter().position(|r| r.is_empty()) {
            return Err(GridError::EmptyRow(idx));
        }

        Ok(Self { rows })
    }

    /// Number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the given row, or `None` if the row doesn't exist.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|r| r.len())
    }

    /// Returns true if `(row, col)` is a cell of this grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some()
    }

    /// Returns true if the cell is blocked.
    ///
    /// Cells which are not part of the grid (for example past the end of a
    /// short row) count as blocked, since the rover can never stand on them.
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).unwrap_or(true)
    }

    /// Iterate over all free cells, row by row.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |c| !self.is_blocked(c.row, c.col))
    }

    /// Iterate over all blocked cells, row by row.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |c| self.is_blocked(c.row, c.col))
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| Cell { row, col })
        })
    }

    fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl std::convert::TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Grid::new(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a textual map, one line per row, `.` for free and `#` for
    /// blocked. Leading and trailing whitespace on each line is ignored, as
    /// are blank lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_idx = rows.len();
            let mut row = Vec::with_capacity(line.len());

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    FREE_CHAR => row.push(false),
                    BLOCKED_CHAR => row.push(true),
                    c => return Err(GridError::InvalidCell(c, row_idx, col)),
                }
            }

            rows.push(row);
        }

        Grid::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &blocked in row {
                write!(f, "{}", if blocked { BLOCKED_CHAR } else { FREE_CHAR })?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grid_new() {
        assert_eq!(Grid::new(vec![]), Err(GridError::Empty));
        assert_eq!(
            Grid::new(vec![vec![false], vec![]]),
            Err(GridError::EmptyRow(1))
        );

        let grid = Grid::new(vec![vec![false, true], vec![false, false, true]]).unwrap();
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.row_len(0), Some(2));
        assert_eq!(grid.row_len(1), Some(3));
        assert_eq!(grid.row_len(2), None);
    }

    #[test]
    fn test_jagged_queries() {
        let grid = Grid::new(vec![vec![false, true], vec![false, false, true]]).unwrap();

        assert!(grid.contains(1, 2));
        assert!(!grid.contains(0, 2));
        assert!(!grid.contains(2, 0));

        assert!(!grid.is_blocked(0, 0));
        assert!(grid.is_blocked(0, 1));
        assert!(grid.is_blocked(1, 2));

        // Missing cells count as blocked
        assert!(grid.is_blocked(0, 2));
        assert!(grid.is_blocked(5, 5));

        assert_eq!(grid.free_cells().count(), 3);
        assert_eq!(
            grid.blocked_cells().collect::<Vec<_>>(),
            vec![Cell { row: 0, col: 1 }, Cell { row: 1, col: 2 }]
        );
    }

    #[test]
    fn test_from_str() {
        let grid: Grid = "
            ...
            .##
            ..#
        "
        .parse()
        .unwrap();

        assert_eq!(
            grid,
            Grid::new(vec![
                vec![false, false, false],
                vec![false, true, true],
                vec![false, false, true],
            ])
            .unwrap()
        );
        assert_eq!(grid.to_string(), "...\n.##\n..#");

        assert_eq!(
            "..\n.x".parse::<Grid>(),
            Err(GridError::InvalidCell('x', 1, 1))
        );
        assert_eq!("\n  \n".parse::<Grid>(), Err(GridError::Empty));
    }

    #[test]
    fn test_deserialize() {
        let grid: Grid = serde_json::from_str("[[false, true], [false]]").unwrap();
        assert_eq!(grid.row_len(1), Some(1));
        assert!(grid.is_blocked(0, 1));

        assert!(serde_json::from_str::<Grid>("[]").is_err());
        assert!(serde_json::from_str::<Grid>("[[false], []]").is_err());
    }
}
