//! Target cell calculations for translations
//!
//! The grid is a torus: leaving one edge brings the rover back in from the
//! opposite edge. East/west wrapping uses the length of the row the rover is
//! currently on, so on a jagged grid the destination depends on which row the
//! rover leaves from.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::{Direction, Heading, Pose};
use crate::grid::{Cell, Grid};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Calculate the cell a translation from `pose` would land on.
///
/// Moving backward is the same as moving forward with the heading reversed.
/// The result is not checked for obstacles, and on a jagged grid it may not
/// be a cell of the grid at all.
pub fn calc_target(grid: &Grid, pose: &Pose, direction: Direction) -> Cell {
    let heading = match direction {
        Direction::Forward => pose.heading,
        Direction::Backward => pose.heading.opposite(),
    };

    calc_step(grid, pose.row, pose.col, heading)
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Step one cell from `(row, col)` towards `heading`, wrapping at the edges.
fn calc_step(grid: &Grid, row: usize, col: usize, heading: Heading) -> Cell {
    let last_row = grid.num_rows() - 1;

    // Rows always have at least one cell. A rover placed past the end of a
    // row can't happen, but treat such a row as a single cell anyway.
    let last_col = grid.row_len(row).unwrap_or(1).saturating_sub(1);

    let (row, col) = match heading {
        Heading::North if row == 0 => (last_row, col),
        Heading::West if col == 0 => (row, last_col),
        Heading::East if col >= last_col => (row, 0),
        Heading::South if row >= last_row => (0, col),
        Heading::North => (row - 1, col),
        Heading::South => (row + 1, col),
        Heading::West => (row, col - 1),
        Heading::East => (row, col + 1),
    };

    Cell { row, col }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
