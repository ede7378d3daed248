//! Rover control module
//!
//! Holds the rover's pose and applies batches of commands to it over a grid.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_move;
mod cmd;
mod heading;
mod state;
mod trace;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use calc_move::*;
pub use cmd::*;
pub use heading::*;
pub use state::*;
pub use trace::*;

use crate::grid::Cell;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of headings the rover can face.
pub const NUM_HEADINGS: usize = 4;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during rover operation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoverError {
    #[error("Invalid initial heading: {0}")]
    InvalidHeading(#[from] HeadingParseError),

    #[error("Initial position [{row}, {col}] is outside the grid")]
    OutsideGrid { row: usize, col: usize },

    #[error("Invalid initial position [{row}, {col}], the cell is blocked")]
    InvalidPosition { row: usize, col: usize },

    #[error("Cannot process an empty commands list")]
    EmptyCommands,

    #[error("Invalid command {token:?} at index {index}")]
    InvalidCommand { index: usize, token: String },

    #[error("Obstacle found at {target} while heading {heading}, rover stopped at {position}")]
    Obstacle {
        /// The cell the rover tried to move onto
        target: Cell,
        /// The rover's heading at the time
        heading: Heading,
        /// The rover's (unchanged) pose
        position: Pose,
    },
}
