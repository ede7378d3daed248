//! # Rover simulation library.
//!
//! Simulates a rover driving over a wrap-around grid containing obstacles.
//! The executable in this crate, as well as the benchmarks, use the items
//! defined here.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Grid module - the read-only obstacle map the rover drives over
pub mod grid;

/// Rover control module - applies command batches to the rover's pose
pub mod rover_ctrl;

/// Parameters for the simulation executable
pub mod params;

/// Batch reports - records the outcome of each command batch
pub mod report;
