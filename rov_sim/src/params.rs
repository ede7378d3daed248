//! # Rover Simulation Parameters
//!
//! This module provides parameters for the simulation executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Serialize, Deserialize};

use crate::grid::Grid;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters describing a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {

    /// The obstacle map, one array of blocked flags per row
    pub map: Grid,

    /// Row of the rover's starting cell
    pub initial_row: usize,

    /// Column of the rover's starting cell
    pub initial_col: usize,

    /// Starting heading, one of N, E, S or W
    pub initial_heading: String,

    /// Command batches to run. Each batch starts from a fresh rover at the
    /// initial pose.
    pub batches: Vec<Vec<String>>,
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_params() {
        let params: SimParams = toml::from_str(r#"
            map = [
                [false, false, false],
                [false, true, true],
                [false, false, true],
            ]
            initial_row = 0
            initial_col = 0
            initial_heading = "N"
            batches = [
                ["C", "C", "F", "F", "A", "F"],
                [],
            ]
        "#).unwrap();

        assert_eq!(params.map.num_rows(), 3);
        assert!(params.map.is_blocked(1, 1));
        assert_eq!(params.initial_heading, "N");
        assert_eq!(params.batches.len(), 2);
        assert!(params.batches[1].is_empty());

        // A map with an empty row is refused
        let bad = toml::from_str::<SimParams>(r#"
            map = [[false], []]
            initial_row = 0
            initial_col = 0
            initial_heading = "N"
            batches = []
        "#);
        assert!(bad.is_err());
    }
}
