//! # Batch reports
//!
//! Runs a single command batch on a fresh rover and records how it ended.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{info, warn};
use serde::Serialize;

use crate::{
    grid::Cell,
    params::SimParams,
    rover_ctrl::{Heading, Pose, Rover, RoverError, TraceSink},
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The outcome of running one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Index of the batch in the parameter file
    pub batch: usize,

    /// The commands which were sent
    pub commands: Vec<String>,

    /// How the batch ended
    pub outcome: BatchOutcome,

    /// The rover's pose once the batch stopped
    pub final_pose: Pose,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// How a batch ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result")]
pub enum BatchOutcome {
    /// Every command was applied
    Completed,

    /// Processing stopped at an unrecognised command
    InvalidCommand { index: usize, token: String },

    /// Processing stopped in front of an obstacle
    Obstacle { target: Cell, heading: Heading },
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl BatchReport {
    /// Run `commands` on a new rover placed at the initial pose from `params`.
    ///
    /// Only a failure to create the rover is returned as an error, failures
    /// while processing the batch are recorded in the report.
    pub fn run<S: TraceSink>(
        batch: usize,
        params: &SimParams,
        commands: &[String],
        debug: bool,
        sink: S,
    ) -> Result<Self, RoverError> {
        let mut rover = Rover::with_sink(
            &params.map,
            params.initial_row,
            params.initial_col,
            &params.initial_heading,
            debug,
            sink,
        )?;

        info!("Batch {}: sending commands {:?}", batch, commands);

        let outcome = match rover.send_commands(Some(commands)) {
            Ok(()) => BatchOutcome::Completed,
            Err(RoverError::InvalidCommand { index, token }) => {
                warn!("Batch {}: invalid command {:?} at index {}", batch, token, index);
                BatchOutcome::InvalidCommand { index, token }
            }
            Err(RoverError::Obstacle { target, heading, .. }) => {
                warn!("Batch {}: obstacle found at {}", batch, target);
                BatchOutcome::Obstacle { target, heading }
            }
            Err(e) => return Err(e),
        };

        let final_pose = rover.get_position();
        info!("Batch {}: final position {}", batch, final_pose);

        Ok(Self {
            batch,
            commands: commands.to_vec(),
            outcome,
            final_pose,
        })
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Grid;
    use crate::rover_ctrl::NullSink;

    fn params() -> SimParams {
        SimParams {
            map: "...\n.##\n..#".parse::<Grid>().unwrap(),
            initial_row: 0,
            initial_col: 0,
            initial_heading: String::from("N"),
            batches: vec![],
        }
    }

    fn cmds(s: &[&str]) -> Vec<String> {
        s.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_run_batches() {
        let params = params();

        let good = BatchReport::run(0, &params, &cmds(&["C", "C", "F", "F", "A", "F"]), false, NullSink)
            .unwrap();
        assert_eq!(good.outcome, BatchOutcome::Completed);
        assert_eq!(
            good.final_pose,
            Pose { row: 2, col: 1, heading: Heading::East }
        );

        let bad = BatchReport::run(1, &params, &cmds(&["C", "C", "F", "F", "A", "F", "F"]), false, NullSink)
            .unwrap();
        assert_eq!(
            bad.outcome,
            BatchOutcome::Obstacle {
                target: Cell { row: 2, col: 2 },
                heading: Heading::East
            }
        );
        assert_eq!(bad.final_pose, good.final_pose);

        let invalid = BatchReport::run(2, &params, &cmds(&["F", "Z"]), false, NullSink).unwrap();
        assert_eq!(
            invalid.outcome,
            BatchOutcome::InvalidCommand { index: 1, token: String::from("Z") }
        );
        assert_eq!(
            invalid.final_pose,
            Pose { row: 2, col: 0, heading: Heading::North }
        );
    }

    #[test]
    fn test_run_blocked_start() {
        let mut params = params();
        params.initial_row = 1;
        params.initial_col = 1;

        assert_eq!(
            BatchReport::run(0, &params, &[], false, NullSink),
            Err(RoverError::InvalidPosition { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_report_json() {
        let report = BatchReport::run(0, &params(), &cmds(&["C", "F"]), false, NullSink).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"]["result"], "Completed");
        assert_eq!(json["final_pose"]["heading"], "E");
        assert_eq!(json["final_pose"]["col"], 1);
    }
}
