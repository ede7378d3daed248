//! Trace events emitted by the rover and the sinks that receive them

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, error, warn};
use serde::Serialize;
use std::fmt;

// Internal
use super::{Direction, Heading, Pose, Rotation};
use crate::grid::Cell;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Something that receives the rover's trace events.
pub trait TraceSink {
    /// Handle a single event.
    fn log(&mut self, event: &TraceEvent);
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Sink which discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

/// Sink which forwards events to the `log` crate.
///
/// Step by step events are logged at debug level, obstacle announcements at
/// warn and error.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Events emitted while the rover processes commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TraceEvent {
    /// The rover has been created at this pose.
    Initialised(Pose),

    /// A rotation is about to be performed.
    Rotating(Rotation),

    /// The heading after a rotation.
    NewHeading(Heading),

    /// A translation is about to be performed.
    Moving(Direction),

    /// The pose after a successful translation.
    NewPosition(Pose),

    /// The target of a translation was blocked.
    ObstacleFound { target: Cell, heading: Heading },

    /// The rover stays at this pose after an obstacle.
    Backtracking(Pose),

    /// The rest of the batch will not be executed.
    Aborting,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TraceEvent {
    /// Returns true for events which are only emitted in debug mode.
    pub fn is_debug(&self) -> bool {
        !matches!(
            self,
            TraceEvent::ObstacleFound { .. } | TraceEvent::Backtracking(_) | TraceEvent::Aborting
        )
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Initialised(p) => write!(f, "Initial position is: {}", p),
            TraceEvent::Rotating(r) => write!(f, "Moving {}", r),
            TraceEvent::NewHeading(h) => write!(f, "My new heading is: {}", h),
            TraceEvent::Moving(d) => write!(f, "Moving {}", d),
            TraceEvent::NewPosition(p) => write!(f, "My new position is: {}", p),
            TraceEvent::ObstacleFound { target, heading } => write!(
                f,
                "I have found an obstacle in position: [{}, {}, {}]",
                target.row, target.col, heading
            ),
            TraceEvent::Backtracking(p) => write!(f, "Backtracking to position: {}", p),
            TraceEvent::Aborting => f.write_str("Aborting commands sequence"),
        }
    }
}

impl TraceSink for NullSink {
    fn log(&mut self, _event: &TraceEvent) {}
}

impl TraceSink for LogSink {
    fn log(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::ObstacleFound { .. } => error!("{}", event),
            TraceEvent::Backtracking(_) | TraceEvent::Aborting => warn!("{}", event),
            _ => debug!("{}", event),
        }
    }
}

/// Collects every event, mostly useful for inspecting a run afterwards.
impl TraceSink for Vec<TraceEvent> {
    fn log(&mut self, event: &TraceEvent) {
        self.push(event.clone());
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn log(&mut self, event: &TraceEvent) {
        (**self).log(event)
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Box<S> {
    fn log(&mut self, event: &TraceEvent) {
        (**self).log(event)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_event_display() {
        let pose = Pose {
            row: 2,
            col: 1,
            heading: Heading::East,
        };

        assert_eq!(
            TraceEvent::ObstacleFound {
                target: Cell { row: 2, col: 2 },
                heading: Heading::East
            }
            .to_string(),
            "I have found an obstacle in position: [2, 2, E]"
        );
        assert_eq!(
            TraceEvent::Backtracking(pose).to_string(),
            "Backtracking to position: [2, 1, E]"
        );
        assert_eq!(
            TraceEvent::Rotating(Rotation::Clockwise).to_string(),
            "Moving clockwise"
        );
        assert_eq!(
            TraceEvent::NewHeading(Heading::South).to_string(),
            "My new heading is: S"
        );
    }

    #[test]
    fn test_sinks() {
        let mut events: Vec<TraceEvent> = Vec::new();
        {
            let mut sink: Box<dyn TraceSink + '_> = Box::new(&mut events);
            sink.log(&TraceEvent::Aborting);
        }
        assert_eq!(events, vec![TraceEvent::Aborting]);
        assert!(!TraceEvent::Aborting.is_debug());
        assert!(TraceEvent::Moving(Direction::Forward).is_debug());

        // Must not panic without a logger installed
        LogSink.log(&TraceEvent::Aborting);
        NullSink.log(&TraceEvent::Aborting);
    }
}
