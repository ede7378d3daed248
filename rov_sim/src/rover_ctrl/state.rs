//! Implementations for the rover state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use super::{
    calc_target,
    Command, Direction, Rotation,
    Heading, Pose,
    NullSink, TraceEvent, TraceSink,
    RoverError};
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A rover driving over a borrowed grid.
///
/// The rover's cell is never blocked: construction fails on a blocked cell and
/// moves onto blocked cells are rejected before being applied.
pub struct Rover<'g, S = NullSink> {
    grid: &'g Grid,

    pose: Pose,

    /// If true step by step trace events are sent to the sink
    debug: bool,

    sink: S,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<'g> Rover<'g, NullSink> {
    /// Create a new rover on `grid` at `(row, col)` facing `heading`.
    ///
    /// `heading` is one of `N`, `E`, `S` or `W`, in any case. Trace events are
    /// discarded, use [`Rover::with_sink`] to receive them.
    pub fn new(
        grid: &'g Grid,
        row: usize,
        col: usize,
        heading: &str,
        debug: bool
    ) -> Result<Self, RoverError> {
        Self::with_sink(grid, row, col, heading, debug, NullSink)
    }
}

impl<'g, S: TraceSink> Rover<'g, S> {
    /// Create a new rover which reports trace events to `sink`.
    pub fn with_sink(
        grid: &'g Grid,
        row: usize,
        col: usize,
        heading: &str,
        debug: bool,
        sink: S
    ) -> Result<Self, RoverError> {
        let heading: Heading = heading.parse()?;

        if !grid.contains(row, col) {
            return Err(RoverError::OutsideGrid { row, col })
        }

        if grid.is_blocked(row, col) {
            return Err(RoverError::InvalidPosition { row, col })
        }

        let mut rover = Self {
            grid,
            pose: Pose { row, col, heading },
            debug,
            sink,
        };

        rover.trace(TraceEvent::Initialised(rover.pose));

        Ok(rover)
    }

    /// Get the current pose of the rover.
    pub fn get_position(&self) -> Pose {
        self.pose
    }

    /// The grid the rover is driving over.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// The sink receiving this rover's trace events.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Process a batch of command tokens in order.
    ///
    /// `None` is rejected with [`RoverError::EmptyCommands`], while an empty
    /// batch does nothing. Processing stops at the first unrecognised token or
    /// obstacle. Commands before that point stay applied.
    pub fn send_commands<I, T>(&mut self, commands: Option<I>) -> Result<(), RoverError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>
    {
        let commands = match commands {
            Some(c) => c,
            None => return Err(RoverError::EmptyCommands)
        };

        for (index, token) in commands.into_iter().enumerate() {
            let token = token.as_ref();

            let cmd: Command = match token.parse() {
                Ok(c) => c,
                Err(_) => return Err(RoverError::InvalidCommand {
                    index,
                    token: token.to_string()
                })
            };

            self.apply(cmd)?;
        }

        Ok(())
    }

    /// Process a batch of already parsed commands in order, stopping at the
    /// first obstacle.
    pub fn send_command_list(&mut self, commands: &[Command]) -> Result<(), RoverError> {
        for &cmd in commands {
            self.apply(cmd)?;
        }

        Ok(())
    }

    /// Apply a single command.
    pub fn apply(&mut self, cmd: Command) -> Result<(), RoverError> {
        match cmd {
            Command::RotateClockwise => self.rotate(Rotation::Clockwise),
            Command::RotateCounterclockwise => self.rotate(Rotation::Counterclockwise),
            Command::Forward => self.translate(Direction::Forward)?,
            Command::Backward => self.translate(Direction::Backward)?,
        }

        Ok(())
    }

    /// Turn on the spot. Never fails and never changes the position.
    fn rotate(&mut self, rotation: Rotation) {
        self.trace(TraceEvent::Rotating(rotation));

        self.pose.heading = match rotation {
            Rotation::Clockwise => self.pose.heading.clockwise(),
            Rotation::Counterclockwise => self.pose.heading.counterclockwise(),
        };

        self.trace(TraceEvent::NewHeading(self.pose.heading));
    }

    /// Move one cell, or leave the pose untouched if the target is blocked.
    fn translate(&mut self, direction: Direction) -> Result<(), RoverError> {
        self.trace(TraceEvent::Moving(direction));

        let target = calc_target(self.grid, &self.pose, direction);

        if self.grid.is_blocked(target.row, target.col) {
            let heading = self.pose.heading;

            self.trace(TraceEvent::ObstacleFound { target, heading });
            self.trace(TraceEvent::Backtracking(self.pose));
            self.trace(TraceEvent::Aborting);

            return Err(RoverError::Obstacle {
                target,
                heading,
                position: self.pose
            })
        }

        self.pose.row = target.row;
        self.pose.col = target.col;

        self.trace(TraceEvent::NewPosition(self.pose));

        Ok(())
    }

    fn trace(&mut self, event: TraceEvent) {
        if self.debug || !event.is_debug() {
            self.sink.log(&event);
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
