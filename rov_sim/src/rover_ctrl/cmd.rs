//! Commands accepted by the rover

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A single rover command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Command {
    /// Move one cell in the direction the rover is facing.
    Forward,
    /// Move one cell away from the direction the rover is facing.
    Backward,
    /// Turn a quarter turn to the right on the spot.
    RotateClockwise,
    /// Turn a quarter turn to the left on the spot.
    RotateCounterclockwise,
}

/// Direction of a translation relative to the rover's heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Direction of an on-the-spot rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

/// Error returned when a command token isn't recognised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0:?} is not a recognised command (expected F, B, C or A)")]
pub struct CommandParseError(pub String);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Command {
    /// The token used for this command in a batch.
    pub fn token(self) -> &'static str {
        match self {
            Command::Forward => "F",
            Command::Backward => "B",
            Command::RotateClockwise => "C",
            Command::RotateCounterclockwise => "A",
        }
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parse a command token. Tokens are case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Command::Forward),
            "B" => Ok(Command::Backward),
            "C" => Ok(Command::RotateClockwise),
            "A" => Ok(Command::RotateCounterclockwise),
            _ => Err(CommandParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => f.write_str("clockwise"),
            Rotation::Counterclockwise => f.write_str("counterclockwise"),
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
