//! Heading and pose definitions for the rover

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

// Internal
use super::NUM_HEADINGS;
use crate::grid::Cell;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The position and heading of the rover on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Row of the cell the rover occupies
    pub row: usize,

    /// Column of the cell the rover occupies
    pub col: usize,

    /// The direction the rover is facing
    pub heading: Heading,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Direction the rover faces, ordered clockwise starting from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Error returned when a heading letter can't be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Expected a heading of N, E, S or W, found {0:?}")]
pub struct HeadingParseError(pub String);

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// All headings in clockwise order, indexed by `Heading::index`.
pub const HEADINGS: [Heading; NUM_HEADINGS] =
    [Heading::North, Heading::East, Heading::South, Heading::West];

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Heading {
    /// Position of this heading in the clockwise cycle (north is 0).
    pub fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Get the heading at the given index, wrapping modulo the number of
    /// headings.
    pub fn from_index(index: usize) -> Self {
        HEADINGS[index % NUM_HEADINGS]
    }

    /// The heading one quarter turn clockwise from this one.
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The heading one quarter turn counterclockwise from this one.
    pub fn counterclockwise(self) -> Self {
        Self::from_index(self.index() + NUM_HEADINGS - 1)
    }

    /// The heading facing the other way.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + NUM_HEADINGS / 2)
    }

    /// Single letter representation of the heading.
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl FromStr for Heading {
    type Err = HeadingParseError;

    /// Parse a heading letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            _ => Err(HeadingParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Heading {
    type Error = HeadingParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Heading> for String {
    fn from(h: Heading) -> Self {
        h.as_char().to_string()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Pose {
    /// The cell the rover occupies.
    pub fn cell(&self) -> Cell {
        Cell {
            row: self.row,
            col: self.col,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.row, self.col, self.heading)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_heading() {
        assert_eq!("N".parse(), Ok(Heading::North));
        assert_eq!("e".parse(), Ok(Heading::East));
        assert_eq!("s".parse(), Ok(Heading::South));
        assert_eq!("W".parse(), Ok(Heading::West));

        assert_eq!(
            "X".parse::<Heading>(),
            Err(HeadingParseError(String::from("X")))
        );
        assert!("".parse::<Heading>().is_err());
        assert!("NE".parse::<Heading>().is_err());
    }

    #[test]
    fn test_rotation_cycle() {
        for &h in HEADINGS.iter() {
            assert_eq!(h.clockwise().clockwise().clockwise().clockwise(), h);
            assert_eq!(h.clockwise().counterclockwise(), h);
            assert_eq!(h.counterclockwise().clockwise(), h);
            assert_eq!(h.opposite().opposite(), h);
            assert_eq!(Heading::from_index(h.index()), h);
        }

        // Wrapping at both ends of the cycle
        assert_eq!(Heading::West.clockwise(), Heading::North);
        assert_eq!(Heading::North.counterclockwise(), Heading::West);
        assert_eq!(Heading::East.opposite(), Heading::West);
    }

    #[test]
    fn test_pose_serde() {
        let pose = Pose {
            row: 2,
            col: 1,
            heading: Heading::East,
        };

        let json = serde_json::to_string(&pose).unwrap();
        assert_eq!(json, r#"{"row":2,"col":1,"heading":"E"}"#);
        assert_eq!(serde_json::from_str::<Pose>(&json).unwrap(), pose);
        assert_eq!(
            serde_json::from_str::<Pose>(r#"{"row":0,"col":0,"heading":"w"}"#)
                .unwrap()
                .heading,
            Heading::West
        );
        assert_eq!(pose.to_string(), "[2, 1, E]");
    }
}
