// src/domino.rs

use crate::error::{MalformedInputError, ValidationError};
use serde::{Deserialize, Serialize};

/// Largest position a domino may occupy.
pub const MAX_POSITION: u32 = 500_000;

/// Largest domino height (`i32::MAX`).
pub const MAX_HEIGHT: u32 = i32::MAX as u32;

// -------------------------------------------------
// Tip direction
// -------------------------------------------------
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    /// Signed unit step along the line.
    pub fn step(self) -> i64 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
        }
    }

    pub fn all() -> [Direction; 2] {
        [Direction::Right, Direction::Left]
    }
}

// -------------------------------------------------
// A domino standing in the line
// -------------------------------------------------
/// An upright domino. Immutable once constructed.
///
/// Width is not modelled: a domino of height `h` at `p` strikes everything
/// in `p+1 ..= p+h` when tipped right, and `p-h ..= p-1` when tipped left.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Domino {
    position: u32,
    height: u32,
}

impl Domino {
    pub fn new(position: i64, height: i64) -> Result<Self, ValidationError> {
        if !(0..=i64::from(MAX_POSITION)).contains(&position) {
            return Err(ValidationError::PositionOutOfRange {
                position,
                max: i64::from(MAX_POSITION),
            });
        }
        if !(1..=i64::from(MAX_HEIGHT)).contains(&height) {
            return Err(ValidationError::HeightOutOfRange { position, height });
        }
        Ok(Domino {
            position: position as u32,
            height: height as u32,
        })
    }

    /// Builds a domino from a textual height token.
    pub fn parse(position: i64, height: &str) -> Result<Self, crate::error::CascadeError> {
        let value: i64 = height.trim().parse().map_err(|_| MalformedInputError {
            line: 2,
            index: usize::try_from(position).unwrap_or(usize::MAX),
            token: height.to_string(),
        })?;
        Ok(Domino::new(position, value)?)
    }

    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Farthest position struck when tipped right.
    #[inline]
    pub fn right_reach(&self) -> i64 {
        i64::from(self.position) + i64::from(self.height)
    }

    /// Farthest position struck when tipped left; may be negative.
    #[inline]
    pub fn left_reach(&self) -> i64 {
        i64::from(self.position) - i64::from(self.height)
    }

    pub fn reach(&self, direction: Direction) -> i64 {
        i64::from(self.position) + direction.step() * i64::from(self.height)
    }
}
