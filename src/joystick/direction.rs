use serde::{Deserialize, Serialize};
use std::fmt;

use super::thresholds::ThresholdSet;
use crate::output::Compass;

/// One reading of all three joystick inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub x: u16,
    pub y: u16,
    /// Raw digital level as reported by the platform
    pub button: u8,
}

impl Sample {
    /// Only an exact `1` counts as pressed
    pub fn is_pressed(&self) -> bool {
        self.button == 1
    }
}

// Classified stick position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::None => "None",
        }
    }

    /// Arrow heading for this direction, `None` when the stick is centred
    pub fn compass(&self) -> Option<Compass> {
        match self {
            Direction::Up => Some(Compass::North),
            Direction::Down => Some(Compass::South),
            Direction::Left => Some(Compass::West),
            Direction::Right => Some(Compass::East),
            Direction::None => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a sample to a direction.
///
/// Checks run in a fixed order and the first match wins: up, down, left, right.
/// The vertical axis therefore always beats the horizontal one on diagonals.
/// Comparisons are strict, a reading equal to a bound does not trigger it.
pub fn classify(sample: &Sample, thresholds: &ThresholdSet) -> Direction {
    if sample.y > thresholds.up {
        Direction::Up
    } else if sample.y < thresholds.down {
        Direction::Down
    } else if sample.x < thresholds.left {
        Direction::Left
    } else if sample.x > thresholds.right {
        Direction::Right
    } else {
        Direction::None
    }
}
