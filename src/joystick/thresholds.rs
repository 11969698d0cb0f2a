use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest value a 10-bit analog read can produce
pub const ANALOG_MAX: u16 = 1023;

// Threshold key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ThresholdDirection {
    pub const ALL: [ThresholdDirection; 4] = [
        ThresholdDirection::Up,
        ThresholdDirection::Down,
        ThresholdDirection::Left,
        ThresholdDirection::Right,
    ];
}

impl fmt::Display for ThresholdDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThresholdDirection::Up => "up",
            ThresholdDirection::Down => "down",
            ThresholdDirection::Left => "left",
            ThresholdDirection::Right => "right",
        };
        f.write_str(name)
    }
}

/// Bounds an axis reading has to cross before it counts as a direction
///
/// `up` and `right` are lower bounds (the reading must be strictly greater),
/// `down` and `left` are upper bounds (the reading must be strictly smaller).
/// Values are in raw analog units, 0-1023 on the supported boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSet {
    pub up: u16,
    pub down: u16,
    pub left: u16,
    pub right: u16,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            up: 625,
            down: 175,
            left: 175,
            right: 625,
        }
    }
}

impl ThresholdSet {
    pub fn get(&self, direction: ThresholdDirection) -> u16 {
        match direction {
            ThresholdDirection::Up => self.up,
            ThresholdDirection::Down => self.down,
            ThresholdDirection::Left => self.left,
            ThresholdDirection::Right => self.right,
        }
    }

    /// Replaces exactly one bound, the other three stay untouched
    pub fn set(&mut self, direction: ThresholdDirection, amount: u16) {
        match direction {
            ThresholdDirection::Up => self.up = amount,
            ThresholdDirection::Down => self.down = amount,
            ThresholdDirection::Left => self.left = amount,
            ThresholdDirection::Right => self.right = amount,
        }
    }

    /// Returns the first bound outside the analog range, if any
    pub fn out_of_range(&self) -> Option<(ThresholdDirection, u16)> {
        ThresholdDirection::ALL
            .into_iter()
            .map(|d| (d, self.get(d)))
            .find(|(_, v)| *v > ANALOG_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_board_layout() {
        let t = ThresholdSet::default();
        assert_eq!((t.up, t.down, t.left, t.right), (625, 175, 175, 625));
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut t = ThresholdSet::default();
        t.set(ThresholdDirection::Left, 300);

        assert_eq!(t.left, 300);
        assert_eq!(t.up, 625);
        assert_eq!(t.down, 175);
        assert_eq!(t.right, 625);
    }

    #[test]
    fn out_of_range_reports_offending_bound() {
        let mut t = ThresholdSet::default();
        assert_eq!(t.out_of_range(), None);

        t.set(ThresholdDirection::Right, 1024);
        assert_eq!(t.out_of_range(), Some((ThresholdDirection::Right, 1024)));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let t: ThresholdSet = toml::from_str("up = 700").unwrap();
        assert_eq!(t.up, 700);
        assert_eq!(t.down, 175);
    }
}
