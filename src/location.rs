use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// A tile coordinate on the (toroidal) game map.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Location {
    pub x: u16,
    pub y: u16,
}

impl Location {
    pub fn new(x: u16, y: u16) -> Self {
        Location { x, y }
    }
}

/// A per-tile command. `Still` holds the tile in place; the four cardinal
/// directions move its full strength one tile, wrapping at the map edges.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Still,
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Direction code used by the engine's move format.
    pub fn to_wire(self) -> u8 {
        match self {
            Direction::Still => 0,
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::West => 4,
        }
    }

    /// Classify a bearing angle (radians, `atan2` convention: +x is East,
    /// +y is South) into the nearest cardinal direction.
    ///
    /// Quadrant boundaries sit at ±45° and ±135°. The boundary angles
    /// themselves resolve as: 45° to South, 135° and ±180° to West,
    /// -135° and -45° to North. Total over [-180°, 180°].
    ///
    /// `Still` is never produced here; holding is decided by the caller.
    pub fn from_angle(angle: f64) -> Direction {
        if angle > -FRAC_PI_4 && angle < FRAC_PI_4 {
            Direction::East
        } else if angle >= FRAC_PI_4 && angle < 3.0 * FRAC_PI_4 {
            Direction::South
        } else if angle >= 3.0 * FRAC_PI_4 || angle < -3.0 * FRAC_PI_4 {
            Direction::West
        } else {
            Direction::North
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn cardinal_angles() {
        assert_eq!(Direction::from_angle(0.0), Direction::East);
        assert_eq!(Direction::from_angle(PI / 2.0), Direction::South);
        assert_eq!(Direction::from_angle(PI), Direction::West);
        assert_eq!(Direction::from_angle(-PI), Direction::West);
        assert_eq!(Direction::from_angle(-PI / 2.0), Direction::North);
    }

    #[test]
    fn quadrant_boundaries() {
        assert_eq!(Direction::from_angle(FRAC_PI_4), Direction::South);
        assert_eq!(Direction::from_angle(3.0 * FRAC_PI_4), Direction::West);
        assert_eq!(Direction::from_angle(-3.0 * FRAC_PI_4), Direction::North);
        assert_eq!(Direction::from_angle(-FRAC_PI_4), Direction::North);
    }

    #[test]
    fn total_over_full_circle() {
        // Every bearing must resolve to exactly one of the four cardinals.
        for deg in -180..=180 {
            let angle = f64::from(deg).to_radians();
            let dir = Direction::from_angle(angle);
            assert_ne!(dir, Direction::Still, "bearing {deg} resolved to Still");
        }
    }
}
