//! Map state and toroidal geometry.
//!
//! `GameMap` owns the per-frame snapshot the protocol layer refreshes each
//! turn. The decision pipeline reads it through the `MapQuery` trait so that
//! tests can drive the scanner and assignment engine with synthetic maps.

use crate::location::Location;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// One tile of the map.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Site {
    pub owner: u8,
    pub strength: u8,
    pub production: u8,
}

/// Read-only map queries the decision pipeline depends on.
pub trait MapQuery {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn site(&self, loc: Location) -> Site;
    /// Shortest tile distance between two locations, accounting for wraparound.
    fn distance(&self, a: Location, b: Location) -> u16;
    /// Bearing from `a` to `b` in radians (`atan2` convention, +x East,
    /// +y South), taking the shortest wrapped path on each axis.
    fn angle(&self, a: Location, b: Location) -> f64;
}

/// Row-major iteration over a grid of the given dimensions.
///
/// Scan order is load-bearing: candidate tie-breaking in the assignment
/// engine depends on it.
pub fn row_major(width: u16, height: u16) -> impl Iterator<Item = Location> {
    iproduct!(0..height, 0..width).map(|(y, x)| Location::new(x, y))
}

/// The full map snapshot for one frame, row-major.
#[derive(Clone, Serialize, Deserialize)]
pub struct GameMap {
    width: u16,
    height: u16,
    sites: Vec<Site>,
}

impl GameMap {
    /// Create a map of all-neutral, zero-strength, zero-production sites.
    pub fn new(width: u16, height: u16) -> Self {
        GameMap {
            width,
            height,
            sites: vec![Site::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn site_mut(&mut self, loc: Location) -> &mut Site {
        let index = self.index(loc);
        &mut self.sites[index]
    }

    /// All locations in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        row_major(self.width, self.height)
    }

    fn index(&self, loc: Location) -> usize {
        usize::from(loc.y) * usize::from(self.width) + usize::from(loc.x)
    }

    /// Per-axis delta from `a` to `b` along the shortest wrapped path.
    fn wrapped_delta(&self, a: Location, b: Location) -> (i32, i32) {
        let width = i32::from(self.width);
        let height = i32::from(self.height);

        let mut dx = i32::from(b.x) - i32::from(a.x);
        let mut dy = i32::from(b.y) - i32::from(a.y);

        if dx > width / 2 {
            dx -= width;
        } else if dx < -width / 2 {
            dx += width;
        }
        if dy > height / 2 {
            dy -= height;
        } else if dy < -height / 2 {
            dy += height;
        }

        (dx, dy)
    }
}

impl MapQuery for GameMap {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn site(&self, loc: Location) -> Site {
        self.sites[self.index(loc)]
    }

    fn distance(&self, a: Location, b: Location) -> u16 {
        let (dx, dy) = self.wrapped_delta(a, b);
        (dx.abs() + dy.abs()) as u16
    }

    fn angle(&self, a: Location, b: Location) -> f64 {
        let (dx, dy) = self.wrapped_delta(a, b);
        f64::from(dy).atan2(f64::from(dx))
    }
}
