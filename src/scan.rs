//! Target scanner: one pass over the map collecting capturable foreign tiles.

use crate::constants::SCORE_SCALE;
use crate::game_map::{row_major, MapQuery};
use crate::location::Location;
use log::debug;

/// A foreign tile the assignment engine may direct owned tiles toward.
///
/// The residual strength starts at the site's scanned strength and is
/// drained as owned tiles commit to the candidate. Once a drain pushes it
/// below zero the candidate is retired for the rest of the turn.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub location: Location,
    pub production: u8,
    residual: i32,
    score: f64,
    state: Availability,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Availability {
    Available,
    Taken,
}

impl Candidate {
    /// Static desirability: production per unit strength, normalized by 100.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Strength left to overcome after earlier commitments this turn.
    pub fn residual_strength(&self) -> i32 {
        self.residual
    }

    pub fn is_available(&self) -> bool {
        self.state == Availability::Available
    }

    /// Commit `strength` toward this candidate. Oversubscription retires it.
    pub(crate) fn drain(&mut self, strength: i32) {
        self.residual -= strength;
        if self.residual < 0 {
            self.state = Availability::Taken;
        }
    }
}

/// Collect every tile not owned by `owner` with nonzero strength, scored by
/// `production / strength * 100`, in row-major order.
///
/// Zero-strength foreign tiles are deliberately excluded: their capture is
/// handled by the adjacency special case in the assignment engine, and the
/// score ratio is undefined for them.
pub fn scan_targets(map: &dyn MapQuery, owner: u8) -> Vec<Candidate> {
    let mut targets = Vec::new();

    for loc in row_major(map.width(), map.height()) {
        let site = map.site(loc);
        if site.owner == owner || site.strength == 0 {
            continue;
        }
        targets.push(Candidate {
            location: loc,
            production: site.production,
            residual: i32::from(site.strength),
            score: f64::from(site.production) / f64::from(site.strength) * SCORE_SCALE,
            state: Availability::Available,
        });
    }

    debug!("scanned {} capturable foreign tiles", targets.len());
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_map::{GameMap, Site};

    #[test]
    fn skips_own_and_zero_strength_tiles() {
        let mut map = GameMap::new(3, 1);
        *map.site_mut(Location::new(0, 0)) = Site {
            owner: 1,
            strength: 100,
            production: 5,
        };
        *map.site_mut(Location::new(1, 0)) = Site {
            owner: 0,
            strength: 0,
            production: 5,
        };
        *map.site_mut(Location::new(2, 0)) = Site {
            owner: 2,
            strength: 10,
            production: 5,
        };

        let targets = scan_targets(&map, 1);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].location, Location::new(2, 0));
        assert!((targets[0].score() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn drain_retires_on_oversubscription() {
        let mut map = GameMap::new(1, 1);
        *map.site_mut(Location::new(0, 0)) = Site {
            owner: 0,
            strength: 8,
            production: 1,
        };
        let mut targets = scan_targets(&map, 1);
        let candidate = &mut targets[0];

        candidate.drain(5);
        assert_eq!(candidate.residual_strength(), 3);
        assert!(candidate.is_available());

        candidate.drain(5);
        assert_eq!(candidate.residual_strength(), -2);
        assert!(!candidate.is_available());
    }
}
