//! Assignment engine: match each owned tile to its best candidate and decide
//! whether to commit strength toward it or hold.

use crate::constants::{DISTANCE_DECAY, MOVE_THRESHOLD_BASE};
use crate::game_map::{row_major, MapQuery, Site};
use crate::location::{Direction, Location};
use crate::moves::MoveSet;
use crate::scan::Candidate;
use log::{debug, trace};

/// Minimum strength an owned tile must accumulate before it commits to a
/// move, derived once per game from the map dimensions. Larger maps lower
/// the bar, since reinforcements take longer to travel.
pub fn min_strength_to_move(width: u16, height: u16) -> i32 {
    MOVE_THRESHOLD_BASE - i32::from(width.max(height)) / 2
}

/// Produce exactly one command per owned tile.
///
/// Owned tiles are visited in row-major order; each takes the available
/// candidate maximizing `score / 1.5^distance` and drains it on commit.
/// Exact score ties resolve to the first candidate in scan order.
pub fn plan_moves(
    map: &dyn MapQuery,
    owner: u8,
    threshold: i32,
    targets: &mut [Candidate],
) -> MoveSet {
    let mut moves = MoveSet::new();

    for loc in row_major(map.width(), map.height()) {
        let site = map.site(loc);
        if site.owner != owner {
            continue;
        }
        let direction = choose_move(map, loc, site, threshold, targets);
        moves.insert(loc, direction);
    }

    debug!(
        "planned {} moves ({} holding)",
        moves.len(),
        moves
            .iter()
            .filter(|&(_, d)| d == Direction::Still)
            .count()
    );
    moves
}

fn choose_move(
    map: &dyn MapQuery,
    loc: Location,
    site: Site,
    threshold: i32,
    targets: &mut [Candidate],
) -> Direction {
    // Best available candidate under the distance discount. Strict
    // comparison keeps the first encountered on exact ties.
    let mut best: Option<(usize, f64, u16)> = None;
    for (index, candidate) in targets.iter().enumerate() {
        if !candidate.is_available() {
            continue;
        }
        let distance = map.distance(loc, candidate.location);
        let discounted = candidate.score() / DISTANCE_DECAY.powi(i32::from(distance));
        if best.map_or(true, |(_, score, _)| discounted > score) {
            best = Some((index, discounted, distance));
        }
    }

    // Candidate set empty or fully taken: nothing to move toward.
    let Some((index, discounted, distance)) = best else {
        trace!("{:?} holds: no candidates remain", loc);
        return Direction::Still;
    };

    let candidate = &targets[index];
    let strength = i32::from(site.strength);
    let residual = candidate.residual_strength();

    let can_capture = strength > residual;
    let worth_moving = strength > threshold || (residual == 0 && distance == 1);
    if !(can_capture && worth_moving) {
        trace!(
            "{:?} holds: strength {} vs residual {} at distance {}",
            loc,
            strength,
            residual,
            distance
        );
        return Direction::Still;
    }

    let direction = Direction::from_angle(map.angle(loc, candidate.location));
    trace!(
        "{:?} -> {:?} ({:?}, discounted score {:.2})",
        loc,
        candidate.location,
        direction,
        discounted
    );
    targets[index].drain(strength);
    direction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_follows_map_size() {
        assert_eq!(min_strength_to_move(5, 5), 38);
        assert_eq!(min_strength_to_move(30, 30), 25);
        assert_eq!(min_strength_to_move(50, 30), 15);
        assert_eq!(min_strength_to_move(30, 50), 15);
    }

    #[test]
    fn threshold_is_deterministic() {
        assert_eq!(min_strength_to_move(40, 25), min_strength_to_move(40, 25));
    }
}
