//! Per-turn command set, unique by tile coordinate.

use crate::location::{Direction, Location};
use fnv::FnvHashMap;

/// The full set of commands for one turn. The assignment engine visits each
/// owned tile exactly once, so keying by location makes duplicates
/// structurally impossible.
#[derive(Clone, Debug, Default)]
pub struct MoveSet {
    moves: FnvHashMap<Location, Direction>,
}

impl MoveSet {
    pub fn new() -> Self {
        MoveSet {
            moves: FnvHashMap::default(),
        }
    }

    /// Record the command for a tile, replacing any earlier entry for it.
    pub fn insert(&mut self, loc: Location, direction: Direction) {
        self.moves.insert(loc, direction);
    }

    pub fn get(&self, loc: Location) -> Option<Direction> {
        self.moves.get(&loc).copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, Direction)> + '_ {
        self.moves.iter().map(|(&loc, &dir)| (loc, dir))
    }
}
