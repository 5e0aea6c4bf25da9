//! Turn driver tying the pipeline together: scan, assign, emit.

use crate::assign::{min_strength_to_move, plan_moves};
use crate::game_map::MapQuery;
use crate::moves::MoveSet;
use crate::scan::scan_targets;

/// Per-game state: the assigned owner id and the movement threshold derived
/// once from the map dimensions. Everything else is recomputed each turn
/// from the fresh map snapshot.
pub struct Bot {
    owner: u8,
    move_threshold: i32,
}

impl Bot {
    pub fn new(owner: u8, map_width: u16, map_height: u16) -> Self {
        Bot {
            owner,
            move_threshold: min_strength_to_move(map_width, map_height),
        }
    }

    pub fn owner(&self) -> u8 {
        self.owner
    }

    pub fn move_threshold(&self) -> i32 {
        self.move_threshold
    }

    /// Plan one turn: exactly one command per owned tile.
    pub fn plan_turn(&self, map: &dyn MapQuery) -> MoveSet {
        let mut targets = scan_targets(map, self.owner);
        plan_moves(map, self.owner, self.move_threshold, &mut targets)
    }
}
