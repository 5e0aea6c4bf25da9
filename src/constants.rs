/// Owner id the engine assigns to unclaimed tiles.
pub const NEUTRAL_OWNER: u8 = 0;

/// Normalization factor applied to the raw production/strength ratio.
pub const SCORE_SCALE: f64 = 100.0;

/// Base of the exponential distance discount applied during assignment.
pub const DISTANCE_DECAY: f64 = 1.5;

/// Base of the movement threshold before the map-size adjustment.
/// See [`crate::assign::min_strength_to_move`].
pub const MOVE_THRESHOLD_BASE: i32 = 40;
