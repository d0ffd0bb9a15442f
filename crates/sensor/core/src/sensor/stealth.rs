use crate::state::{Direction, Position};

use super::geometry::{ComparisonOperator, is_facing_toward, is_in_range};

/// Reach of a stealth interaction: adjacent or same cell.
pub const STEALTH_REACH: f64 = 1.0;

/// True when the target (player) faces the observer and is within reach.
///
/// The "action held" gate is applied by the caller; this predicate does not
/// read input.
pub fn can_stealth_interact(
    target: Position,
    target_direction: Direction,
    observer: Position,
) -> bool {
    is_facing_toward(target_direction, target, observer)
        && is_in_range(
            observer,
            target,
            ComparisonOperator::LessOrEqual,
            STEALTH_REACH,
        )
}
