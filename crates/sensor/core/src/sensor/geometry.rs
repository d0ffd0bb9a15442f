//! Pure grid predicates: radial distance, facing and axis alignment.
//!
//! Distance is Euclidean over integer deltas, never a grid metric, and is
//! compared against the threshold without rounding.

use crate::state::{Direction, Position};

/// Comparison applied to `(actual distance, configured threshold)`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum ComparisonOperator {
    #[strum(to_string = "less than", serialize = "<", serialize = "lt")]
    LessThan,
    #[strum(to_string = "less than or equal to", serialize = "<=", serialize = "le")]
    LessOrEqual,
    #[strum(to_string = "equals", serialize = "==", serialize = "eq")]
    Equal,
    #[strum(to_string = "greater than or equal to", serialize = ">=", serialize = "ge")]
    GreaterOrEqual,
    #[strum(to_string = "greater than", serialize = ">", serialize = "gt")]
    GreaterThan,
}

impl ComparisonOperator {
    /// Applies the operator. Any comparison involving NaN is false.
    #[allow(clippy::float_cmp)]
    pub fn compare(self, actual: f64, threshold: f64) -> bool {
        match self {
            ComparisonOperator::LessThan => actual < threshold,
            ComparisonOperator::LessOrEqual => actual <= threshold,
            ComparisonOperator::Equal => actual == threshold,
            ComparisonOperator::GreaterOrEqual => actual >= threshold,
            ComparisonOperator::GreaterThan => actual > threshold,
        }
    }
}

/// Squared Euclidean distance in cells.
///
/// Deltas between `i32` coordinates reach 2^32 - 1, whose square exceeds
/// `i64`; the sum is exact in `i128`.
pub(crate) fn distance_squared(a: Position, b: Position) -> i128 {
    let dx = i128::from(a.x) - i128::from(b.x);
    let dy = i128::from(a.y) - i128::from(b.y);
    dx * dx + dy * dy
}

/// Euclidean distance between two cells.
pub fn distance(a: Position, b: Position) -> f64 {
    (distance_squared(a, b) as f64).sqrt()
}

/// Compares the observer/target distance against `threshold`.
pub fn is_in_range(
    observer: Position,
    target: Position,
    operator: ComparisonOperator,
    threshold: f64,
) -> bool {
    operator.compare(distance(observer, target), threshold)
}

/// True when `direction`, held at `observer`, points along its axis at `target`.
///
/// Only the axis of the facing is inspected; sharing the cell coordinate on
/// that axis is never "facing".
pub fn is_facing_toward(direction: Direction, observer: Position, target: Position) -> bool {
    match direction {
        Direction::Down => target.y > observer.y,
        Direction::Up => target.y < observer.y,
        Direction::Right => target.x > observer.x,
        Direction::Left => target.x < observer.x,
    }
}

/// True when both cells share a row or a column.
pub fn is_orthogonal(observer: Position, target: Position) -> bool {
    observer.x == target.x || observer.y == target.y
}
