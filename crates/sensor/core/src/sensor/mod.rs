//! Proximity sensing: predicates, line tracing and mode composition.
//!
//! - [`geometry`] holds the radial distance, facing and alignment predicates
//! - [`sight`] traces the cells between two agents
//! - [`stealth`] is the reversed-facing adjacency check
//! - [`evaluator`] combines them per [`DetectionMode`] and applies toggles
mod command;
mod error;
mod evaluator;
mod geometry;
mod mode;
mod sight;
mod stealth;

pub use command::{ARG_DISTANCE, ARG_OPERATOR, ARG_SELF_SWITCH, ARG_SWITCH, RangeRule, SensorCommand};
pub use error::{CommandError, EvaluationError};
pub use evaluator::{Detection, Encounter, MissReason, ProximityEvaluator};
pub use geometry::{ComparisonOperator, distance, is_facing_toward, is_in_range, is_orthogonal};
pub use mode::DetectionMode;
pub use sight::{SightLine, has_line_of_sight};
pub use stealth::{STEALTH_REACH, can_stealth_interact};
