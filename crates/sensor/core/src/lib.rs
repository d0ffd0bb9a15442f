//! Deterministic proximity and line-of-sight rules for map events.
//!
//! `sensor-core` defines the grid types, the read-only collaborator traits
//! (map cells, agent positions, input) and the predicates that decide whether
//! an observer event has detected the player. All flag mutation flows through
//! [`sensor::ProximityEvaluator`], and supporting crates depend on the types
//! re-exported here.
//!
//! The crate also hosts [`footstep::FootstepTimer`], the per-frame cadence that
//! picks terrain-keyed footstep cues while the player walks.
pub mod config;
pub mod env;
pub mod error;
pub mod flags;
pub mod footstep;
pub mod sensor;
pub mod state;

pub use config::{FootstepConfig, GroundType, ObstacleMask, SensorConfig};
pub use env::{
    AgentOracle, CellInfo, Env, InputOracle, MapDimensions, MapOracle, OracleError, SensorEnv,
};
pub use error::{ErrorSeverity, SensorError};
pub use flags::{FlagStore, SelfSwitch, SelfSwitchKey, SwitchId, ToggleReport, ToggleTarget};
pub use footstep::{Foot, FootstepCue, FootstepTimer};
pub use sensor::{
    ARG_DISTANCE, ARG_OPERATOR, ARG_SELF_SWITCH, ARG_SWITCH, CommandError, ComparisonOperator,
    Detection, DetectionMode, Encounter, EvaluationError, MissReason, ProximityEvaluator,
    RangeRule, STEALTH_REACH, SensorCommand, SightLine, can_stealth_interact, distance,
    has_line_of_sight, is_facing_toward, is_in_range, is_orthogonal,
};
pub use state::{Agent, AgentRole, Direction, EventId, MapId, Position};
