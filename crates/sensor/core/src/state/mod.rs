//! Per-evaluation snapshots of positions and facings.
//!
//! Nothing here is owned by the sensor: the host engine owns the real agent
//! state and hands out [`Agent`] copies through [`crate::env::AgentOracle`].
mod common;

pub use common::{Agent, AgentRole, Direction, EventId, MapId, Position};
