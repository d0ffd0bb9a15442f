//! Runtime implementations of the `sensor-core` oracle traits.
//!
//! The map is immutable once loaded and shared behind an `Arc`. Agent
//! positions and input change between frames and are owned by the
//! [`OracleManager`], which builds [`sensor_core::SensorEnv`] snapshots on
//! demand.
mod agents;
mod input;
mod map;

use std::sync::Arc;

use sensor_core::{Env, SensorEnv};

pub use agents::AgentTable;
pub use input::InputState;
pub use map::MapOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) map: Arc<MapOracleImpl>,
    pub(crate) agents: AgentTable,
    pub(crate) input: InputState,
}

impl OracleManager {
    /// Creates a manager with an empty agent table on the map's id.
    pub fn new(map: Arc<MapOracleImpl>) -> Self {
        let agents = AgentTable::new(map.map_id());
        Self::with_agents(map, agents)
    }

    pub fn with_agents(map: Arc<MapOracleImpl>, agents: AgentTable) -> Self {
        Self {
            map,
            agents,
            input: InputState::default(),
        }
    }

    /// Borrows every oracle as a `SensorEnv` for the evaluator.
    pub fn as_sensor_env(&self) -> SensorEnv<'_> {
        Env::with_all(self.map.as_ref(), &self.agents, &self.input).into_sensor_env()
    }

    pub fn map(&self) -> &MapOracleImpl {
        &self.map
    }

    pub fn agents(&self) -> &AgentTable {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut AgentTable {
        &mut self.agents
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }
}
