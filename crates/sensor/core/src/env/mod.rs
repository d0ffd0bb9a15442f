//! Traits describing the host engine's read-only data.
//!
//! Oracles expose map cell metadata, agent positions and the input signal. The
//! [`Env`] aggregate bundles them so the evaluator can reach everything it
//! needs without hard coupling to concrete implementations.
mod agents;
mod error;
mod input;
mod map;

pub use agents::AgentOracle;
pub use error::OracleError;
pub use input::InputOracle;
pub use map::{CellInfo, MapDimensions, MapOracle};

/// Aggregates read-only oracles required by the sensor.
pub struct Env<'a, M, A, I>
where
    M: MapOracle + ?Sized,
    A: AgentOracle + ?Sized,
    I: InputOracle + ?Sized,
{
    map: Option<&'a M>,
    agents: Option<&'a A>,
    input: Option<&'a I>,
}

impl<M, A, I> Clone for Env<'_, M, A, I>
where
    M: MapOracle + ?Sized,
    A: AgentOracle + ?Sized,
    I: InputOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, A, I> Copy for Env<'_, M, A, I>
where
    M: MapOracle + ?Sized,
    A: AgentOracle + ?Sized,
    I: InputOracle + ?Sized,
{
}

pub type SensorEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn AgentOracle + 'a, dyn InputOracle + 'a>;

impl<'a, M, A, I> Env<'a, M, A, I>
where
    M: MapOracle + ?Sized,
    A: AgentOracle + ?Sized,
    I: InputOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, agents: Option<&'a A>, input: Option<&'a I>) -> Self {
        Self { map, agents, input }
    }

    pub fn with_all(map: &'a M, agents: &'a A, input: &'a I) -> Self {
        Self::new(Some(map), Some(agents), Some(input))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            agents: None,
            input: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the AgentOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AgentsNotAvailable` if no agent oracle was provided.
    pub fn agents(&self) -> Result<&'a A, OracleError> {
        self.agents.ok_or(OracleError::AgentsNotAvailable)
    }

    /// Returns the InputOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InputNotAvailable` if no input oracle was provided.
    pub fn input(&self) -> Result<&'a I, OracleError> {
        self.input.ok_or(OracleError::InputNotAvailable)
    }
}

impl<'a, M, A, I> Env<'a, M, A, I>
where
    M: MapOracle + 'a,
    A: AgentOracle + 'a,
    I: InputOracle + 'a,
{
    /// Converts this environment into a trait-object based `SensorEnv`.
    pub fn into_sensor_env(self) -> SensorEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let agents: Option<&'a dyn AgentOracle> = self.agents.map(|agents| agents as _);
        let input: Option<&'a dyn InputOracle> = self.input.map(|input| input as _);
        Env::new(map, agents, input)
    }
}
