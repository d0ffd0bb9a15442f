//! Oracle access errors.

use crate::error::{ErrorSeverity, SensorError};
use crate::state::EventId;

/// Errors that occur when reading collaborator data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// MapOracle is not available in the environment.
    #[error("MapOracle not available")]
    MapNotAvailable,

    /// AgentOracle is not available in the environment.
    #[error("AgentOracle not available")]
    AgentsNotAvailable,

    /// InputOracle is not available in the environment.
    #[error("InputOracle not available")]
    InputNotAvailable,

    /// The event is not present on the current map.
    #[error("event {0} not found on the current map")]
    EventNotFound(EventId),

    /// The player has no position (e.g. during a scene transition).
    #[error("player position unavailable")]
    PlayerUnavailable,
}

impl SensorError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            MapNotAvailable | AgentsNotAvailable | InputNotAvailable => ErrorSeverity::Fatal,
            EventNotFound(_) | PlayerUnavailable => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            AgentsNotAvailable => "ORACLE_AGENTS_NOT_AVAILABLE",
            InputNotAvailable => "ORACLE_INPUT_NOT_AVAILABLE",
            EventNotFound(_) => "ORACLE_EVENT_NOT_FOUND",
            PlayerUnavailable => "ORACLE_PLAYER_UNAVAILABLE",
        }
    }
}
