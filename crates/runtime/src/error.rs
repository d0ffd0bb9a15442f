//! Error types surfaced by the runtime.

use sensor_core::{ErrorSeverity, EvaluationError, EventId, OracleError, SensorError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a map to be configured before building")]
    MissingMap,

    #[error("critical hook '{hook}' failed on frame {frame}")]
    CriticalHook {
        hook: &'static str,
        frame: u64,
        #[source]
        source: HookError,
    },
}

/// Failure reported by a single frame hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("sensor on event {event} could not be evaluated")]
    Evaluation {
        event: EventId,
        #[source]
        source: EvaluationError,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl SensorError for HookError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            HookError::Evaluation { source, .. } => source.severity(),
            HookError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            HookError::Evaluation { source, .. } => source.error_code(),
            HookError::Oracle(error) => error.error_code(),
        }
    }
}
