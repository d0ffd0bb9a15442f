//! Errors produced while building or evaluating sensor commands.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, SensorError};
use crate::state::AgentRole;

/// Problems with a command's editor arguments.
///
/// `InvalidOperator` and `InvalidThreshold` do not reject the command; they are
/// kept on it and make it fail closed. The remaining variants reject the entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("unknown sensor command '{0}'")]
    UnknownCommand(String),

    #[error("unrecognized comparison operator '{0}'")]
    InvalidOperator(String),

    #[error("distance threshold '{0}' is not a finite number")]
    InvalidThreshold(String),

    #[error("self-switch '{0}' is not one of 0, A, B, C, D")]
    InvalidSelfSwitch(String),

    #[error("switch id '{0}' is not a non-negative integer")]
    InvalidSwitch(String),
}

impl CommandError {
    /// True for errors that leave the command loaded but inert.
    pub const fn is_fail_closed(&self) -> bool {
        matches!(
            self,
            CommandError::InvalidOperator(_) | CommandError::InvalidThreshold(_)
        )
    }
}

impl SensorError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_) => "COMMAND_UNKNOWN",
            CommandError::InvalidOperator(_) => "COMMAND_INVALID_OPERATOR",
            CommandError::InvalidThreshold(_) => "COMMAND_INVALID_THRESHOLD",
            CommandError::InvalidSelfSwitch(_) => "COMMAND_INVALID_SELF_SWITCH",
            CommandError::InvalidSwitch(_) => "COMMAND_INVALID_SWITCH",
        }
    }
}

/// Reasons an evaluation was skipped without touching any flag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// Observer or target snapshot could not be taken this frame.
    #[error("{role} snapshot unavailable")]
    MissingAgent {
        role: AgentRole,
        #[source]
        source: OracleError,
    },

    /// A required collaborator is not wired into the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl SensorError for EvaluationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EvaluationError::MissingAgent { .. } => ErrorSeverity::Recoverable,
            EvaluationError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EvaluationError::MissingAgent { .. } => "EVALUATION_MISSING_AGENT",
            EvaluationError::Oracle(error) => error.error_code(),
        }
    }
}
