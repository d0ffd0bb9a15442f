//! Common error infrastructure for sensor-core.
//!
//! Domain-specific errors (`OracleError`, `EvaluationError`, `CommandError`)
//! live next to the code that produces them and implement [`SensorError`] so
//! the runtime can pick a log level and a stable code without matching on
//! every variant.
//!
//! None of these errors ever reaches a player. Every failure degrades to "the
//! sensor did not trigger this frame".

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the next frame may succeed.
    ///
    /// Examples: event not on the current map, player not spawned yet
    Recoverable,

    /// Invalid input that will keep failing until the data changes.
    ///
    /// Examples: unknown command name, bad self-switch letter
    Validation,

    /// The sensor cannot run at all.
    ///
    /// Examples: no map oracle wired into the environment
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all sensor-core errors.
pub trait SensorError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
