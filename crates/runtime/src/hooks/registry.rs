//! Hook registry for managing and executing frame hooks.

use sensor_core::SensorError;
use tracing::{debug, error, warn};

use super::{FrameContext, FrameHook, HookCriticality};
use crate::error::{HookError, RuntimeError};

/// Registry that owns the frame hooks and runs them in priority order.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn FrameHook>>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Box<dyn FrameHook>>) -> Self {
        hooks.sort_by_key(|hook| hook.priority());
        Self { hooks }
    }

    /// Adds a hook after every hook of lower or equal priority.
    pub fn register(&mut self, hook: Box<dyn FrameHook>) {
        let index = self
            .hooks
            .partition_point(|existing| existing.priority() <= hook.priority());
        self.hooks.insert(index, hook);
    }

    /// Runs every hook once for the current frame.
    ///
    /// # Error Handling
    ///
    /// - `Critical`: Returns error immediately; later hooks do not run
    /// - `Important`: Logs error and continues to next hook (default)
    /// - `Optional`: Logs at debug level and continues silently
    pub fn run_frame(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), RuntimeError> {
        for hook in self.hooks.iter_mut() {
            if let Err(e) = hook.run(ctx) {
                Self::handle_hook_error(hook.as_ref(), ctx.frame, e)?;
            }
        }

        Ok(())
    }

    /// Returns the number of hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities in execution order (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Applies the hook's criticality to a failure.
    ///
    /// Recoverable failures of `Important` hooks log at `warn`; the next frame
    /// may succeed.
    fn handle_hook_error(
        hook: &dyn FrameHook,
        frame: u64,
        error: HookError,
    ) -> Result<(), RuntimeError> {
        let severity = error.severity();
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    frame,
                    criticality = "critical",
                    severity = severity.as_str(),
                    code = error.error_code(),
                    error = %error,
                    "Critical hook failed, aborting frame"
                );
                return Err(RuntimeError::CriticalHook {
                    hook: hook.name(),
                    frame,
                    source: error,
                });
            }
            HookCriticality::Important if severity.is_recoverable() => warn!(
                target: "runtime::hooks",
                hook = hook.name(),
                frame,
                criticality = "important",
                severity = severity.as_str(),
                code = error.error_code(),
                error = %error,
                "Hook failed, retrying next frame"
            ),
            HookCriticality::Important => error!(
                target: "runtime::hooks",
                hook = hook.name(),
                frame,
                criticality = "important",
                severity = severity.as_str(),
                code = error.error_code(),
                error = %error,
                "Hook failed, continuing"
            ),
            HookCriticality::Optional => debug!(
                target: "runtime::hooks",
                hook = hook.name(),
                frame,
                criticality = "optional",
                severity = severity.as_str(),
                code = error.error_code(),
                error = %error,
                "Optional hook failed"
            ),
        }

        Ok(())
    }
}
