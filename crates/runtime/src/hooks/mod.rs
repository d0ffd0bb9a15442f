//! Per-frame hook system for runtime orchestration.
//!
//! Every frame the runtime runs each registered hook once, in priority order.
//! Sensors and footsteps are both hooks; hosts can register their own.
//!
//! # Architecture
//!
//! - Hooks are registered in the [`crate::RuntimeBuilder`] and sorted by priority
//! - Hooks with equal priority keep their registration order
//! - Each hook reads oracles and writes flags/audio through [`FrameContext`]
//! - A failing hook is handled according to its [`HookCriticality`]

mod context;
mod footstep;
mod proximity;
mod registry;

pub use context::{FrameContext, FrameReport, Trigger};
pub use footstep::FootstepHook;
pub use proximity::ProximityHook;
pub use registry::HookRegistry;

use crate::error::HookError;

/// Defines the criticality level of a hook for error handling.
///
/// - Critical hooks must succeed or the frame fails
/// - Important hooks log errors but allow continuation
/// - Optional hooks can fail silently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Hook failure aborts the frame and is returned from `tick`.
    Critical,

    /// Hook failure is logged as an error; the remaining hooks still run.
    ///
    /// This is the default level.
    Important,

    /// Hook failure is logged at debug level and otherwise ignored.
    ///
    /// Use for cosmetic effects such as sounds.
    Optional,
}

/// Work performed once per frame.
///
/// # Execution Order
///
/// Hooks are sorted by priority (lower values execute first):
/// - Negative priorities: hooks that must observe the frame first
/// - Zero: sensors and most hooks
/// - Positive priorities: cosmetic hooks
pub trait FrameHook: Send {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    /// Runs the hook for the current frame.
    fn run(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), HookError>;
}
