//! Hook that evaluates one sensor command every frame.

use std::sync::Arc;

use sensor_core::{Detection, EvaluationError, EventId, ProximityEvaluator, SensorCommand};
use tracing::{debug, info, trace};

use super::{FrameContext, FrameHook, Trigger};
use crate::error::HookError;

/// Runs `command` on behalf of `event`.
///
/// A missing observer or player is not a failure: the frame's evaluation is
/// skipped and logged at debug level.
pub struct ProximityHook {
    event: EventId,
    command: SensorCommand,
    evaluator: Arc<ProximityEvaluator>,
}

impl ProximityHook {
    pub fn new(event: EventId, command: SensorCommand, evaluator: Arc<ProximityEvaluator>) -> Self {
        Self {
            event,
            command,
            evaluator,
        }
    }

    pub fn event(&self) -> EventId {
        self.event
    }

    pub fn command(&self) -> &SensorCommand {
        &self.command
    }
}

impl FrameHook for ProximityHook {
    fn name(&self) -> &'static str {
        "proximity"
    }

    fn run(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), HookError> {
        let env = ctx.oracles.as_sensor_env();

        match self
            .evaluator
            .evaluate(self.event, &self.command, &env, &mut *ctx.flags)
        {
            Ok(Detection::Triggered(toggled)) => {
                info!(
                    target: "runtime::sensor",
                    frame = ctx.frame,
                    event = %self.event,
                    mode = %self.command.mode,
                    ?toggled,
                    "Sensor triggered"
                );
                ctx.report.triggers.push(Trigger {
                    event: self.event,
                    mode: self.command.mode,
                    toggled,
                });
                Ok(())
            }
            Ok(Detection::Missed(reason)) => {
                trace!(
                    target: "runtime::sensor",
                    frame = ctx.frame,
                    event = %self.event,
                    reason = reason.as_ref(),
                    "Sensor idle"
                );
                Ok(())
            }
            Err(EvaluationError::MissingAgent { role, source }) => {
                debug!(
                    target: "runtime::sensor",
                    frame = ctx.frame,
                    event = %self.event,
                    %role,
                    %source,
                    "Sensor skipped"
                );
                Ok(())
            }
            Err(source) => Err(HookError::Evaluation {
                event: self.event,
                source,
            }),
        }
    }
}
