//! Hook that plays footstep sounds while the player moves.

use sensor_core::{AgentOracle, FootstepConfig, FootstepTimer, MapOracle};
use tracing::trace;

use super::{FrameContext, FrameHook, HookCriticality};
use crate::error::HookError;

pub struct FootstepHook {
    config: FootstepConfig,
    timer: FootstepTimer,
}

impl FootstepHook {
    pub fn new(config: FootstepConfig) -> Self {
        Self {
            config,
            timer: FootstepTimer::new(),
        }
    }

    pub fn timer(&self) -> &FootstepTimer {
        &self.timer
    }
}

impl FrameHook for FootstepHook {
    fn name(&self) -> &'static str {
        "footstep"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Optional
    }

    fn run(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), HookError> {
        let Some(player) = ctx.oracles.agents().player() else {
            return Ok(());
        };
        let input = ctx.oracles.input();
        // Off-map cells count as terrain tag 0.
        let terrain_tag = ctx
            .oracles
            .map()
            .cell(player.position)
            .map_or(0, |cell| cell.terrain_tag);

        if let Some(cue) = self
            .timer
            .update(&self.config, input.moving, input.dashing, terrain_tag)
        {
            trace!(
                target: "runtime::footstep",
                frame = ctx.frame,
                cue = %cue.name,
                "Footstep"
            );
            ctx.audio.play(&cue);
            ctx.report.footsteps.push(cue);
        }

        Ok(())
    }
}
