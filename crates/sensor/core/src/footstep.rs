//! Footstep cadence while the player walks.
//!
//! One [`FootstepTimer`] per player. Each frame the host calls
//! [`FootstepTimer::update`] with the movement state and the terrain tag under
//! the player; the timer answers with the cue to play, if any.

use crate::config::{FootstepConfig, GroundType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum Foot {
    #[default]
    Left,
    Right,
}

impl Foot {
    pub const fn other(self) -> Self {
        match self {
            Foot::Left => Foot::Right,
            Foot::Right => Foot::Left,
        }
    }
}

/// Sound effect request emitted on a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootstepCue {
    pub name: String,
    pub volume: u8,
    pub pitch: u8,
    pub pan: i8,
    pub foot: Foot,
    pub ground: GroundType,
}

#[derive(Clone, Debug, Default)]
pub struct FootstepTimer {
    remaining: u32,
    next_foot: Foot,
    terrain_tag: Option<u16>,
    ground: GroundType,
}

impl FootstepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn next_foot(&self) -> Foot {
        self.next_foot
    }

    pub fn ground(&self) -> GroundType {
        self.ground
    }

    /// Advances one frame.
    ///
    /// The cue uses the ground type cached from earlier frames; the terrain
    /// under the player is folded in only after the emission check.
    pub fn update(
        &mut self,
        config: &FootstepConfig,
        moving: bool,
        dashing: bool,
        terrain_tag: u16,
    ) -> Option<FootstepCue> {
        self.remaining = self.remaining.saturating_sub(1);

        let cue = (self.remaining == 0 && moving).then(|| {
            self.remaining = if dashing {
                config.dash_interval
            } else {
                config.walk_interval
            };
            let cue = self.cue(config);
            self.next_foot = self.next_foot.other();
            cue
        });

        if self.terrain_tag != Some(terrain_tag) {
            self.terrain_tag = Some(terrain_tag);
            self.ground = config.ground_type(terrain_tag);
        }

        cue
    }

    fn cue(&self, config: &FootstepConfig) -> FootstepCue {
        let mut name = format!("{}_{}", config.base_name, self.next_foot);
        if self.ground != GroundType::Default {
            name.push('_');
            name.push_str(self.ground.as_ref());
        }

        FootstepCue {
            name,
            volume: config.volume,
            pitch: config.pitch,
            pan: config.pan,
            foot: self.next_foot,
            ground: self.ground,
        }
    }
}
