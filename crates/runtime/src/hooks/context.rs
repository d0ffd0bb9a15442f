//! Frame state handed to hooks.

use sensor_core::{DetectionMode, EventId, FlagStore, FootstepCue, ToggleReport};

use crate::audio::AudioSink;
use crate::oracle::OracleManager;

/// Context provided to hooks while a frame runs.
///
/// Oracles are read-only for the whole frame. Flags and audio are the only
/// things hooks may change.
pub struct FrameContext<'a> {
    pub frame: u64,
    pub oracles: &'a OracleManager,
    pub flags: &'a mut dyn FlagStore,
    pub audio: &'a mut dyn AudioSink,
    pub report: &'a mut FrameReport,
}

/// One sensor that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub event: EventId,
    pub mode: DetectionMode,
    pub toggled: ToggleReport,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub triggers: Vec<Trigger>,
    pub footsteps: Vec<FootstepCue>,
}

impl FrameReport {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn triggered(&self, event: EventId) -> bool {
        self.triggers.iter().any(|trigger| trigger.event == event)
    }
}
