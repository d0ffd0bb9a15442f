//! Sound output seam for footstep cues.

use std::sync::{Arc, Mutex, PoisonError};

use sensor_core::FootstepCue;

/// Plays sound effects on behalf of the runtime.
pub trait AudioSink: Send {
    fn play(&mut self, cue: &FootstepCue);
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&mut self, _cue: &FootstepCue) {}
}

/// Records cues in order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudioSink {
    cues: Arc<Mutex<Vec<FootstepCue>>>,
}

impl RecordingAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything played so far.
    pub fn cues(&self) -> Vec<FootstepCue> {
        self.cues
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.cues().into_iter().map(|cue| cue.name).collect()
    }
}

impl AudioSink for RecordingAudioSink {
    fn play(&mut self, cue: &FootstepCue) {
        self.cues
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cue.clone());
    }
}
