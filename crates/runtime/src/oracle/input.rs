//! Per-frame player input state.
use sensor_core::InputOracle;

/// Player input for the current frame.
///
/// `moving` and `dashing` drive the footstep cadence; `action_held` feeds
/// stealth interactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub action_held: bool,
    pub moving: bool,
    pub dashing: bool,
}

impl InputState {
    pub const fn new(action_held: bool, moving: bool, dashing: bool) -> Self {
        Self {
            action_held,
            moving,
            dashing,
        }
    }
}

impl InputOracle for InputState {
    fn is_action_held(&self) -> bool {
        self.action_held
    }
}
