/// Input signal consulted by stealth interactions.
pub trait InputOracle: Send + Sync {
    /// True while the confirm/action button is held this frame.
    fn is_action_held(&self) -> bool;
}
