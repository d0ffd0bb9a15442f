use crate::state::{Agent, EventId, MapId};

/// Position/direction provider for the player and map events.
///
/// Implementations return fresh snapshots on every call; the sensor never
/// writes positions back.
pub trait AgentOracle: Send + Sync {
    /// Map the events currently belong to.
    fn map_id(&self) -> MapId;

    /// Snapshot of an event as an observer, or `None` when it is not on the map.
    fn event(&self, id: EventId) -> Option<Agent>;

    /// Snapshot of the player as a target, or `None` outside an active map.
    fn player(&self) -> Option<Agent>;
}
