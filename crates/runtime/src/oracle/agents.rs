//! Live agent positions for the active map.
use std::collections::BTreeMap;

use sensor_core::{Agent, AgentOracle, Direction, EventId, MapId, Position};

/// Mutable table of event and player snapshots.
///
/// The host moves agents between frames; hooks only read it.
#[derive(Debug, Clone, Default)]
pub struct AgentTable {
    map_id: MapId,
    events: BTreeMap<EventId, Agent>,
    player: Option<Agent>,
}

impl AgentTable {
    pub fn new(map_id: MapId) -> Self {
        Self {
            map_id,
            ..Self::default()
        }
    }

    /// Places or moves an event. Its role is forced to observer.
    pub fn place_event(&mut self, id: EventId, position: Position, direction: Direction) {
        self.events.insert(id, Agent::observer(position, direction));
    }

    pub fn remove_event(&mut self, id: EventId) -> Option<Agent> {
        self.events.remove(&id)
    }

    pub fn set_player(&mut self, position: Position, direction: Direction) {
        self.player = Some(Agent::target(position, direction));
    }

    /// Removes the player, as during a scene transition.
    pub fn clear_player(&mut self) {
        self.player = None;
    }

    /// Moves the map to another id and drops every event snapshot.
    pub fn transfer(&mut self, map_id: MapId) {
        self.map_id = map_id;
        self.events.clear();
    }
}

impl AgentOracle for AgentTable {
    fn map_id(&self) -> MapId {
        self.map_id
    }

    fn event(&self, id: EventId) -> Option<Agent> {
        self.events.get(&id).copied()
    }

    fn player(&self) -> Option<Agent> {
        self.player
    }
}
