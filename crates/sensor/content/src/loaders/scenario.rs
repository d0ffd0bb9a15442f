//! Scripted scenario loader.
//!
//! A scenario places observer events on a map and scripts the player one
//! frame at a time. The simulator replays it against a runtime.

use std::path::Path;

use sensor_core::{Agent, Direction, EventId, Position};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Where an observer event starts and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPlacement {
    pub id: EventId,
    pub position: Position,
    pub direction: Direction,
}

impl EventPlacement {
    pub fn agent(&self) -> Agent {
        Agent::observer(self.position, self.direction)
    }
}

/// Player state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlayerStep {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub moving: bool,
    #[serde(default)]
    pub dashing: bool,
    #[serde(default)]
    pub action_held: bool,
}

impl PlayerStep {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn agent(&self) -> Agent {
        Agent::target(self.position(), self.direction)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ScenarioRon {
    #[serde(default)]
    events: Vec<(u32, i32, i32, Direction)>,
    #[serde(default)]
    player: Vec<PlayerStep>,
}

/// A loaded scenario.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scenario {
    pub events: Vec<EventPlacement>,
    pub player: Vec<PlayerStep>,
}

impl Scenario {
    /// Number of scripted frames.
    pub fn frames(&self) -> usize {
        self.player.len()
    }
}

/// Loader for scenarios from RON files.
///
/// ```ron
/// (
///     events: [(1, 10, 10, Down)],
///     player: [
///         (x: 10, y: 15, direction: Up),
///         (x: 10, y: 12, direction: Up, moving: true),
///     ],
/// )
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let events = data
            .events
            .into_iter()
            .map(|(id, x, y, direction)| EventPlacement {
                id: EventId(id),
                position: Position::new(x, y),
                direction,
            })
            .collect();

        Ok(Scenario {
            events,
            player: data.player,
        })
    }
}
