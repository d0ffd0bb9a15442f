//! Replays a scripted scenario through the runtime.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use runtime::{InputState, Runtime};
use sensor_content::{CommandLoader, ConfigLoader, MapLoader, Scenario, ScenarioLoader};
use sensor_core::EventId;
use tracing::{debug, info};

use crate::config::SimConfig;

/// Totals gathered over a replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: u64,
    pub triggers: BTreeMap<EventId, usize>,
    pub footsteps: usize,
}

impl ReplaySummary {
    pub fn triggers_for(&self, event: EventId) -> usize {
        self.triggers.get(&event).copied().unwrap_or(0)
    }
}

/// Loads every content file named by `config` and builds a runtime with the
/// scenario's events placed.
pub fn load(config: &SimConfig) -> Result<(Runtime, Scenario)> {
    let sensor = ConfigLoader::load(&config.sensor_path()).context("loading sensor config")?;
    let map = MapLoader::load(&config.map_path()).context("loading map")?;
    let commands = CommandLoader::load(&config.commands_path()).context("loading commands")?;
    let scenario = ScenarioLoader::load(&config.scenario_path()).context("loading scenario")?;

    info!(
        map = %map.map_id,
        commands = commands.len(),
        events = scenario.events.len(),
        frames = scenario.frames(),
        "Content loaded"
    );

    let mut runtime = Runtime::builder()
        .sensor_config(sensor)
        .map_data(map)
        .sensors(commands)
        .build()?;
    for placement in &scenario.events {
        runtime
            .agents_mut()
            .place_event(placement.id, placement.position, placement.direction);
    }

    Ok((runtime, scenario))
}

/// Steps the player through the scenario one frame per step.
pub fn run(runtime: &mut Runtime, scenario: &Scenario, max_frames: Option<u64>) -> Result<ReplaySummary> {
    let limit = max_frames.map_or(usize::MAX, |max| usize::try_from(max).unwrap_or(usize::MAX));
    let mut summary = ReplaySummary::default();

    for step in scenario.player.iter().take(limit) {
        runtime
            .agents_mut()
            .set_player(step.position(), step.direction);
        runtime.set_input(InputState::new(step.action_held, step.moving, step.dashing));

        let report = runtime.tick()?;
        debug!(
            frame = report.frame,
            player = %step.position(),
            triggers = report.triggers.len(),
            "Frame complete"
        );

        for trigger in &report.triggers {
            *summary.triggers.entry(trigger.event).or_default() += 1;
        }
        summary.footsteps += report.footsteps.len();
        summary.frames = report.frame;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn shipped_content() -> SimConfig {
        SimConfig {
            content_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            max_frames: None,
        }
    }

    #[test]
    fn shipped_scenario_triggers_every_sensor() {
        let config = shipped_content();
        let (mut runtime, scenario) = load(&config).unwrap();

        let summary = run(&mut runtime, &scenario, None).unwrap();

        assert_eq!(summary.frames, scenario.frames() as u64);
        assert_eq!(summary.triggers_for(EventId(1)), 1);
        assert_eq!(summary.triggers_for(EventId(2)), 2);
        assert_eq!(summary.triggers_for(EventId(3)), 1);
        assert!(summary.footsteps >= 1);
    }

    #[test]
    fn max_frames_caps_the_replay() {
        let config = shipped_content();
        let (mut runtime, scenario) = load(&config).unwrap();

        let summary = run(&mut runtime, &scenario, Some(3)).unwrap();

        assert_eq!(summary.frames, 3);
        assert!(summary.triggers.is_empty());
    }

    #[test]
    fn missing_content_dir_reports_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig {
            content_dir: dir.path().to_path_buf(),
            max_frames: None,
        };

        let err = load(&config).err().unwrap();
        assert!(format!("{err:#}").contains("sensor.toml"));
    }
}
