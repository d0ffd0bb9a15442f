//! Runtime built from content files on disk.

use std::fs;

use runtime::Runtime;
use sensor_content::{CommandLoader, ConfigLoader, MapLoader, ScenarioLoader};
use sensor_core::{EventId, MapId, SelfSwitch, SelfSwitchKey, SwitchId};

#[test]
fn scenario_replay_from_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("sensor.toml"),
        "[obstacles]\nregion_id = 2\nterrain_tag = 9\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("map.ron"),
        "(map_id: 7, dimensions: (12, 12), cells: [(5, 3, 2, 0)])",
    )
    .unwrap();
    fs::write(
        dir.path().join("commands.ron"),
        r#"[
            (event: 1, command: "Orthogonal", args: {"Distance": "4", "Switch": "3"}),
            (event: 2, command: "Basic", args: {"Operator": ">=", "Distance": "100"}),
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("scenario.ron"),
        r#"(
            events: [(1, 5, 1, Down), (2, 0, 0, Down)],
            player: [
                (x: 5, y: 5, direction: Up),
                (x: 6, y: 1, direction: Left, moving: true),
            ],
        )"#,
    )
    .unwrap();

    let config = ConfigLoader::load(&dir.path().join("sensor.toml")).unwrap();
    let map = MapLoader::load(&dir.path().join("map.ron")).unwrap();
    let commands = CommandLoader::load(&dir.path().join("commands.ron")).unwrap();
    let scenario = ScenarioLoader::load(&dir.path().join("scenario.ron")).unwrap();

    let mut runtime = Runtime::builder()
        .sensor_config(config)
        .map_data(map)
        .sensors(commands)
        .build()
        .unwrap();
    for placement in &scenario.events {
        runtime
            .agents_mut()
            .place_event(placement.id, placement.position, placement.direction);
    }

    let mut fired = Vec::new();
    for step in &scenario.player {
        runtime
            .agents_mut()
            .set_player(step.position(), step.direction);
        let report = runtime.tick().unwrap();
        fired.push(report.triggered(EventId(1)));
    }

    // Frame 1: aligned and in range, but region 2 at (5, 3) blocks the column.
    // Frame 2: same row, one cell away.
    assert_eq!(fired, vec![false, true]);
    assert!(
        runtime
            .flags()
            .local(SelfSwitchKey::new(MapId(7), EventId(1), SelfSwitch::A))
    );
    assert!(runtime.flags().global(SwitchId(3)));
    assert!(
        !runtime
            .flags()
            .local(SelfSwitchKey::new(MapId(7), EventId(2), SelfSwitch::A))
    );
}
