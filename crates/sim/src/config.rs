//! Simulator configuration read from the process environment.
use std::env;
use std::path::PathBuf;

pub const DEFAULT_CONTENT_DIR: &str = "crates/sim/data";

/// Where content lives and how much of the scenario to replay.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub content_dir: PathBuf,
    pub max_frames: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            max_frames: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SENSOR_CONTENT_DIR` - Directory holding `sensor.toml`, `map.ron`,
    ///   `commands.ron` and `scenario.ron` (default: `crates/sim/data`)
    /// - `SENSOR_MAX_FRAMES` - Stop after this many frames (default: whole scenario)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SENSOR_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }

        config.max_frames = read_env::<u64>("SENSOR_MAX_FRAMES");

        config
    }

    pub fn sensor_path(&self) -> PathBuf {
        self.content_dir.join("sensor.toml")
    }

    pub fn map_path(&self) -> PathBuf {
        self.content_dir.join("map.ron")
    }

    pub fn commands_path(&self) -> PathBuf {
        self.content_dir.join("commands.ron")
    }

    pub fn scenario_path(&self) -> PathBuf {
        self.content_dir.join("scenario.ron")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
