//! Content loaders for reading sensor data from files.

pub mod commands;
pub mod config;
pub mod map;
pub mod scenario;

pub use commands::{CommandEntry, CommandLoader};
pub use config::ConfigLoader;
pub use map::{MapData, MapLoader};
pub use scenario::{EventPlacement, PlayerStep, Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
