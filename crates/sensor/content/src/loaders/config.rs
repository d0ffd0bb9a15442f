//! Sensor configuration loader.

use std::path::Path;

use sensor_core::SensorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for sensor configuration from TOML files.
///
/// Every table and key is optional; omitted values keep their defaults.
///
/// ```toml
/// [obstacles]
/// region_id = 1
/// terrain_tag = 1
///
/// [footstep]
/// walk_interval = 20
/// dash_interval = 15
/// ground_types = [[1, "grass"], [2, "dirt"]]
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load sensor configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SensorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse sensor configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<SensorConfig> {
        let config: SensorConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sensor config TOML: {}", e))?;

        Ok(config)
    }
}
