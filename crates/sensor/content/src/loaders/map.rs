//! Map cell metadata loader.
//!
//! Only region ids and terrain tags are loaded; event placement lives in
//! scenario files.

use std::collections::HashMap;
use std::path::Path;

use sensor_core::{CellInfo, MapDimensions, MapId, Position};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Deserialize)]
struct MapDataRon {
    map_id: u32,
    dimensions: (u32, u32),
    #[serde(default)]
    cells: Vec<(i32, i32, u16, u16)>, // (x, y, region, terrain)
}

/// Cell metadata for one map.
///
/// In-bounds cells that the file does not mention read as region 0 and
/// terrain tag 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub map_id: MapId,
    pub dimensions: MapDimensions,
    cells: HashMap<Position, CellInfo>,
}

impl MapData {
    pub fn new(map_id: MapId, dimensions: MapDimensions) -> Self {
        Self {
            map_id,
            dimensions,
            cells: HashMap::new(),
        }
    }

    /// Overrides one cell. Out-of-bounds positions are ignored.
    pub fn with_cell(mut self, position: Position, cell: CellInfo) -> Self {
        self.set_cell(position, cell);
        self
    }

    pub fn set_cell(&mut self, position: Position, cell: CellInfo) -> bool {
        if !self.dimensions.contains(position) {
            return false;
        }
        self.cells.insert(position, cell);
        true
    }

    /// Metadata at `position`, or `None` outside the map.
    pub fn cell(&self, position: Position) -> Option<CellInfo> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(self.cells.get(&position).copied().unwrap_or_default())
    }
}

/// Loader for map metadata from RON files.
///
/// ```ron
/// (
///     map_id: 1,
///     dimensions: (20, 20),
///     cells: [(10, 12, 1, 0)],
/// )
/// ```
pub struct MapLoader;

impl MapLoader {
    /// Load map metadata from a RON file.
    pub fn load(path: &Path) -> LoadResult<MapData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse map metadata from RON text.
    ///
    /// Cells outside the declared dimensions are rejected.
    pub fn parse(content: &str) -> LoadResult<MapData> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let mut map = MapData::new(MapId(data.map_id), dimensions);

        for (x, y, region, terrain) in data.cells {
            let position = Position::new(x, y);
            if !map.set_cell(position, CellInfo::new(region, terrain)) {
                anyhow::bail!(
                    "Map {} cell {} lies outside {}x{}",
                    data.map_id,
                    position,
                    dimensions.width,
                    dimensions.height
                );
            }
        }

        Ok(map)
    }
}
