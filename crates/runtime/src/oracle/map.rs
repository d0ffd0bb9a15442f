//! Static map metadata served through [`sensor_core::MapOracle`].
use sensor_content::MapData;
use sensor_core::{CellInfo, MapDimensions, MapId, MapOracle, Position};

/// MapOracle implementation over loaded map data.
///
/// Holds immutable cell metadata; nothing in a frame changes it.
pub struct MapOracleImpl {
    data: MapData,
}

impl MapOracleImpl {
    pub fn new(data: MapData) -> Self {
        Self { data }
    }

    /// Creates an open map (region 0, terrain 0 everywhere).
    pub fn open(map_id: MapId, width: u32, height: u32) -> Self {
        Self::new(MapData::new(map_id, MapDimensions::new(width, height)))
    }

    pub fn map_id(&self) -> MapId {
        self.data.map_id
    }

    pub fn data(&self) -> &MapData {
        &self.data
    }
}

impl MapOracle for MapOracleImpl {
    fn dimensions(&self) -> MapDimensions {
        self.data.dimensions
    }

    fn cell(&self, position: Position) -> Option<CellInfo> {
        self.data.cell(position)
    }
}

impl From<MapData> for MapOracleImpl {
    fn from(data: MapData) -> Self {
        Self::new(data)
    }
}
