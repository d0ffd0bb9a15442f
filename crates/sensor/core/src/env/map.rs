use crate::state::Position;

/// Read-only map inspector exposing per-cell editor metadata.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Returns the metadata for `position`, or `None` outside the map.
    fn cell(&self, position: Position) -> Option<CellInfo>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }
}

/// Editor-assigned metadata for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellInfo {
    pub region_id: u16,
    pub terrain_tag: u16,
}

impl CellInfo {
    pub const fn new(region_id: u16, terrain_tag: u16) -> Self {
        Self {
            region_id,
            terrain_tag,
        }
    }
}
