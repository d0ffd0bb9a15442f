//! Immutable configuration handed to the evaluator and footstep timer.
//!
//! Both structs are read once at startup (see `sensor-content`'s
//! `ConfigLoader`) and never change afterwards.

use crate::env::CellInfo;

/// Cell metadata values that block line of sight.
///
/// A traced cell blocks when its region id equals `region_id` OR its terrain
/// tag equals `terrain_tag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleMask {
    pub region_id: u16,
    pub terrain_tag: u16,
}

impl ObstacleMask {
    pub const DEFAULT_REGION_ID: u16 = 1;
    pub const DEFAULT_TERRAIN_TAG: u16 = 1;

    pub const fn new(region_id: u16, terrain_tag: u16) -> Self {
        Self {
            region_id,
            terrain_tag,
        }
    }

    /// True when either piece of cell metadata matches.
    pub const fn blocks(&self, cell: CellInfo) -> bool {
        cell.region_id == self.region_id || cell.terrain_tag == self.terrain_tag
    }
}

impl Default for ObstacleMask {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REGION_ID, Self::DEFAULT_TERRAIN_TAG)
    }
}

/// Top-level sensor configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    pub obstacles: ObstacleMask,
    pub footstep: FootstepConfig,
}

impl SensorConfig {
    pub fn new(obstacles: ObstacleMask) -> Self {
        Self {
            obstacles,
            footstep: FootstepConfig::default(),
        }
    }

    pub fn with_footstep(mut self, footstep: FootstepConfig) -> Self {
        self.footstep = footstep;
        self
    }
}

/// Surface under the player, derived from the cell's terrain tag.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GroundType {
    #[default]
    Default,
    Grass,
    Dirt,
    Stone,
    Sand,
}

/// Footstep cadence and sound parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FootstepConfig {
    /// Frames between steps while walking.
    pub walk_interval: u32,
    /// Frames between steps while dashing.
    pub dash_interval: u32,
    pub volume: u8,
    pub pitch: u8,
    pub pan: i8,
    /// Sound name prefix; cues are `<base>_Left` / `<base>_Right[_<ground>]`.
    pub base_name: String,
    /// Terrain tag to ground type. Tags not listed map to [`GroundType::Default`].
    pub ground_types: Vec<(u16, GroundType)>,
}

impl FootstepConfig {
    pub const DEFAULT_WALK_INTERVAL: u32 = 20;
    pub const DEFAULT_DASH_INTERVAL: u32 = 15;
    pub const DEFAULT_VOLUME: u8 = 5;
    pub const DEFAULT_PITCH: u8 = 130;

    /// Looks up the ground type for a terrain tag.
    pub fn ground_type(&self, terrain_tag: u16) -> GroundType {
        self.ground_types
            .iter()
            .find(|(tag, _)| *tag == terrain_tag)
            .map(|(_, ground)| *ground)
            .unwrap_or_default()
    }
}

impl Default for FootstepConfig {
    fn default() -> Self {
        Self {
            walk_interval: Self::DEFAULT_WALK_INTERVAL,
            dash_interval: Self::DEFAULT_DASH_INTERVAL,
            volume: Self::DEFAULT_VOLUME,
            pitch: Self::DEFAULT_PITCH,
            pan: 0,
            base_name: "Footstep".to_string(),
            ground_types: vec![
                (1, GroundType::Grass),
                (2, GroundType::Dirt),
                (3, GroundType::Stone),
                (4, GroundType::Sand),
            ],
        }
    }
}
