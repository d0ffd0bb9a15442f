//! Data-driven sensor content and its loaders.
//!
//! Loaders read RON/TOML data files into `sensor-core` types:
//! - Sensor configuration (TOML)
//! - Map cell metadata (RON)
//! - Sensor command tables attached to map events (RON)
//! - Scripted scenarios replayed by the simulator (RON)
//!
//! Content is consumed by runtime oracles and hooks; nothing here holds
//! mutable state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CommandEntry, CommandLoader, ConfigLoader, EventPlacement, LoadResult, MapData, MapLoader,
    PlayerStep, Scenario, ScenarioLoader,
};
