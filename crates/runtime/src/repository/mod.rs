//! Storage adapters for runtime state.
//!
//! Sensor flags live only as long as the process. The host engine owns
//! persistence.
mod flags;

pub use flags::InMemoryFlagStore;
