//! Frame-stepped orchestration for proximity sensors.
//!
//! This crate wires `sensor-core` rules to concrete data: oracles backed by
//! loaded content, an in-memory flag store, an audio sink and a registry of
//! per-frame hooks. Hosts embed [`Runtime`], move agents between frames and
//! call [`Runtime::tick`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`hooks`] provides the per-frame hook system (sensors, footsteps)
//! - [`oracle`] and [`repository`] provide data adapters
//! - [`audio`] is the sound output seam
pub mod audio;
pub mod error;
pub mod hooks;
pub mod oracle;
pub mod repository;
pub mod runtime;

pub use audio::{AudioSink, NullAudioSink, RecordingAudioSink};
pub use error::{HookError, Result, RuntimeError};
pub use hooks::{
    FootstepHook, FrameContext, FrameHook, FrameReport, HookCriticality, HookRegistry,
    ProximityHook, Trigger,
};
pub use oracle::{AgentTable, InputState, MapOracleImpl, OracleManager};
pub use repository::InMemoryFlagStore;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
