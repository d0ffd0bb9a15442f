//! Frame-stepped runtime orchestrator.
//!
//! The runtime owns the oracles, the flag store, the audio sink and the hook
//! registry. The host moves agents and sets input between frames, then calls
//! [`Runtime::tick`]. Everything runs on the caller's thread.

use std::sync::Arc;

use sensor_content::{CommandEntry, MapData};
use sensor_core::{EventId, FlagStore, ProximityEvaluator, SensorCommand, SensorConfig};
use tracing::info;

use crate::audio::{AudioSink, NullAudioSink};
use crate::error::{Result, RuntimeError};
use crate::hooks::{FootstepHook, FrameContext, FrameHook, FrameReport, HookRegistry, ProximityHook};
use crate::oracle::{AgentTable, InputState, MapOracleImpl, OracleManager};
use crate::repository::InMemoryFlagStore;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub sensor: SensorConfig,
    /// Register the footstep hook (default: true)
    pub footsteps: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sensor: SensorConfig::default(),
            footsteps: true,
        }
    }
}

impl RuntimeConfig {
    pub fn new(sensor: SensorConfig) -> Self {
        Self {
            sensor,
            ..Self::default()
        }
    }
}

/// Main runtime that drives sensors frame by frame.
pub struct Runtime {
    frame: u64,
    evaluator: Arc<ProximityEvaluator>,
    oracles: OracleManager,
    flags: Box<dyn FlagStore + Send>,
    audio: Box<dyn AudioSink>,
    hooks: HookRegistry,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Advances one frame, running every hook once.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::CriticalHook`] if a critical hook failed. Other
    /// hook failures are logged and the frame completes.
    pub fn tick(&mut self) -> Result<FrameReport> {
        self.frame += 1;
        let mut report = FrameReport::new(self.frame);
        let mut ctx = FrameContext {
            frame: self.frame,
            oracles: &self.oracles,
            flags: self.flags.as_mut(),
            audio: self.audio.as_mut(),
            report: &mut report,
        };

        self.hooks.run_frame(&mut ctx)?;

        Ok(report)
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Adds a sensor after construction.
    pub fn add_sensor(&mut self, event: EventId, command: SensorCommand) {
        self.hooks.register(Box::new(ProximityHook::new(
            event,
            command,
            Arc::clone(&self.evaluator),
        )));
    }

    pub fn add_hook(&mut self, hook: impl FrameHook + 'static) {
        self.hooks.register(Box::new(hook));
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Agent table to move the player and events between frames.
    pub fn agents_mut(&mut self) -> &mut AgentTable {
        self.oracles.agents_mut()
    }

    pub fn set_input(&mut self, input: InputState) {
        self.oracles.set_input(input);
    }

    pub fn flags(&self) -> &dyn FlagStore {
        self.flags.as_ref()
    }

    pub fn flags_mut(&mut self) -> &mut dyn FlagStore {
        self.flags.as_mut()
    }

    pub fn audio_mut(&mut self) -> &mut dyn AudioSink {
        self.audio.as_mut()
    }

    pub fn evaluator(&self) -> &ProximityEvaluator {
        &self.evaluator
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }
}

/// Builder for [`Runtime`]. Only the map is required.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    map: Option<Arc<MapOracleImpl>>,
    agents: Option<AgentTable>,
    flags: Option<Box<dyn FlagStore + Send>>,
    audio: Option<Box<dyn AudioSink>>,
    sensors: Vec<(EventId, SensorCommand)>,
    hooks: Vec<Box<dyn FrameHook>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            map: None,
            agents: None,
            flags: None,
            audio: None,
            sensors: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the sensor configuration
    pub fn sensor_config(mut self, sensor: SensorConfig) -> Self {
        self.config.sensor = sensor;
        self
    }

    /// Enable or disable the footstep hook
    pub fn footsteps(mut self, enable: bool) -> Self {
        self.config.footsteps = enable;
        self
    }

    /// Set required map oracle
    pub fn map(mut self, map: impl Into<Arc<MapOracleImpl>>) -> Self {
        self.map = Some(map.into());
        self
    }

    pub fn map_data(self, data: MapData) -> Self {
        self.map(MapOracleImpl::new(data))
    }

    /// Initial agent table. Defaults to an empty table on the map's id.
    pub fn agents(mut self, agents: AgentTable) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Flag store. Defaults to an [`InMemoryFlagStore`].
    pub fn flags(mut self, flags: impl FlagStore + Send + 'static) -> Self {
        self.flags = Some(Box::new(flags));
        self
    }

    /// Audio sink. Defaults to a [`NullAudioSink`].
    pub fn audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn sensor(mut self, event: EventId, command: SensorCommand) -> Self {
        self.sensors.push((event, command));
        self
    }

    pub fn sensors(mut self, entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        self.sensors
            .extend(entries.into_iter().map(|entry| (entry.event, entry.command)));
        self
    }

    /// Adds a custom hook alongside the sensor and footstep hooks.
    pub fn hook(mut self, hook: impl FrameHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Build the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::MissingMap`] if no map was supplied.
    pub fn build(self) -> Result<Runtime> {
        let map = self.map.ok_or(RuntimeError::MissingMap)?;
        let agents = self
            .agents
            .unwrap_or_else(|| AgentTable::new(map.map_id()));
        let oracles = OracleManager::with_agents(map, agents);

        let evaluator = Arc::new(ProximityEvaluator::new(self.config.sensor.clone()));

        let mut hooks: Vec<Box<dyn FrameHook>> = self
            .sensors
            .into_iter()
            .map(|(event, command)| {
                Box::new(ProximityHook::new(event, command, Arc::clone(&evaluator)))
                    as Box<dyn FrameHook>
            })
            .collect();
        let sensors = hooks.len();
        if self.config.footsteps {
            hooks.push(Box::new(FootstepHook::new(
                self.config.sensor.footstep.clone(),
            )));
        }
        hooks.extend(self.hooks);
        let hooks = HookRegistry::new(hooks);

        info!(
            target: "runtime",
            map = %oracles.map().map_id(),
            sensors,
            hooks = hooks.len(),
            "Runtime built"
        );

        Ok(Runtime {
            frame: 0,
            evaluator,
            oracles,
            flags: self
                .flags
                .unwrap_or_else(|| Box::new(InMemoryFlagStore::new())),
            audio: self.audio.unwrap_or_else(|| Box::new(NullAudioSink)),
            hooks,
        })
    }
}
