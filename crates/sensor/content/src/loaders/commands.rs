//! Sensor command table loader.
//!
//! Each entry attaches one editor command to a map event. Arguments stay
//! string-keyed and string-valued, exactly as the editor stores them, and are
//! interpreted by [`SensorCommand::from_args`].

use std::collections::BTreeMap;
use std::path::Path;

use sensor_core::{EventId, SensorCommand};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Deserialize)]
struct CommandEntryRon {
    event: u32,
    command: String,
    #[serde(default)]
    args: BTreeMap<String, String>,
}

/// A parsed command bound to the event that runs it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    pub event: EventId,
    pub command: SensorCommand,
}

/// Loader for sensor command tables from RON files.
///
/// ```ron
/// [
///     (event: 1, command: "Basic", args: {"Operator": "less than", "Distance": "4"}),
///     (event: 2, command: "EnableStealthKill"),
/// ]
/// ```
pub struct CommandLoader;

impl CommandLoader {
    /// Load a command table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CommandEntry>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a command table from RON text.
    ///
    /// Only malformed RON fails the table. An entry with an unknown command
    /// name or bad flag ids is dropped; an entry whose operator or distance
    /// cannot be parsed is kept but never triggers. Both are logged at `warn`.
    pub fn parse(content: &str) -> LoadResult<Vec<CommandEntry>> {
        let entries: Vec<CommandEntryRon> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse command RON: {}", e))?;

        let commands = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let args = entry.args.iter().map(|(k, v)| (k.as_str(), v.as_str()));
                let command = match SensorCommand::from_args(&entry.command, args) {
                    Ok(command) => command,
                    Err(reason) => {
                        tracing::warn!(
                            target: "content::commands",
                            index,
                            event = entry.event,
                            command = %entry.command,
                            %reason,
                            "sensor command entry skipped"
                        );
                        return None;
                    }
                };

                if let Err(reason) = &command.range {
                    tracing::warn!(
                        target: "content::commands",
                        index,
                        event = entry.event,
                        command = %entry.command,
                        %reason,
                        "sensor command will never trigger"
                    );
                }

                Some(CommandEntry {
                    event: EventId(entry.event),
                    command,
                })
            })
            .collect();

        Ok(commands)
    }
}
