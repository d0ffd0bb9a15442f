//! Sensor scenario simulator.
//!
//! Loads a content directory, replays its scripted scenario frame by frame
//! and logs every sensor that fires.
//!
//! ```bash
//! RUST_LOG=runtime::sensor=info cargo run -p sensor-sim
//! SENSOR_CONTENT_DIR=path/to/content SENSOR_MAX_FRAMES=10 cargo run -p sensor-sim
//! ```
mod config;
mod replay;

use anyhow::Result;
use config::SimConfig;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    info!(content_dir = %config.content_dir.display(), "Starting replay");

    let (mut runtime, scenario) = replay::load(&config)?;
    let summary = replay::run(&mut runtime, &scenario, config.max_frames)?;

    for (event, count) in &summary.triggers {
        info!(%event, count, "Sensor trigger total");
    }
    info!(
        frames = summary.frames,
        footsteps = summary.footsteps,
        "Replay finished"
    );

    Ok(())
}
