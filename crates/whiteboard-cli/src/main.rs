//! Replays planning scenarios against the whiteboard queue.
//!
//! Run with: `whiteboard-cli <scenario.json> [--format summary|json]`

mod replay;
mod scenario;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use whiteboard::WhiteboardConfig;

use replay::Replay;
use scenario::Scenario;

/// Replay a whiteboard planning scenario
#[derive(Parser)]
#[command(name = "whiteboard-cli")]
#[command(about = "Replays planned-action scenarios", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario file (JSON: world, side and planning steps)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// How to print the queue left at the end of the replay
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Diagnostic dump, one line per action
    Summary,
    /// Remaining actions as JSON
    Json,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for WHITEBOARD_* settings)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WhiteboardConfig::from_env();

    let scenario = Scenario::load(&cli.scenario)?;
    info!(
        path = %cli.scenario.display(),
        side = %scenario.side,
        steps = scenario.steps.len(),
        "replaying scenario"
    );

    let stdout = io::stdout().lock();
    let replay = Replay::run(scenario, config, stdout)?;
    let queue = replay.queue();
    info!(
        remaining = queue.len(),
        gold_spent = queue.gold_spent(),
        "scenario finished"
    );

    match cli.format {
        OutputFormat::Summary => {
            let summary = queue.to_string();
            let mut out = replay.finish();
            write!(out, "{summary}")?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(queue.actions())
                .context("Failed to serialize remaining actions")?;
            let mut out = replay.finish();
            writeln!(out, "{json}")?;
        }
    }

    Ok(())
}
