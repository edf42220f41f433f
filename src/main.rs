//! HomeGreeter: main entry point.
//!
//! Loads the JSON config, wires the default host adapters into the
//! controller and runs the event loop until the process is stopped.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use homegreeter::adapters;
use homegreeter::adapters::config_file::JsonConfigFile;
use homegreeter::app::ports::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "homegreeter", version, about = "Doorbell greeter controller")]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "homegreeter.json")]
    config: PathBuf,

    /// Write the default config to --config and exit
    #[arg(long)]
    write_default_config: bool,
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    info!("HomeGreeter v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonConfigFile::new(&cli.config);
    if cli.write_default_config {
        store
            .save(&homegreeter::SystemConfig::default())
            .with_context(|| format!("Failed to write {}", cli.config.display()))?;
        info!("Default config written to {}", cli.config.display());
        return Ok(());
    }

    let config = store
        .load()
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    let mut controller = adapters::default_controller(&config)
        .context("Failed to set up door adapters")?;

    info!("System ready. Waiting for visitors.");
    controller.run().context("Event loop failed")?;
    Ok(())
}
