//! Full-screen countdown timer.
//!
//! Pick minutes and seconds, press enter, and watch it count down. Logs go
//! to `--log-file` because the terminal belongs to the UI.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use bubbletea_countdown::prelude::*;
use bubbletea_rs::Program;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "countdown")]
#[command(about = "A minutes/seconds countdown timer for the terminal")]
struct Args {
    /// Minutes preselected in the picker (0-9)
    #[arg(short, long, default_value = "0")]
    minutes: u8,

    /// Seconds preselected in the picker (0-59)
    #[arg(short, long, default_value = "5")]
    seconds: u8,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("bubbletea_countdown=debug,countdown=info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let config = TimerConfig::new(args.minutes, args.seconds);
    info!(
        minutes = config.minutes(),
        seconds = config.seconds(),
        "starting countdown screen"
    );
    set_initial_config(config);

    let program = Program::<CountdownScreen>::builder()
        .alt_screen(true)
        .build()?;
    program.run().await?;

    info!("countdown screen closed");
    Ok(())
}
