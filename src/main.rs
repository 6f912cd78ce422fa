use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use torus_snake::game::{GameConfig, TickRate};
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a board without walls")]
struct Cli {
    /// Starting speed in ticks per second (5 to 60)
    #[arg(long, default_value_t = TickRate::DEFAULT)]
    speed: u32,

    /// Write logs to this file; logging is off without it
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    torus_snake::logging::init(cli.log_file.as_deref())?;

    let config = GameConfig::with_tick_rate(cli.speed);

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
