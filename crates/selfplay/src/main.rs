//! Self-play CLI
//!
//! Lets the engine play both sides of a game and optionally records it.

mod config;
mod game;

use std::env;

use anyhow::Result;
use search_worker::SearchCoordinator;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{CliArgs, SelfplayConfig};

fn print_usage() {
    println!("Silverpoint self-play");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--depth D] [--white best|worst] [--black best|worst]");
    println!("           [--max-plies N] [--record FILE]");
    println!();
    println!("Examples:");
    println!("  selfplay --depth 2 --black worst");
    println!("  selfplay --config selfplay.toml --record game.json");
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;
    if cli.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => SelfplayConfig::load(path)?,
        None => SelfplayConfig::default(),
    };
    config.apply(&cli);
    init_logging(&config.log_filter);
    info!(?config, "starting self-play");

    let mut coordinator = SearchCoordinator::spawn()?;
    let record = game::play(&config, &mut coordinator).await?;
    coordinator.shutdown()?;

    if let Some(path) = &config.record {
        record.save(path)?;
        info!(path = %path.display(), "game record written");
    }
    Ok(())
}
