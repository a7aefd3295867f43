use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filmreel_core::{AppConfig, ItemSource};

mod commands;

/// Heights used when no item file is given
const SAMPLE_HEIGHTS: [f64; 12] = [
    180.0, 120.0, 240.0, 150.0, 200.0, 90.0, 160.0, 220.0, 130.0, 260.0, 110.0, 190.0,
];

#[derive(Parser)]
#[command(name = "filmreel")]
#[command(author, version, about = "A two-column reel that drifts apart, then scrolls as one")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/filmreel/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the reel in the terminal
    Run {
        /// TOML or JSON file with `items` (height, title)
        #[arg(short = 'i', long)]
        items: Option<PathBuf>,
    },
    /// Print masonry placements for a list of heights as JSON
    Layout {
        /// Comma-separated item heights
        #[arg(long, value_delimiter = ',', required = true)]
        heights: Vec<f64>,
        /// Container width in layout units
        #[arg(short = 'w', long, default_value_t = 390.0)]
        width: f64,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration if no config file exists yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) if path.exists() => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Some(_) => AppConfig::default(),
        None => AppConfig::load()?,
    };

    // Initialize logging; stderr keeps the alternate screen clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run { items }) => commands::run::run(&config, load_items(items)?),
        None => commands::run::run(&config, load_items(None)?),
        Some(Commands::Layout { heights, width }) => {
            commands::layout::run(&config, &heights, width)
        }
        Some(Commands::Config { init }) => {
            commands::config::run(&config, cli.config.as_deref(), init)
        }
    }
}

fn load_items(path: Option<PathBuf>) -> Result<Vec<filmreel_core::ReelItem>> {
    let source = match path {
        Some(path) => ItemSource::load(&path)
            .with_context(|| format!("Failed to load items from {}", path.display()))?,
        None => ItemSource::from_heights(&SAMPLE_HEIGHTS),
    };
    Ok(source.items)
}
