use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameEngine, GameSession, SpeedPreset};
use grid_snake::modes::HumanMode;
use grid_snake::score::{JsonFileStore, ScoreTracker};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a grid, in your terminal")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(2..=100))]
    width: u16,

    /// Grid height
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(2..=100))]
    height: u16,

    /// Tick speed at startup
    #[arg(long, value_enum, default_value_t = SpeedPreset::Medium)]
    speed: SpeedPreset,

    /// File the high score is kept in
    #[arg(long, default_value = "snake_scores.json")]
    store: PathBuf,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    // Create game configuration from CLI arguments
    let config = GameConfig::new(cli.width.into(), cli.height.into()).with_speed(cli.speed);
    info!(
        width = config.grid_width,
        height = config.grid_height,
        speed = config.speed.as_str(),
        store = ?cli.store,
        "starting"
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::seeded(&config, seed),
        None => GameEngine::new(&config),
    };
    let scores = ScoreTracker::load(Box::new(JsonFileStore::open(&cli.store)));
    let session = GameSession::new(&config, engine, scores);

    let mut human_mode = HumanMode::new(session);
    human_mode.run().await?;

    Ok(())
}

/// The terminal belongs to the game, so logs go to a file
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
