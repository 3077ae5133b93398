//! Chess - two players at one terminal.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_cli::{Config, Session, DEFAULT_CONFIG_PATH};
use chess_engine::Game;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Chess for two players at one terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess in the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory for saved games (overrides the config file)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Saved game to resume
    #[arg(long)]
    load: Option<String>,

    /// Draw pieces as letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::load(&args.config)
        .with_context(|| format!("could not load {}", args.config.display()))?;
    if let Some(dir) = args.save_dir {
        config.save_dir = dir;
    }
    config.ascii |= args.ascii;
    tracing::debug!(?config, "configuration");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Game::new(), &config, stdin.lock(), stdout.lock());
    if let Some(name) = args.load {
        session
            .load_game(Some(name.clone()))
            .with_context(|| format!("could not load saved game '{name}'"))?;
    }

    session.run()?;
    Ok(())
}
