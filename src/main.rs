use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use slide_2048::config::Config;
use slide_2048::game::Game;
use slide_2048::highscore::{FileHighScore, HighScoreStore};
use slide_2048::session::Session;
use slide_2048::tui::Terminal;

#[derive(Parser, Debug)]
#[command(name = "slide-2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed the tile generator for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// High score file (overrides the config value)
    #[arg(long, value_name = "PATH")]
    highscore: Option<PathBuf>,
    /// Append log output to this file instead of stderr, which shares the game screen
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut config = match &args.config {
        Some(path) => Config::from_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = args.highscore {
        config.highscore_path = path;
    }
    info!("config: {config:?}");

    let store = FileHighScore::new(&config.highscore_path);
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = Game::with_policy(rng, store.load(), config.spawn);
    let mut session = Session::new(game, store, config.target_tile);

    let mut terminal = Terminal::stdout().context("entering terminal mode")?;
    let result = session.run(&mut terminal);
    terminal.leave().context("restoring terminal")?;
    result.context("game loop")?;

    let game = session.game();
    println!("Final score: {}  |  High Score: {}", game.score(), game.best_score());
    Ok(())
}
