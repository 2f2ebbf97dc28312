//! Conquest - Entry Point
//!
//! Parses arguments, sets up logging and the dice, builds the map (from a
//! scenario file or by asking the player) and hands over to the menu loop.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use conquest::battle::RandomDice;
use conquest::core::config::GameConfig;
use conquest::core::error::{ConquestError, Result};
use conquest::session::{setup_registry, Session};
use conquest::ui::Prompter;

/// Text-based territorial conquest game
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for the dice (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with a seed and/or a starting map
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every battle to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ConquestError::InputClosed) => {
            tracing::info!("Input closed, leaving the game");
            println!("\nEntrada encerrada.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Game aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "conquest=debug"
    } else {
        "conquest=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    tracing::info!(seed, "Conquest starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let registry = setup_registry(&mut prompter, &config)?;
    let mut session = Session::new(registry, RandomDice::seeded(seed));
    session.run(&mut prompter)
}
