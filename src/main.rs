//! Fox and Hound on the terminal.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fox_hound::core::config::DIMENSION_FALLBACK_WARNING;
use fox_hound::{Console, FoxHoundRules, GameConfig, GameController, TextConsole};

#[derive(Parser, Debug)]
#[command(name = "fox-hound", version, about = "Play Fox and Hound in the terminal")]
struct Args {
    /// Board dimension (4-26). Out-of-range values fall back to 8.
    #[arg(allow_negative_numbers = true)]
    dimension: Option<i64>,

    /// Directory for save files entered without a path separator
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let (config, fell_back) = GameConfig::from_requested(args.dimension);
    let config = config.with_save_dir(args.save_dir);

    let mut console = TextConsole::stdio();
    if fell_back {
        console.message(DIMENSION_FALLBACK_WARNING)?;
    }

    let rules = FoxHoundRules::with_dimension(config.dimension);
    let mut controller = GameController::new(rules, console, config);
    controller.run().context("game loop failed")?;
    Ok(())
}
