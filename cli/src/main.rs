//! Mergewise CLI - Command-line interface for BPE vocabulary learning.
//!
//! This is the main entry point for the `mergewise` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{MergesCommand, TrainCommand};
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "mergewise")]
#[command(about = "Learn subword vocabularies from translation corpora", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a vocabulary and print its tokens
    Train(TrainCommand),
    /// Learn a vocabulary and print every minted id with its definition
    Merges(MergesCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Merges(cmd) => commands::merges::run(cmd)?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if let Some(level) = verbosity_filter(verbose, quiet) {
        builder.filter_level(level);
    }
    builder.init();
}

/// Level forced by `-v`/`-q`; `None` leaves `RUST_LOG` in charge.
fn verbosity_filter(verbose: u8, quiet: u8) -> Option<LevelFilter> {
    let level = match (quiet, verbose) {
        (0, 0) => return None,
        (0, 1) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Warn,
        _ => LevelFilter::Error,
    };
    Some(level)
}
