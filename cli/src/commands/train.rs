//! Train command implementation.

use super::{OutputFormat, RunArgs};
use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    #[command(flatten)]
    pub run: RunArgs,
}

use anyhow::Result as AnyhowResult;
use std::io::{self, BufWriter, Write};

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let trained = cmd.run.train()?;
    let tokens = trained.tokens()?;

    if tokens.len() < trained.len() {
        log::warn!(
            "{} ids decode to only {} distinct tokens",
            trained.len(),
            tokens.len()
        );
    }

    let mut out = BufWriter::new(io::stdout().lock());
    match cmd.run.format {
        OutputFormat::Lines => {
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &tokens)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
