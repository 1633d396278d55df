//! Merges command implementation.

use super::{OutputFormat, RunArgs};
use clap::Parser;

/// Merges command arguments.
#[derive(Parser)]
pub struct MergesCommand {
    #[command(flatten)]
    pub run: RunArgs,
}

use anyhow::Result as AnyhowResult;
use serde_json::json;
use std::io::{self, BufWriter, Write};

pub fn run(cmd: MergesCommand) -> AnyhowResult<()> {
    let trained = cmd.run.train()?;
    let table = trained.table()?;
    let vocab = trained.vocab();

    let mut out = BufWriter::new(io::stdout().lock());
    match cmd.run.format {
        OutputFormat::Lines => {
            for (id, definition) in vocab.iter() {
                let text = table[&id].escape_debug();
                match definition {
                    Some((left, right)) => writeln!(out, "{}\t{}\t{}\t{}", id, left, right, text)?,
                    None => writeln!(out, "{}\t-\t-\t{}", id, text)?,
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = vocab
                .iter()
                .map(|(id, definition)| {
                    json!({
                        "id": id,
                        "parents": definition.map(|(left, right)| [left, right]),
                        "text": table[&id],
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &entries)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
