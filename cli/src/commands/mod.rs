//! CLI commands for the mergewise tool.

pub mod merges;
pub mod train;

pub use merges::MergesCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result as AnyhowResult};
use clap::{Args, ValueEnum};
use log::info;
use mergewise_tokenizer::{
    train_vocabulary, Column, CorpusReader, TokenizerConfig, TrainedVocabulary,
};
use std::path::PathBuf;
use std::time::Instant;

/// Corpus column(s) to learn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    /// Second column
    Source,
    /// First column
    Target,
    /// Both columns as one shared corpus
    Both,
}

impl From<ColumnArg> for Column {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Source => Column::Source,
            ColumnArg::Target => Column::Target,
            ColumnArg::Both => Column::Both,
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One entry per line
    Lines,
    /// A single JSON document
    Json,
}

/// Arguments shared by every command that runs training.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the corpus (two-column CSV with a header line)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Which column(s) to learn from
    #[arg(short, long, value_enum, default_value_t = ColumnArg::Source)]
    pub column: ColumnArg,

    /// Target vocabulary size
    #[arg(short = 'n', long)]
    pub vocab_size: Option<usize>,

    /// Fold letters to lowercase (`--lowercase=false` overrides the config file)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub lowercase: Option<bool>,

    /// Count pairs in parallel (`--parallel=false` overrides the config file)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub parallel: Option<bool>,

    /// JSON file with training settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Resolve the training configuration from the config file and flags.
    pub fn config(&self) -> AnyhowResult<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TokenizerConfig::default(),
        };

        if let Some(size) = self.vocab_size {
            config.vocab_size = size;
        }
        if let Some(lowercase) = self.lowercase {
            config.lowercase = lowercase;
        }
        if let Some(parallel) = self.parallel {
            config.parallel = parallel;
        }

        Ok(config)
    }

    /// Read the corpus and learn a vocabulary from it.
    pub fn train(&self) -> AnyhowResult<TrainedVocabulary> {
        let config = self.config()?;

        let start = Instant::now();
        let translations = CorpusReader::read(&self.input)
            .with_context(|| format!("failed to load corpus {}", self.input.display()))?;
        let sentences = Column::from(self.column).select(&translations);
        info!(
            "loaded {} sentences in {:.2?} (column {:?})",
            sentences.len(),
            start.elapsed(),
            self.column
        );

        let start = Instant::now();
        let trained = train_vocabulary(&sentences, &config).context("training failed")?;
        info!(
            "learned {} ids in {:.2?} ({:?})",
            trained.len(),
            start.elapsed(),
            trained.report().stop_reason
        );

        Ok(trained)
    }
}
