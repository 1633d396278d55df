//! Vocabulary builder: the BPE merge loop.
//!
//! The builder seeds the vocabulary with every character seen in the corpus,
//! then repeatedly merges the most frequent adjacent pair until the target
//! size is reached or no pair is left. Pair frequencies are recounted from
//! scratch on every step.

use super::counter::PairCounter;
use log::{debug, info};
use mergewise_core::{select_best, MergeRecord, Result, Vocabulary};
use serde::{Deserialize, Serialize};

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Whether to count pairs with rayon
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 1_000,
            parallel: false,
        }
    }
}

/// Phase of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Collecting base symbols from the corpus
    Seeding,
    /// Merging pairs
    Merging,
    /// Finished
    Done,
}

/// Why the merge loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The vocabulary reached the requested size
    TargetReached,
    /// Every word collapsed to a single symbol before the target was reached
    PairsExhausted,
}

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport {
    /// Number of distinct base symbols seeded
    pub base_symbols: usize,
    /// Accepted merges, in order
    pub merges: Vec<MergeRecord>,
    /// Why the loop stopped
    pub stop_reason: StopReason,
    /// Final number of ids in the vocabulary
    pub vocab_size: usize,
}

/// BPE vocabulary builder.
///
/// Owns the symbol id space of one training run. Base symbols take the code
/// point of their character; each merge mints `max_id + 1`.
pub struct VocabularyBuilder {
    /// Configuration
    config: TrainingConfig,
    /// Vocabulary being built
    vocab: Vocabulary,
    /// Current phase
    state: BuildState,
    /// Merges accepted so far
    merges: Vec<MergeRecord>,
    /// Set once the loop stops
    stop_reason: Option<StopReason>,
}

impl VocabularyBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            vocab: Vocabulary::new(),
            state: BuildState::Seeding,
            merges: Vec::new(),
            stop_reason: None,
        }
    }

    /// Create a new builder with default configuration.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig {
            vocab_size,
            ..Default::default()
        })
    }

    /// Current phase.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// The vocabulary built so far.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Merges accepted so far.
    pub fn merges(&self) -> &[MergeRecord] {
        &self.merges
    }

    /// Run the whole loop over `counter`, rewriting its words in place.
    ///
    /// # Returns
    /// The trained vocabulary and a summary of the run
    pub fn train(&mut self, counter: &mut PairCounter) -> Result<(Vocabulary, TrainingReport)> {
        let base_symbols = self.seed(counter);

        info!(
            "training: {} sentences, {} words, {} base symbols, target {}",
            counter.sentence_count(),
            counter.word_count(),
            base_symbols,
            self.config.vocab_size
        );

        while self.step(counter)?.is_some() {}

        let report = TrainingReport {
            base_symbols,
            merges: self.merges.clone(),
            stop_reason: self.stop_reason.unwrap_or(StopReason::TargetReached),
            vocab_size: self.vocab.len(),
        };

        info!(
            "training done: {} merges, vocab size {}, stopped: {:?}",
            report.merges.len(),
            report.vocab_size,
            report.stop_reason
        );

        Ok((self.vocab.clone(), report))
    }

    /// Reset the builder and insert every distinct symbol of the corpus.
    ///
    /// Returns the number of base symbols.
    pub fn seed(&mut self, counter: &PairCounter) -> usize {
        self.vocab = Vocabulary::new();
        self.merges.clear();
        self.stop_reason = None;
        self.state = BuildState::Seeding;

        for id in counter.symbols() {
            self.vocab.insert_base_id(id);
        }

        self.state = BuildState::Merging;
        self.vocab.len()
    }

    /// Perform one merge step.
    ///
    /// Returns the accepted merge, or `None` once the run is done.
    pub fn step(&mut self, counter: &mut PairCounter) -> Result<Option<MergeRecord>> {
        match self.state {
            BuildState::Done => return Ok(None),
            BuildState::Seeding => {
                self.seed(counter);
            }
            BuildState::Merging => {}
        }

        if self.vocab.len() >= self.config.vocab_size {
            return Ok(self.finish(StopReason::TargetReached));
        }

        let pair_counts = counter.count_pairs(self.config.parallel);
        let Some(best) = select_best(&pair_counts) else {
            return Ok(self.finish(StopReason::PairsExhausted));
        };

        let new_id = self.vocab.mint(best.pair)?;
        let rewrites = counter.merge_pair_in_words(best.pair, new_id);

        let record = MergeRecord {
            rank: self.merges.len(),
            pair: best.pair,
            new_id,
            count: best.count,
            rewrites,
        };

        debug!(
            "merge {:>6}: ({}, {}) -> {} count {} distinct_pairs {} vocab {}",
            record.rank,
            record.pair.0,
            record.pair.1,
            record.new_id,
            record.count,
            pair_counts.len(),
            self.vocab.len()
        );

        self.merges.push(record);
        Ok(Some(record))
    }

    fn finish(&mut self, reason: StopReason) -> Option<MergeRecord> {
        self.state = BuildState::Done;
        self.stop_reason = Some(reason);
        None
    }
}
