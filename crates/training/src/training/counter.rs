//! Pair counting over the normalized corpus.
//!
//! The counter owns every word chain of a training run, grouped by sentence.
//! The pair frequency table is rebuilt from a full scan on every call, so the
//! chains can be rewritten freely between counts.

use log::trace;
use mergewise_core::{Pair, PairCounts, SymbolId, SymbolSequence};

/// Words of one sentence, in order.
pub type Sentence = Vec<SymbolSequence>;

/// Counter for adjacent symbol pair frequencies.
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    /// Sentence -> word chains
    sentences: Vec<Sentence>,
}

impl PairCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            sentences: Vec::new(),
        }
    }

    /// Create a counter over already normalized sentences.
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Append one normalized sentence.
    pub fn add_sentence(&mut self, words: Sentence) {
        self.sentences.push(words);
    }

    /// Count all pairs in parallel.
    ///
    /// Produces exactly the counts of [`count_pairs_sequential`](Self::count_pairs_sequential).
    pub fn count_pairs_parallel(&self) -> PairCounts {
        use rayon::prelude::*;

        let counts = self
            .sentences
            .par_iter()
            .map(|sentence| {
                let mut pair_counts = PairCounts::new();
                for word in sentence {
                    for pair in word.pairs() {
                        *pair_counts.entry(pair).or_insert(0) += 1;
                    }
                }
                pair_counts
            })
            .reduce(PairCounts::new, |mut acc, pair_counts| {
                for (pair, count) in pair_counts {
                    *acc.entry(pair).or_insert(0) += count;
                }
                acc
            });

        trace!("counted {} distinct pairs (parallel)", counts.len());
        counts
    }

    /// Count all pairs sequentially.
    pub fn count_pairs_sequential(&self) -> PairCounts {
        let mut pair_counts = PairCounts::new();

        for word in self.words() {
            for pair in word.pairs() {
                *pair_counts.entry(pair).or_insert(0) += 1;
            }
        }

        trace!("counted {} distinct pairs", pair_counts.len());
        pair_counts
    }

    /// Count all pairs, in parallel or not.
    pub fn count_pairs(&self, parallel: bool) -> PairCounts {
        if parallel {
            self.count_pairs_parallel()
        } else {
            self.count_pairs_sequential()
        }
    }

    /// Merge a pair in all words (mutates words in place).
    ///
    /// Returns the number of occurrences rewritten.
    pub fn merge_pair_in_words(&mut self, pair: Pair, new_id: SymbolId) -> usize {
        self.sentences
            .iter_mut()
            .flat_map(|sentence| sentence.iter_mut())
            .map(|word| word.merge_pair(pair, new_id))
            .sum()
    }

    /// Iterate over every word of every sentence, in corpus order.
    pub fn words(&self) -> impl Iterator<Item = &SymbolSequence> + '_ {
        self.sentences.iter().flatten()
    }

    /// Iterate over every symbol occurrence, in corpus order.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.words().flat_map(|word| word.iter())
    }

    /// Get a reference to the sentences.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of words across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Number of symbols across all words.
    pub fn symbol_count(&self) -> usize {
        self.words().map(SymbolSequence::len).sum()
    }
}
