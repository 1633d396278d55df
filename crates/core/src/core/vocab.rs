//! Vocabulary storage: the id-ordered definition table.
//!
//! Every symbol id maps to an optional definition. Base symbols have none;
//! composite symbols are defined by the pair of ids they were merged from.
//! Ids are kept in a `BTreeMap` so iteration is ascending by id, which is
//! the order the decoded token set is built in.

use crate::core::merges::{Pair, SymbolId};
use crate::error::{Result, VocabError};
use std::collections::BTreeMap;

/// Definition of a symbol: `None` for a base symbol, the parent pair otherwise.
pub type Definition = Option<Pair>;

/// Id-ordered mapping from symbol id to its definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Symbol id -> definition
    definitions: BTreeMap<SymbolId, Definition>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
        }
    }

    /// Add a base symbol for a character.
    ///
    /// Returns `true` if the symbol was not present before.
    pub fn insert_base(&mut self, ch: char) -> bool {
        self.insert_base_id(ch as SymbolId)
    }

    /// Add a base symbol by raw id.
    ///
    /// Returns `true` if the id was not present before. An id that already
    /// holds a composite definition is left untouched.
    pub fn insert_base_id(&mut self, id: SymbolId) -> bool {
        if self.definitions.contains_key(&id) {
            return false;
        }
        self.definitions.insert(id, None);
        true
    }

    /// Mint a composite symbol for `pair` with id `max_id + 1`.
    ///
    /// Both parents must already be present.
    pub fn mint(&mut self, pair: Pair) -> Result<SymbolId> {
        for id in [pair.0, pair.1] {
            if !self.definitions.contains_key(&id) {
                return Err(VocabError::InvalidReference { id });
            }
        }

        // Parents exist, so the table is non-empty here.
        let max = self.max_id().unwrap_or(0);
        let new_id = max
            .checked_add(1)
            .ok_or(VocabError::VocabularyOverflow { max })?;

        self.definitions.insert(new_id, Some(pair));
        Ok(new_id)
    }

    /// Get the definition for an id.
    ///
    /// Returns `None` if the id is not in the vocabulary, `Some(None)` for a
    /// base symbol and `Some(Some(pair))` for a composite.
    #[inline]
    pub fn definition(&self, id: SymbolId) -> Option<Definition> {
        self.definitions.get(&id).copied()
    }

    /// Check whether an id is present.
    #[inline]
    pub fn contains(&self, id: SymbolId) -> bool {
        self.definitions.contains_key(&id)
    }

    /// Highest id assigned so far.
    #[inline]
    pub fn max_id(&self) -> Option<SymbolId> {
        self.definitions.keys().next_back().copied()
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over `(id, definition)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, Definition)> + '_ {
        self.definitions.iter().map(|(&id, &def)| (id, def))
    }

    /// Iterate over all ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.definitions.keys().copied()
    }

    /// Iterate over composite symbols as `(id, pair)` in ascending id order.
    pub fn composites(&self) -> impl Iterator<Item = (SymbolId, Pair)> + '_ {
        self.definitions
            .iter()
            .filter_map(|(&id, def)| def.map(|pair| (id, pair)))
    }

    /// Number of base symbols.
    pub fn base_count(&self) -> usize {
        self.definitions.values().filter(|d| d.is_none()).count()
    }

    /// Check that every composite references present ids strictly below its own.
    pub fn validate(&self) -> Result<()> {
        for (id, (left, right)) in self.composites() {
            for parent in [left, right] {
                if parent >= id || !self.contains(parent) {
                    return Err(VocabError::InvalidReference { id: parent });
                }
            }
        }
        Ok(())
    }
}
