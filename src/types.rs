//! Core data types for the inverted index.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TOKEN_WELLFORMED**: Every token key is length >= 3, lower-case ASCII
//!    letters/digits only
//! 2. **REFERENCE_WELLFORMED**: Every reference has `document >= 1` and
//!    `position >= 1`
//! 3. **INSERTION_ORDER**: Reference lists preserve append order and are never
//!    deduplicated

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One occurrence of a token: which document produced it and at which word.
///
/// `document` is a 1-based corpus index (or a record's `id` on the incremental
/// path). `position` is a 1-based word counter within the document; every
/// shingle expanded from the same source word shares the word's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub document: usize,
    pub position: usize,
}

/// Mapping from token to the ordered list of places it occurs.
///
/// Reference lists are append-only: the same (document, position) pair
/// appended twice is stored twice. The JSON shape is flat,
/// `{ "tok": [{"document": 1, "position": 1}], ... }`, so indexes written by
/// the CLI can be consumed directly by a ranking layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndex {
    #[serde(flatten)]
    pub entries: HashMap<String, Vec<Reference>>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the reference list for a token. `None` if the token was never
    /// indexed (callers must distinguish absence from an empty list).
    pub fn references(&self, token: &str) -> Option<&[Reference]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    /// Append a reference to a token's list, creating the entry if absent.
    pub fn push(&mut self, token: String, reference: Reference) {
        self.entries.entry(token).or_default().push(reference);
    }

    /// Number of distinct tokens.
    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of references across all tokens.
    pub fn reference_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Count of distinct `document` values across the entire index.
    ///
    /// This is the corpus size as far as IDF is concerned: documents that
    /// produced zero tokens are invisible here.
    pub fn total_documents(&self) -> usize {
        let mut documents = HashSet::new();
        for references in self.entries.values() {
            for reference in references {
                documents.insert(reference.document);
            }
        }
        documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (token, references) pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Reference])> {
        self.entries
            .iter()
            .map(|(token, refs)| (token.as_str(), refs.as_slice()))
    }
}
