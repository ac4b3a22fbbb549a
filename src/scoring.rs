// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF relevance scoring over an inverted index.
//!
//! All three operations are pure reads of a supplied index; nothing is cached
//! between calls. Absence degrades to a sentinel (`None` / `0.0`) rather than
//! an error - the only typed failure is a zero total-document count handed to
//! [`tf_idf`], which would otherwise divide a finite sum by zero.

use crate::types::InvertedIndex;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Error type for scoring contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The caller-supplied total-document count was zero.
    InvalidTotalDocuments,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::InvalidTotalDocuments => {
                write!(f, "total document count must be positive")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Per-document occurrence counts for a term.
///
/// Returns `None` when the term is absent from the index - callers must be
/// able to tell absence apart from an empty mapping. Otherwise maps each
/// document ID to the number of references for this term in that document.
pub fn term_frequency(term: &str, index: &InvertedIndex) -> Option<HashMap<usize, usize>> {
    let references = index.references(term)?;

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for reference in references {
        *counts.entry(reference.document).or_insert(0) += 1;
    }
    Some(counts)
}

/// Inverse document frequency of a term: `ln(total / document_frequency)`.
///
/// `total` is the count of distinct documents across the *entire* index, not
/// just this term's references; it is recomputed on every call. Returns `0.0`
/// for an absent term, and defensively for a zero document frequency
/// (unreachable after the absence check - an indexed term always has at least
/// one reference).
pub fn inverse_document_frequency(term: &str, index: &InvertedIndex) -> f64 {
    let Some(references) = index.references(term) else {
        return 0.0;
    };

    let total_documents = index.total_documents();
    let document_frequency = references
        .iter()
        .map(|reference| reference.document)
        .collect::<HashSet<_>>()
        .len();

    if document_frequency == 0 {
        return 0.0;
    }

    (total_documents as f64 / document_frequency as f64).ln()
}

/// Combined TF-IDF score for a term, normalized by a caller-supplied total.
///
/// Sums `count * idf` over the term-frequency mapping's documents and divides
/// by `total_documents`. An absent term accumulates nothing and scores
/// `Ok(0.0)` for any positive total. A zero total is a contract violation and
/// returns [`ScoreError::InvalidTotalDocuments`] before any computation.
pub fn tf_idf(
    term: &str,
    index: &InvertedIndex,
    total_documents: usize,
) -> Result<f64, ScoreError> {
    if total_documents == 0 {
        return Err(ScoreError::InvalidTotalDocuments);
    }

    let idf = inverse_document_frequency(term, index);
    let sum = term_frequency(term, index).map_or(0.0, |frequencies| {
        frequencies
            .values()
            .map(|&count| count as f64 * idf)
            .sum()
    });

    Ok(sum / total_documents as f64)
}
