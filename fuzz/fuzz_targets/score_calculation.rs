// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, non-negative, and deterministic. The same term
//! scored twice against the same index must produce identical numbers. This
//! catches floating-point edge cases and ensures no NaN or infinity sneaks
//! through.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scout::{build_inverted_index, inverse_document_frequency, term_frequency, tf_idf};

fuzz_target!(|input: (String, Vec<String>)| {
    let (term, documents) = input;
    let index = build_inverted_index(&documents);

    let idf = inverse_document_frequency(&term, &index);
    assert!(idf.is_finite(), "IDF not finite for {term:?}");
    assert!(idf >= 0.0, "negative IDF for {term:?}");

    // Absent term: the sentinel is None, never an empty mapping.
    if index.references(&term).is_none() {
        assert!(term_frequency(&term, &index).is_none());
        assert_eq!(idf, 0.0);
    }

    let total = documents.len().max(1);
    let score1 = tf_idf(&term, &index, total).expect("positive total rejected");
    let score2 = tf_idf(&term, &index, total).expect("positive total rejected");
    assert!(score1.is_finite(), "score not finite for {term:?}");
    assert!(score1 >= 0.0, "negative score for {term:?}");
    assert_eq!(score1.to_bits(), score2.to_bits(), "scoring not deterministic");

    // Zero total is always a contract violation.
    assert!(tf_idf(&term, &index, 0).is_err());
});
