//! Scoring invariants over random corpora and terms.

use super::{corpus_strategy, word_strategy};
use proptest::prelude::*;
use scout::{
    build_inverted_index, inverse_document_frequency, term_frequency, tf_idf, ScoreError,
};

proptest! {
    #[test]
    fn proptest_tf_none_iff_absent(corpus in corpus_strategy(), term in word_strategy()) {
        let index = build_inverted_index(&corpus);
        let present = index.references(&term).is_some();
        prop_assert_eq!(term_frequency(&term, &index).is_some(), present);
    }

    #[test]
    fn proptest_tf_counts_sum_to_references(corpus in corpus_strategy()) {
        let index = build_inverted_index(&corpus);
        let terms: Vec<String> = index.iter().map(|(t, _)| t.to_string()).collect();
        for term in terms.iter().take(24) {
            let frequencies = term_frequency(term, &index).unwrap();
            prop_assert!(frequencies.values().all(|&c| c >= 1));
            let total: usize = frequencies.values().sum();
            prop_assert_eq!(total, index.references(term).unwrap().len());
        }
    }

    #[test]
    fn proptest_idf_nonnegative_finite(corpus in corpus_strategy(), term in word_strategy()) {
        let index = build_inverted_index(&corpus);
        let idf = inverse_document_frequency(&term, &index);
        prop_assert!(idf.is_finite());
        prop_assert!(idf >= 0.0);
    }

    #[test]
    fn proptest_idf_zero_for_ubiquitous_terms(word in word_strategy()) {
        prop_assume!(word.len() >= 3);
        // The same text in every document: any indexed term has
        // document_frequency == total_documents, so ln(1) == 0.
        let corpus = vec![word.clone(); 4];
        let index = build_inverted_index(&corpus);
        for (term, _) in index.iter() {
            prop_assert!(inverse_document_frequency(term, &index).abs() < 1e-12);
        }
    }

    #[test]
    fn proptest_tf_idf_finite_and_nonnegative(
        corpus in corpus_strategy(),
        term in word_strategy(),
        total in 1usize..50,
    ) {
        let index = build_inverted_index(&corpus);
        let score = tf_idf(&term, &index, total).unwrap();
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn proptest_tf_idf_zero_total_always_rejected(
        corpus in corpus_strategy(),
        term in word_strategy(),
    ) {
        let index = build_inverted_index(&corpus);
        prop_assert_eq!(
            tf_idf(&term, &index, 0),
            Err(ScoreError::InvalidTotalDocuments)
        );
    }

    #[test]
    fn proptest_absent_term_scores_zero(corpus in corpus_strategy(), total in 1usize..50) {
        let index = build_inverted_index(&corpus);
        // Uppercase never appears in a normalized index.
        prop_assert_eq!(tf_idf("ZZZ", &index, total).unwrap(), 0.0);
    }
}
