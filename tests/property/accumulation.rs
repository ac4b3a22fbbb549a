//! Incremental mutator invariants: the index only grows, positions stay 1.

use super::common::assert_well_formed;
use super::word_strategy;
use proptest::prelude::*;
use scout::{push_into_index, InvertedIndex};
use serde_json::json;

proptest! {
    #[test]
    fn proptest_push_only_grows(
        titles in prop::collection::vec(word_strategy(), 1..8),
    ) {
        let mut index = InvertedIndex::new();
        let mut previous = 0;

        for (i, title) in titles.iter().enumerate() {
            let record = json!({ "id": i + 1, "title": title });
            push_into_index(&mut index, &record, &["title"]);

            let current = index.reference_count();
            prop_assert!(current >= previous, "index shrank");
            previous = current;
        }
        assert_well_formed(&index);
    }

    #[test]
    fn proptest_pushed_references_pinned(
        title in word_strategy(),
        overview in word_strategy(),
        id in 1u64..10_000,
    ) {
        let mut index = InvertedIndex::new();
        let record = json!({ "id": id, "title": title, "overview": overview });
        push_into_index(&mut index, &record, &["title", "overview"]);

        for (token, refs) in index.iter() {
            for reference in refs {
                prop_assert_eq!(reference.document, id as usize, "{}", token);
                prop_assert_eq!(reference.position, 1, "{}", token);
            }
        }
    }

    #[test]
    fn proptest_push_matches_tokenize(title in word_strategy(), id in 1u64..100) {
        let mut index = InvertedIndex::new();
        push_into_index(&mut index, &json!({ "id": id, "t": title }), &["t"]);
        let emitted = scout::tokenize(&title).count();
        prop_assert_eq!(index.reference_count(), emitted);
    }
}
