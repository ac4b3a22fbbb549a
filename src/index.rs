//! Inverted index construction.
//!
//! Two paths build an index and they deliberately disagree on positions:
//!
//! - [`build_inverted_index`] consumes a whole corpus and assigns each
//!   reference the 1-based position of its source *word* within the document
//!   (all shingles of one word share that word's position).
//! - [`push_into_index`] appends a single record's fields and pins every
//!   reference's position to the constant `1`.
//!
//! Downstream equality tests depend on the builder's per-word numbering, so
//! the two behaviors are kept distinct rather than unified.

use crate::tokenize::{significant_words, tokenize, Shingles};
use crate::types::{InvertedIndex, Reference};
use serde_json::Value;

/// Build a fresh inverted index over an ordered corpus.
///
/// Documents receive 1-based IDs in input order. Within a document, the
/// position counter increments once per surviving word (stop words and words
/// stripped to nothing never reach the counter), and every shingle expanded
/// from that word records the same position. A document that produces zero
/// tokens leaves no trace in the index.
pub fn build_inverted_index(documents: &[String]) -> InvertedIndex {
    let mut index = InvertedIndex::new();

    for (doc_idx, text) in documents.iter().enumerate() {
        let document = doc_idx + 1;
        for (word_idx, word) in significant_words(text).iter().enumerate() {
            let position = word_idx + 1;
            for shingle in Shingles::new(word) {
                index.push(shingle.to_string(), Reference { document, position });
            }
        }
    }

    index
}

/// Append one record's string fields into a caller-owned index.
///
/// For each named field whose value is a JSON string, the field text is
/// tokenized and every token appended with the record's `"id"` as `document`
/// and the constant position `1`. Non-string fields are skipped. Records
/// whose `"id"` is missing or not a non-negative integer contribute nothing -
/// degrade silently, no error.
pub fn push_into_index(index: &mut InvertedIndex, record: &Value, fields: &[&str]) {
    let Some(document) = record.get("id").and_then(Value::as_u64) else {
        return;
    };
    let document = document as usize;

    for field in fields {
        if let Some(text) = record.get(field).and_then(Value::as_str) {
            for token in tokenize(text) {
                index.push(token, Reference { document, position: 1 });
            }
        }
    }
}
