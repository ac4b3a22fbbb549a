//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use serde_json::{json, Value};

/// Three-document pet corpus used across the scoring tests.
pub fn pet_corpus() -> Vec<String> {
    vec![
        "The cat sat on the mat.".to_string(),
        "The dog played in the park.".to_string(),
        "Cats and dogs are great pets.".to_string(),
    ]
}

/// Two-document corpus with a known shared shingle ("ver").
pub fn article_corpus() -> Vec<String> {
    vec![
        "hello, everyone, ".to_string(),
        "this article is based on an inverted index, ".to_string(),
        "which is hashmap-like data structure".to_string(),
    ]
}

/// A movies.json-shaped record for the incremental path.
pub fn make_record(id: u64, title: &str, overview: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "overview": overview,
        "rating": 7.5,
    })
}
