//! Corpus → index → JSON file → index → scores, end to end.

use crate::common::{article_corpus, assert_well_formed, pet_corpus};
use scout::corpus::load_documents;
use scout::{
    build_inverted_index, inverse_document_frequency, term_frequency, tf_idf, InvertedIndex,
    Reference,
};
use std::fs;

#[test]
fn test_corpus_file_to_scores() {
    let dir = tempfile::tempdir().unwrap();
    let docs_path = dir.path().join("docs.json");
    fs::write(
        &docs_path,
        serde_json::to_string(&pet_corpus()).unwrap(),
    )
    .unwrap();

    let documents = load_documents(docs_path.to_str().unwrap()).unwrap();
    let index = build_inverted_index(&documents);
    assert_well_formed(&index);

    let frequencies = term_frequency("cat", &index).unwrap();
    assert_eq!(frequencies, [(1, 1), (3, 1)].into_iter().collect());

    let idf = inverse_document_frequency("cat", &index);
    assert!((idf - (3.0f64 / 2.0).ln()).abs() < 1e-5);
}

#[test]
fn test_index_survives_json_round_trip() {
    let index = build_inverted_index(&article_corpus());

    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("index.json");
    fs::write(&index_path, serde_json::to_string_pretty(&index).unwrap()).unwrap();

    let raw = fs::read_to_string(&index_path).unwrap();
    let reloaded: InvertedIndex = serde_json::from_str(&raw).unwrap();

    assert_eq!(reloaded, index);
    assert_well_formed(&reloaded);

    // Scoring the reloaded index gives identical results.
    assert_eq!(
        tf_idf("ver", &reloaded, 3).unwrap(),
        tf_idf("ver", &index, 3).unwrap()
    );
}

#[test]
fn test_article_index_pinned_entries() {
    let index = build_inverted_index(&article_corpus());

    // Spot checks against hand-derived references. Word positions:
    // doc 1: hello(1) everyone(2)
    // doc 2: article(1) based(2) inverted(3) index(4)
    // doc 3: which(1) hashmaplike(2) data(3) structure(4)
    let cases: &[(&str, &[Reference])] = &[
        ("hel", &[Reference { document: 1, position: 1 }]),
        ("one", &[Reference { document: 1, position: 2 }]),
        ("based", &[Reference { document: 2, position: 2 }]),
        ("erte", &[Reference { document: 2, position: 3 }]),
        (
            "ver",
            &[
                Reference { document: 1, position: 2 },
                Reference { document: 2, position: 3 },
            ],
        ),
        ("dat", &[Reference { document: 3, position: 3 }]),
    ];
    for (token, expected) in cases {
        assert_eq!(index.references(token).unwrap(), *expected, "{token}");
    }

    // Stop words from doc 2 ("this", "is", "on", "an") left no trace.
    assert!(index.references("thi").is_none());
}

#[test]
fn test_empty_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let docs_path = dir.path().join("docs.json");
    fs::write(&docs_path, "[]").unwrap();

    let documents = load_documents(docs_path.to_str().unwrap()).unwrap();
    let index = build_inverted_index(&documents);
    assert!(index.is_empty());
    assert_eq!(serde_json::to_string(&index).unwrap(), "{}");
}
