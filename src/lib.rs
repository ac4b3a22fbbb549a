//! Substring-indexed TF-IDF relevance engine.
//!
//! This crate builds an inverted index over every length >= 3 substring
//! ("shingle") of a corpus's words, then scores query terms against that index
//! with TF-IDF. Indexing shingles instead of whole words means partial matches
//! come for free: "ever" finds documents containing "everyone".
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenize.rs  │────▶│   index.rs   │────▶│  scoring.rs  │
//! │ (tokenize,   │     │ (build_      │     │ (term_freq,  │
//! │  Shingles)   │     │  inverted_   │     │  idf, tf_idf)│
//! └──────────────┘     │  index)      │     └──────────────┘
//!        │             └──────────────┘            │
//!        ▼                    │                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        verify.rs                        │
//! │     (WellFormedIndex - invariants checked once at       │
//! │      construction, guaranteed forever after)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use scout::{build_inverted_index, inverse_document_frequency, term_frequency};
//!
//! let corpus = vec![
//!     "The cat sat on the mat.".to_string(),
//!     "Cats and dogs are great pets.".to_string(),
//! ];
//! let index = build_inverted_index(&corpus);
//!
//! let frequencies = term_frequency("cat", &index).unwrap();
//! assert_eq!(frequencies[&1], 1);
//! assert_eq!(inverse_document_frequency("cat", &index), 0.0); // in every doc
//! ```

// Module declarations
pub mod corpus;
mod index;
mod scoring;
pub mod testing;
mod tokenize;
mod types;
mod verify;

// Re-exports for public API
pub use index::{build_inverted_index, push_into_index};
pub use scoring::{inverse_document_frequency, term_frequency, tf_idf, ScoreError};
pub use tokenize::{
    is_stop_word, prune_stop_words, tokenize, Shingles, Tokens, MIN_SHINGLE_LEN,
};
pub use types::{InvertedIndex, Reference};
pub use verify::{InvariantError, WellFormedIndex};
