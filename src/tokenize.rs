// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and shingle expansion.
//!
//! A token here is not a word: it is every contiguous substring of length >= 3
//! of a word ("shingle"). Indexing shingles instead of whole words is what
//! makes partial and fuzzy-ish matching work without a dedicated automaton -
//! the query "ever" hits documents containing "everyone" because "ever" was
//! indexed as its own key.
//!
//! The expansion is quadratic in word length, so it runs lazily: `tokenize`
//! normalizes and splits eagerly (one pass over the input), then expands
//! shingles on demand as the iterator is driven.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Minimum shingle length. Substrings shorter than this are never emitted.
pub const MIN_SHINGLE_LEN: usize = 3;

/// English function words excluded from indexing.
///
/// These words are:
/// 1. Too common to be useful for relevance ranking
/// 2. A waste of index space once expanded into shingles
///
/// The whole word is checked before shingle expansion, so a stop word never
/// contributes any substrings even when some of them are >= 3 characters
/// ("the" never emits "the").
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "this", "that", "it",
        "its", "in", "on", "at", "to", "for", "with", "as", "by", "of", "from",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is a stop word. Expects already-lower-cased input.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Remove stop words from a sequence of whole-word tokens.
///
/// Order and duplicates of the surviving tokens are preserved. Matching is
/// exact on the whole token against the lower-cased stop-word set.
pub fn prune_stop_words(mut tokens: Vec<String>) -> Vec<String> {
    tokens.retain(|token| !is_stop_word(token));
    tokens
}

/// Lower-case the input and strip every character that is not an ASCII
/// letter, digit, or whitespace.
///
/// Punctuation collapses to nothing: "hello,world" becomes "helloworld" with
/// no separating space inserted.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

/// Normalized, stop-filtered words of the input, in order.
///
/// This is the word sequence the index builder assigns positions over: one
/// position per surviving word, regardless of how many shingles it expands to.
pub(crate) fn significant_words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Lazy expansion of one normalized word into every contiguous substring of
/// length >= `MIN_SHINGLE_LEN`.
///
/// Emission order is deterministic: ascending start index, then ascending end
/// index - all shingles starting at 0 in increasing length, then all starting
/// at 1, and so on. Nothing is deduplicated; "aaaa" emits "aaa" twice.
///
/// The word must already be normalized (ASCII only), so byte slicing is safe.
pub struct Shingles<'a> {
    word: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Shingles<'a> {
    pub fn new(word: &'a str) -> Self {
        Self {
            word,
            start: 0,
            end: MIN_SHINGLE_LEN,
        }
    }
}

impl<'a> Iterator for Shingles<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.end > self.word.len() {
            self.start += 1;
            self.end = self.start + MIN_SHINGLE_LEN;
            if self.end > self.word.len() {
                return None;
            }
        }
        let shingle = &self.word[self.start..self.end];
        self.end += 1;
        Some(shingle)
    }
}

/// Token stream over a whole input: normalized words expanded into shingles,
/// concatenated in word order.
///
/// Returned by [`tokenize`]. Driving the iterator twice over the same input
/// (via two `tokenize` calls) yields identical sequences - the whole pipeline
/// is deterministic and side-effect-free.
pub struct Tokens {
    words: std::vec::IntoIter<String>,
    word: String,
    start: usize,
    end: usize,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.end <= self.word.len() {
                let shingle = self.word[self.start..self.end].to_string();
                self.end += 1;
                return Some(shingle);
            }
            self.start += 1;
            self.end = self.start + MIN_SHINGLE_LEN;
            if self.end > self.word.len() {
                // Current word exhausted; words shorter than the minimum
                // shingle length are skipped entirely by this same check.
                self.word = self.words.next()?;
                self.start = 0;
                self.end = MIN_SHINGLE_LEN;
            }
        }
    }
}

/// Tokenize raw text into the full shingle stream.
///
/// Normalization (lower-case, strip non-alphanumerics), whitespace splitting,
/// and stop-word filtering happen up front; the quadratic shingle expansion is
/// deferred to iteration.
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        words: significant_words(text).into_iter(),
        word: String::new(),
        start: 0,
        end: MIN_SHINGLE_LEN,
    }
}
