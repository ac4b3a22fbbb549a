//! Tokenizer behavior: normalization, stop words, shingle expansion.

use scout::{is_stop_word, prune_stop_words, tokenize, Shingles, MIN_SHINGLE_LEN};

#[test]
fn test_tokens_are_lowercase_alphanumeric() {
    for token in tokenize("Hello, WORLD! H4ck3r news?") {
        assert!(token.len() >= MIN_SHINGLE_LEN);
        assert!(
            token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "bad token: {token:?}"
        );
    }
}

#[test]
fn test_punctuation_collapses_without_space() {
    // "hash-map" strips to "hashmap" - one word, so shingles span the former
    // hyphen.
    let tokens: Vec<String> = tokenize("hash-map").collect();
    assert!(tokens.contains(&"hashmap".to_string()));
    assert!(tokens.contains(&"shma".to_string()));
}

#[test]
fn test_non_ascii_letters_are_stripped() {
    // Lower-cased "café" keeps only the ASCII part.
    let tokens: Vec<String> = tokenize("Café").collect();
    assert_eq!(tokens, vec!["caf"]);
}

#[test]
fn test_digits_survive() {
    let tokens: Vec<String> = tokenize("k8s").collect();
    assert_eq!(tokens, vec!["k8s"]);
}

#[test]
fn test_short_words_contribute_nothing() {
    assert_eq!(tokenize("go up my oh").count(), 0);
}

#[test]
fn test_empty_and_whitespace_inputs() {
    assert_eq!(tokenize("").count(), 0);
    assert_eq!(tokenize("   \t\n  ").count(), 0);
    assert_eq!(tokenize("!!! ... ,,,").count(), 0);
}

#[test]
fn test_stop_words_filtered_case_insensitively() {
    // "The" lower-cases to "the" before the stop-word check.
    assert_eq!(tokenize("The THE the").count(), 0);
}

#[test]
fn test_stop_word_substrings_never_emitted() {
    // "that" would emit "tha", "that", "hat" if it were not a stop word.
    let tokens: Vec<String> = tokenize("that hatter").collect();
    assert!(!tokens.contains(&"tha".to_string()));
    assert!(tokens.contains(&"hatter".to_string()));
    assert!(tokens.contains(&"hat".to_string())); // from "hatter", not "that"
}

#[test]
fn test_word_spanning_stop_word_is_kept() {
    // Stop-word matching is exact on the whole word; "these" is not in the
    // set even though it starts with "the".
    let tokens: Vec<String> = tokenize("these").collect();
    assert!(tokens.contains(&"these".to_string()));
    assert!(tokens.contains(&"the".to_string())); // substring of "these"
}

#[test]
fn test_shingle_count_closed_form() {
    // A word of length L emits (L-2)(L-1)/2 shingles.
    for word in ["abc", "abcd", "abcdefgh"] {
        let n = word.len() - MIN_SHINGLE_LEN + 1;
        assert_eq!(Shingles::new(word).count(), n * (n + 1) / 2, "{word}");
    }
}

#[test]
fn test_word_order_preserved() {
    let tokens: Vec<String> = tokenize("zebra apple").collect();
    let zebra_last = tokens.iter().rposition(|t| t == "zebra").unwrap();
    let apple_first = tokens.iter().position(|t| t == "apple").unwrap();
    assert!(zebra_last < apple_first);
}

#[test]
fn test_is_stop_word() {
    assert!(is_stop_word("the"));
    assert!(is_stop_word("from"));
    assert!(!is_stop_word("The")); // expects lower-cased input
    assert!(!is_stop_word("cat"));
}

#[test]
fn test_prune_stop_words_preserves_order_and_duplicates() {
    let tokens: Vec<String> = ["cat", "the", "cat", "dog", "of", "cat"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(prune_stop_words(tokens), vec!["cat", "cat", "dog", "cat"]);
}
