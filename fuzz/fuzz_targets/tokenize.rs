// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tokenizer invariants.
//!
//! Every emitted token must be length >= 3 and lower-case ASCII
//! letters/digits only, no matter what bytes come in. Tokenization is also
//! deterministic: two runs over the same input yield the same sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scout::{tokenize, MIN_SHINGLE_LEN};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let first: Vec<String> = tokenize(&text).collect();
    for token in &first {
        assert!(token.len() >= MIN_SHINGLE_LEN, "short token: {token:?}");
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "unnormalized token: {token:?}"
        );
    }

    // INVARIANT: tokenization is deterministic
    let second: Vec<String> = tokenize(&text).collect();
    assert_eq!(first, second);
});
