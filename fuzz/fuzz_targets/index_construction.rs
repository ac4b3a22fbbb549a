// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index construction invariants.
//!
//! Whatever corpus comes in, the built index must be well-formed and every
//! reference must point at a real 1-based corpus position.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scout::{build_inverted_index, WellFormedIndex};

fuzz_target!(|documents: Vec<String>| {
    let index = build_inverted_index(&documents);

    for (token, refs) in index.iter() {
        for reference in refs {
            assert!(
                reference.document >= 1 && reference.document <= documents.len(),
                "token {token:?} points outside the corpus"
            );
            assert!(reference.position >= 1, "token {token:?} has position 0");
        }
    }

    WellFormedIndex::from_index(index).expect("built index violates invariants");
});
