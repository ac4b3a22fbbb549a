// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the shingle expansion arithmetic.
//!
//! This standalone crate extracts the substring-expansion index math and
//! provides mathematical proofs of its correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: every (start, end) pair stays inside the word
//! 2. **Length bound**: every emitted shingle has length >= MIN_SHINGLE_LEN
//! 3. **Count**: the expansion emits exactly the closed-form number of
//!    shingles, (n)(n+1)/2 with n = len - MIN_SHINGLE_LEN + 1

/// Minimum shingle length (mirrors `scout::MIN_SHINGLE_LEN`).
pub const MIN_SHINGLE_LEN: usize = 3;

/// Closed-form shingle count for a word of the given length.
pub fn shingle_count(len: usize) -> usize {
    if len < MIN_SHINGLE_LEN {
        return 0;
    }
    let n = len - MIN_SHINGLE_LEN + 1;
    n * (n + 1) / 2
}

/// The (start, end) cursor stepping used by the lazy shingle iterator.
///
/// Returns the next cursor after emitting `[start, end)`, or `None` when the
/// word is exhausted. Extracted so the stepping logic itself is what gets
/// model checked.
pub fn step(len: usize, start: usize, end: usize) -> Option<(usize, usize)> {
    if end > len {
        let start = start + 1;
        let end = start + MIN_SHINGLE_LEN;
        if end > len {
            return None;
        }
        return Some((start, end));
    }
    Some((start, end))
}

/// Drive the cursor over a word of length `len`, returning the emitted
/// (start, end) pairs.
pub fn expand(len: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut end = MIN_SHINGLE_LEN;
    loop {
        match step(len, start, end) {
            None => return out,
            Some((s, e)) => {
                out.push((s, e));
                start = s;
                end = e + 1;
            }
        }
    }
}

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Every emitted range is in bounds and at least MIN_SHINGLE_LEN long.
    #[kani::proof]
    #[kani::unwind(40)]
    fn proof_ranges_well_formed() {
        let len: usize = kani::any();
        kani::assume(len <= 8);

        for (start, end) in expand(len) {
            assert!(end <= len);
            assert!(end - start >= MIN_SHINGLE_LEN);
        }
    }

    /// The expansion emits exactly the closed-form count.
    #[kani::proof]
    #[kani::unwind(40)]
    fn proof_count_matches_closed_form() {
        let len: usize = kani::any();
        kani::assume(len <= 8);

        assert_eq!(expand(len).len(), shingle_count(len));
    }

    /// Emission order: start indices never decrease, and within one start the
    /// end index strictly increases.
    #[kani::proof]
    #[kani::unwind(40)]
    fn proof_emission_order() {
        let len: usize = kani::any();
        kani::assume(len <= 8);

        let ranges = expand(len);
        for window in ranges.windows(2) {
            let (s0, e0) = window[0];
            let (s1, e1) = window[1];
            assert!(s1 >= s0);
            if s1 == s0 {
                assert!(e1 > e0);
            }
        }
    }
}
