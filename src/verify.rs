// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! Instead of hoping every code path remembered the index invariants, wrap the
//! index in [`WellFormedIndex`]. Construction checks everything once; after
//! that the wrapper guarantees:
//!
//! - every token key is length >= 3 and lower-case ASCII letters/digits only
//! - every reference list is non-empty
//! - every reference has `document >= 1` and `position >= 1`
//!
//! The `inspect` command and the test suites validate through this wrapper, so
//! a loaded index that violates the invariants fails loudly instead of
//! producing quietly wrong scores.

use crate::tokenize::MIN_SHINGLE_LEN;
use crate::types::{InvertedIndex, Reference};
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Token key is shorter than the minimum shingle length.
    ShortToken { token: String },
    /// Token key contains a character outside lower-case ASCII letters/digits.
    UnnormalizedToken { token: String },
    /// Reference list is empty (every indexed token has at least one).
    EmptyReferenceList { token: String },
    /// Reference has `document == 0` (IDs are 1-based).
    InvalidDocument { token: String, position: usize },
    /// Reference has `position == 0` (positions are 1-based).
    InvalidPosition { token: String, document: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ShortToken { token } => {
                write!(
                    f,
                    "token {:?} is shorter than {} characters",
                    token, MIN_SHINGLE_LEN
                )
            }
            InvariantError::UnnormalizedToken { token } => {
                write!(f, "token {:?} is not lower-case alphanumeric", token)
            }
            InvariantError::EmptyReferenceList { token } => {
                write!(f, "token {:?} has an empty reference list", token)
            }
            InvariantError::InvalidDocument { token, position } => {
                write!(
                    f,
                    "token {:?} has reference with document 0 at position {}",
                    token, position
                )
            }
            InvariantError::InvalidPosition { token, document } => {
                write!(
                    f,
                    "token {:?} has reference with position 0 in document {}",
                    token, document
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Validate one (token, references) entry.
fn check_entry(token: &str, references: &[Reference]) -> Result<(), InvariantError> {
    if token.len() < MIN_SHINGLE_LEN {
        return Err(InvariantError::ShortToken {
            token: token.to_string(),
        });
    }
    if !token
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(InvariantError::UnnormalizedToken {
            token: token.to_string(),
        });
    }
    if references.is_empty() {
        return Err(InvariantError::EmptyReferenceList {
            token: token.to_string(),
        });
    }
    for reference in references {
        if reference.document == 0 {
            return Err(InvariantError::InvalidDocument {
                token: token.to_string(),
                position: reference.position,
            });
        }
        if reference.position == 0 {
            return Err(InvariantError::InvalidPosition {
                token: token.to_string(),
                document: reference.document,
            });
        }
    }
    Ok(())
}

/// An inverted index whose invariants were checked at construction.
#[derive(Debug, Clone)]
pub struct WellFormedIndex {
    inner: InvertedIndex,
}

impl WellFormedIndex {
    /// Validate an index, consuming it.
    ///
    /// Returns `Err` with the first violation found; the traversal order over
    /// tokens is unspecified, so which violation surfaces first is too.
    pub fn from_index(index: InvertedIndex) -> Result<Self, InvariantError> {
        for (token, references) in index.iter() {
            check_entry(token, references)?;
        }
        Ok(Self { inner: index })
    }

    /// Access the validated index.
    pub fn inner(&self) -> &InvertedIndex {
        &self.inner
    }

    /// Unwrap back into the raw index.
    pub fn into_inner(self) -> InvertedIndex {
        self.inner
    }
}
