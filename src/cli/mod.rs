// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scout command-line interface.
//!
//! Four subcommands: `index` to build an index from a JSON document list,
//! `score` to rate a term against a saved index, `inspect` to examine an
//! index file with invariant validation, and `tokens` to print the raw token
//! stream for a piece of text (tokenizer debugging).

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scout",
    about = "Substring inverted index with TF-IDF scoring",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an inverted index from a JSON document list
    Index {
        /// Input file: JSON array of strings, or of records with --fields
        #[arg(short, long)]
        input: String,

        /// Output file for the index JSON
        #[arg(short, long)]
        output: String,

        /// Record fields to index (switches input to record mode)
        ///
        /// With --fields, the input must be a JSON array of objects carrying a
        /// numeric "id"; the named string fields of each record are indexed
        /// with constant position 1.
        #[arg(long, value_delimiter = ',')]
        fields: Option<Vec<String>>,
    },

    /// Score a term against a saved index
    Score {
        /// Path to index JSON (as written by `scout index`)
        index: String,

        /// Term to score
        term: String,

        /// Total document count for the combined score
        ///
        /// Defaults to the number of distinct documents in the index.
        #[arg(long)]
        total_docs: Option<usize>,
    },

    /// Inspect a saved index: statistics and invariant validation
    Inspect {
        /// Path to index JSON
        file: String,
    },

    /// Print the token stream for a piece of text
    Tokens {
        /// Text to tokenize
        text: String,
    },
}
