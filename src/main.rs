// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! scout - substring inverted index with TF-IDF scoring.

use clap::Parser;
use std::fs;

use scout::corpus::{load_documents, load_records};
use scout::{
    build_inverted_index, inverse_document_frequency, push_into_index, term_frequency, tf_idf,
    tokenize, InvertedIndex, WellFormedIndex,
};

mod cli;
use cli::display::{self, kv, row, section_bottom, section_top, themed, BOLD, DIM};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index {
            input,
            output,
            fields,
        } => run_index(&input, &output, fields.as_deref()),
        Commands::Score {
            index,
            term,
            total_docs,
        } => run_score(&index, &term, total_docs),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Tokens { text } => run_tokens(&text),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Build an index from a document list (or record list) and write it as JSON.
fn run_index(input: &str, output: &str, fields: Option<&[String]>) -> Result<(), String> {
    let (index, documents) = match fields {
        None => {
            let documents = load_documents(input)?;
            let count = documents.len();
            (build_inverted_index(&documents), count)
        }
        Some(fields) => {
            let records = load_records(input)?;
            let field_names: Vec<&str> = fields.iter().map(String::as_str).collect();
            let mut index = InvertedIndex::new();
            for record in &records {
                push_into_index(&mut index, record, &field_names);
            }
            (index, records.len())
        }
    };

    let json = serde_json::to_string_pretty(&index)
        .map_err(|e| format!("Failed to serialize index: {}", e))?;
    fs::write(output, json).map_err(|e| format!("Failed to write {}: {}", output, e))?;

    eprintln!(
        "✓ Indexed {} documents → {} terms, {} references ({})",
        documents,
        index.term_count(),
        index.reference_count(),
        output
    );
    Ok(())
}

/// Load an index JSON file written by `scout index`.
fn load_index(path: &str) -> Result<InvertedIndex, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid index JSON: {}", e))
}

/// Score a term against a saved index and print the breakdown.
fn run_score(index_path: &str, term: &str, total_docs: Option<usize>) -> Result<(), String> {
    let index = load_index(index_path)?;
    let total = total_docs.unwrap_or_else(|| index.total_documents());

    let frequencies = term_frequency(term, &index);
    let idf = inverse_document_frequency(term, &index);
    let score = tf_idf(term, &index, total).map_err(|e| e.to_string())?;

    section_top("SCORE");
    kv("Term", term);
    kv("Total documents", &total.to_string());
    row("");

    match &frequencies {
        None => row(&format!("  {}", themed(display::YELLOW, &[], "term not in index"))),
        Some(frequencies) => {
            row(&format!("  {}", themed(display::CYAN, &[BOLD], "Term frequency")));
            let mut by_document: Vec<(usize, usize)> =
                frequencies.iter().map(|(&d, &c)| (d, c)).collect();
            by_document.sort_unstable();
            for (document, count) in by_document {
                kv(&format!("  doc {}", document), &count.to_string());
            }
        }
    }

    row("");
    kv("IDF", &format!("{:.6}", idf));
    kv("TF-IDF", &format!("{:.6}", score));
    section_bottom();
    Ok(())
}

/// Display index structure, statistics, and invariant validation.
fn run_inspect(path: &str) -> Result<(), String> {
    let index = load_index(path)?;

    let term_count = index.term_count();
    let reference_count = index.reference_count();
    let documents = index.total_documents();

    // Top tokens by reference count, ties broken alphabetically for stable
    // output.
    let mut heaviest: Vec<(String, usize)> = index
        .iter()
        .map(|(token, refs)| (token.to_string(), refs.len()))
        .collect();
    heaviest.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    section_top("INVERTED INDEX");
    kv("File", path);
    kv("Terms", &term_count.to_string());
    kv("References", &reference_count.to_string());
    kv("Documents", &documents.to_string());
    if term_count > 0 {
        kv(
            "Avg refs/term",
            &format!("{:.2}", reference_count as f64 / term_count as f64),
        );
    }
    row("");

    if !heaviest.is_empty() {
        row(&format!("  {}", themed(display::CYAN, &[BOLD], "Heaviest terms")));
        for (token, count) in heaviest.iter().take(5) {
            kv(&format!("  {}", token), &format!("{} refs", count));
        }
        row("");
    }

    match WellFormedIndex::from_index(index) {
        Ok(_) => row(&format!(
            "  {} {}",
            themed(display::GREEN, &[], "✓"),
            display::styled(&[DIM], "all invariants hold")
        )),
        Err(e) => {
            row(&format!(
                "  {} {}",
                themed(display::RED, &[], "✗"),
                display::styled(&[DIM], "invariant violation")
            ));
            section_bottom();
            return Err(format!("Invariant violation: {}", e));
        }
    }
    section_bottom();
    Ok(())
}

/// Print the token stream, one token per line.
fn run_tokens(text: &str) -> Result<(), String> {
    for token in tokenize(text) {
        println!("{}", token);
    }
    Ok(())
}
