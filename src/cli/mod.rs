//! Command-line interface for cv-scan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Scan a corpus of CVs for keywords and rank the matches
//! - **corpus**: List the applicants in a corpus file and their documents
//!
//! ## Usage
//!
//! ```text
//! # Search with the default algorithm (Aho-Corasick)
//! cv-scan search applicants.json --keywords "React, Express, HTML"
//!
//! # Pick an algorithm and cap the result list
//! cv-scan search applicants.json -k "Rust" -a "Boyer-Moore" -n 5
//!
//! # JSON output for scripting
//! cv-scan search applicants.json -k "Python" --format json
//!
//! # Inspect a corpus file
//! cv-scan corpus applicants.json
//! ```

use clap::{Parser, Subcommand};

pub mod corpus;
pub mod search;

#[derive(Parser)]
#[command(name = "cv-scan")]
#[command(version)]
#[command(about = "Scan CV text for keywords with exact and fuzzy matching")]
#[command(
    long_about = "cv-scan searches a corpus of extracted CV text for a list of keywords.\n\nAn exact algorithm (Knuth-Morris-Pratt, Boyer-Moore or Aho-Corasick) runs first; applicants it leaves unmatched get a second pass with a Levenshtein-based fuzzy matcher that tolerates misspellings. Results report per-keyword occurrence counts and per-phase timing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus for keywords
    Search(search::SearchArgs),

    /// List applicants and documents in a corpus file
    Corpus(corpus::CorpusArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
