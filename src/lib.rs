//! # cv-scan
//!
//! A library for scanning CV/résumé text for query keywords.
//!
//! Recruiters searching a pile of CVs need to know which applicants mention
//! which keywords, and how often. `cv-scan` answers that with a choice of
//! three exact string-matching algorithms plus a fuzzy fallback that
//! tolerates the misspellings extracted CV text is full of.
//!
//! ## Features
//!
//! - **Knuth-Morris-Pratt**: border-table search, one pass per keyword
//! - **Boyer-Moore**: last-occurrence skips, one pass per keyword
//! - **Aho-Corasick**: all keywords in a single pass per document
//! - **Fuzzy matching**: Levenshtein similarity over whitespace tokens,
//!   run only over documents the exact phase left unmatched
//! - **Timing stats**: per-phase document counts and wall-clock times
//!
//! ## Example
//!
//! ```rust
//! use cv_scan::{Algorithm, ApplicantCorpus, SearchEngine, SearchQuery, TextCache};
//! use cv_scan::core::applicant::{Applicant, Document};
//!
//! // Build a corpus and cache the extracted document text
//! let mut corpus = ApplicantCorpus::new();
//! corpus.add_applicant(
//!     Applicant::new(1, "Farhan").with_document(Document::new("cv/farhan.txt")),
//! );
//!
//! let mut cache = TextCache::new();
//! cache.insert(
//!     Document::new("cv/farhan.txt").id(),
//!     "Shipped React and Express apps.",
//! );
//!
//! // Run a capped Aho-Corasick search
//! let query = SearchQuery::new(
//!     vec!["React".into(), "Express".into()],
//!     Algorithm::AhoCorasick,
//!     10,
//! );
//! let outcome = SearchEngine::new(&corpus, &cache).run(&query);
//!
//! assert_eq!(outcome.exact_match_stats.count, 1);
//! assert_eq!(outcome.applicants[0].matched_keywords, 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: applicants, documents, queries, and result types
//! - [`corpus`]: corpus storage and the document text cache
//! - [`matching`]: the four matchers and the two-phase search engine
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod corpus;
pub mod matching;

// Re-export commonly used types for convenience
pub use crate::core::query::SearchQuery;
pub use crate::core::types::{Algorithm, KeywordMatch, MatchStats, UnknownAlgorithm};
pub use crate::corpus::cache::TextCache;
pub use crate::corpus::store::ApplicantCorpus;
pub use crate::matching::engine::{ApplicantMatch, SearchConfig, SearchEngine, SearchOutcome};
