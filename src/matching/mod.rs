//! Keyword matching engine and search algorithms.
//!
//! This module provides the core matching functionality:
//!
//! - [`SearchEngine`]: two-phase (exact, then fuzzy fallback) corpus search
//! - [`kmp`], [`boyer_moore`]: single-pattern matchers, run once per keyword
//! - [`aho_corasick`]: multi-pattern automaton, one pass per document
//! - [`fuzzy`]: Levenshtein-based token scoring for near-miss keywords
//!
//! ## Search phases
//!
//! 1. **Exact phase**: every applicant's documents are scanned with the
//!    algorithm the query selects. A document with at least one keyword
//!    occurrence marks its applicant as matched and is claimed.
//! 2. **Fuzzy phase**: remaining applicants are re-scanned with the fuzzy
//!    matcher, skipping claimed documents, to catch misspelled keywords
//!    (`Pythn` for `Python`).
//!
//! All matchers agree on semantics: case-insensitive, overlap-counting,
//! empty keywords skipped, zero-count keywords dropped from results.
//!
//! ## Example
//!
//! ```rust
//! use cv_scan::core::types::Algorithm;
//! use cv_scan::matching::engine::match_keywords;
//!
//! let keywords: Vec<String> = ["React", "CSS"].iter().map(ToString::to_string).collect();
//! let matches = match_keywords(
//!     Algorithm::AhoCorasick,
//!     "React pairs well with CSS. React is everywhere.",
//!     &keywords,
//! );
//!
//! assert_eq!(matches[0].keyword, "React");
//! assert_eq!(matches[0].occurrences, 2);
//! ```
//!
//! [`SearchEngine`]: engine::SearchEngine

pub mod aho_corasick;
pub mod boyer_moore;
pub mod engine;
pub mod fuzzy;
pub mod kmp;

pub use engine::{SearchConfig, SearchEngine, SearchOutcome};
