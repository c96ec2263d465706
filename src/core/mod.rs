//! Core data types for keyword searching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Applicant`], [`Document`], [`DocumentId`]: the scanned corpus entries
//! - [`SearchQuery`]: keywords, algorithm selection, and the result cap
//! - [`Algorithm`]: the closed set of exact-match algorithms
//! - [`KeywordMatch`], [`MatchStats`]: per-keyword and per-phase results
//!
//! ## Case handling
//!
//! Keyword matching is case-insensitive: matchers fold both text and
//! keywords to lowercase before scanning. Result rows keep the keyword in
//! its original casing, so a query for `React` reports `React` even though
//! the scan ran over lowercased text.
//!
//! [`Applicant`]: applicant::Applicant
//! [`Document`]: applicant::Document
//! [`DocumentId`]: applicant::DocumentId
//! [`SearchQuery`]: query::SearchQuery
//! [`Algorithm`]: types::Algorithm
//! [`KeywordMatch`]: types::KeywordMatch
//! [`MatchStats`]: types::MatchStats

pub mod applicant;
pub mod query;
pub mod types;
