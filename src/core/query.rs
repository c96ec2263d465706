use serde::{Deserialize, Serialize};

use crate::core::types::Algorithm;

/// A keyword search request.
///
/// The keyword list is kept exactly as supplied: ordered, possibly with
/// duplicates and empty entries. Empty entries are skipped at match time and
/// duplicates are each evaluated; the caller (usually a UI) is expected to
/// deduplicate, but nothing here depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Query keywords in user order
    pub keywords: Vec<String>,

    /// Exact-match algorithm for the first phase
    pub algorithm: Algorithm,

    /// Maximum number of applicants to return across both phases;
    /// zero or negative means unlimited
    pub top_match: i64,
}

impl SearchQuery {
    pub fn new(keywords: Vec<String>, algorithm: Algorithm, top_match: i64) -> Self {
        Self {
            keywords,
            algorithm,
            top_match,
        }
    }

    /// Result cap as an `Option`: `None` when unlimited
    #[must_use]
    pub fn cap(&self) -> Option<usize> {
        usize::try_from(self.top_match).ok().filter(|&cap| cap > 0)
    }

    /// True if no usable (non-empty) keyword was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.iter().all(|k| k.trim().is_empty())
    }
}

/// Split a comma-separated keyword field into individual keywords.
///
/// Surrounding whitespace is trimmed and empty fragments are dropped, so
/// `"React, Express, "` yields `["React", "Express"]`.
#[must_use]
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            parse_keyword_list("React, Express, HTML"),
            vec!["React", "Express", "HTML"]
        );
    }

    #[test]
    fn test_parse_keyword_list_drops_empty_fragments() {
        assert_eq!(parse_keyword_list("React,, ,Express,"), vec!["React", "Express"]);
        assert!(parse_keyword_list("").is_empty());
        assert!(parse_keyword_list(" , ,").is_empty());
    }

    #[test]
    fn test_cap() {
        let query = SearchQuery::new(vec!["rust".into()], Algorithm::AhoCorasick, 3);
        assert_eq!(query.cap(), Some(3));

        let unlimited = SearchQuery::new(vec!["rust".into()], Algorithm::AhoCorasick, 0);
        assert_eq!(unlimited.cap(), None);

        let negative = SearchQuery::new(vec!["rust".into()], Algorithm::AhoCorasick, -1);
        assert_eq!(negative.cap(), None);
    }

    #[test]
    fn test_is_empty_ignores_whitespace_keywords() {
        let query = SearchQuery::new(vec!["  ".into(), String::new()], Algorithm::BoyerMoore, 0);
        assert!(query.is_empty());

        let query = SearchQuery::new(vec!["rust".into()], Algorithm::BoyerMoore, 0);
        assert!(!query.is_empty());
    }
}
