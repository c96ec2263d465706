use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an algorithm name does not match any known algorithm.
///
/// Selection is case-sensitive and fails fast, before any scanning begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unknown algorithm '{0}' (expected \"Knuth-Morris-Pratt\", \"Boyer-Moore\" or \"Aho-Corasick\")"
)]
pub struct UnknownAlgorithm(pub String);

/// Exact-match algorithm used for the first search phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Single-pattern search via the border (failure) table, run once per keyword
    KnuthMorrisPratt,
    /// Single-pattern search with the last-occurrence skip heuristic, run once per keyword
    BoyerMoore,
    /// Multi-pattern automaton, single pass over the text for all keywords
    AhoCorasick,
}

impl Algorithm {
    /// Parse an algorithm from its display name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAlgorithm`] for any name other than the three
    /// exact (case-sensitive) names.
    pub fn from_name(name: &str) -> Result<Self, UnknownAlgorithm> {
        match name {
            "Knuth-Morris-Pratt" => Ok(Self::KnuthMorrisPratt),
            "Boyer-Moore" => Ok(Self::BoyerMoore),
            "Aho-Corasick" => Ok(Self::AhoCorasick),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }

    /// Display name, matching the accepted input of [`Algorithm::from_name`]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::KnuthMorrisPratt => "Knuth-Morris-Pratt",
            Self::BoyerMoore => "Boyer-Moore",
            Self::AhoCorasick => "Aho-Corasick",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Occurrence count for a single keyword in a single document.
///
/// Matchers only ever return entries with `occurrences > 0`; keywords that
/// were not found are dropped rather than reported with a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// The keyword as given in the query (original casing)
    pub keyword: String,

    /// Number of occurrences found, overlaps included
    pub occurrences: u64,
}

impl KeywordMatch {
    pub fn new(keyword: impl Into<String>, occurrences: u64) -> Self {
        Self {
            keyword: keyword.into(),
            occurrences,
        }
    }
}

/// Per-phase search statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Number of documents matched during the phase (not total occurrences)
    pub count: u64,

    /// Elapsed wall-clock time for the phase, in whole milliseconds
    pub time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_name() {
        assert_eq!(
            Algorithm::from_name("Knuth-Morris-Pratt").unwrap(),
            Algorithm::KnuthMorrisPratt
        );
        assert_eq!(
            Algorithm::from_name("Boyer-Moore").unwrap(),
            Algorithm::BoyerMoore
        );
        assert_eq!(
            Algorithm::from_name("Aho-Corasick").unwrap(),
            Algorithm::AhoCorasick
        );
    }

    #[test]
    fn test_algorithm_from_name_is_case_sensitive() {
        assert!(Algorithm::from_name("aho-corasick").is_err());
        assert!(Algorithm::from_name("KMP").is_err());
        assert!(Algorithm::from_name("").is_err());
    }

    #[test]
    fn test_unknown_algorithm_message_names_choices() {
        let err = Algorithm::from_name("Rabin-Karp").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Rabin-Karp"));
        assert!(message.contains("Knuth-Morris-Pratt"));
        assert!(message.contains("Boyer-Moore"));
        assert!(message.contains("Aho-Corasick"));
    }

    #[test]
    fn test_algorithm_name_round_trips() {
        for algorithm in [
            Algorithm::KnuthMorrisPratt,
            Algorithm::BoyerMoore,
            Algorithm::AhoCorasick,
        ] {
            assert_eq!(Algorithm::from_name(algorithm.name()).unwrap(), algorithm);
        }
    }
}
