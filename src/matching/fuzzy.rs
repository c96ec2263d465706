//! Levenshtein-based fuzzy keyword matching.
//!
//! The fuzzy matcher is the fallback phase of a search: it only runs over
//! documents the exact algorithms left unmatched. Scoring every whitespace
//! token against every keyword is O(|keywords| × |tokens| × token-length²),
//! by far the most expensive path in the crate, which is why it never runs
//! over the whole corpus.

use crate::core::types::KeywordMatch;

/// Similarity score at or above which a token counts as a fuzzy hit
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 80.0;

/// Percentage similarity between two strings, derived from edit distance.
///
/// Computes the classic dynamic-programming Levenshtein distance (insert,
/// delete, substitute all cost 1) and maps it to a percentage:
/// `(1 - distance / max(len_a, len_b)) * 100`, so 100.0 means identical and
/// 0.0 means nothing survives. An empty `pattern` is handled explicitly
/// before the division: 100.0 when `text` is empty too, otherwise 0.0.
#[must_use]
pub fn similarity(pattern: &str, text: &str) -> f64 {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let (m, n) = (pattern.len(), text.len());

    if m == 0 {
        return if n == 0 { 100.0 } else { 0.0 };
    }

    // rolling two-row DP; prev[j] is the cost of matching the first i-1
    // pattern chars against the first j text chars
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut current = vec![0usize; n + 1];

    for i in 1..=m {
        current[0] = i;
        for j in 1..=n {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            current[j] = (prev[j] + 1) // delete
                .min(current[j - 1] + 1) // insert
                .min(prev[j - 1] + cost); // substitute
        }
        std::mem::swap(&mut prev, &mut current);
    }

    let distance = prev[n];
    #[allow(clippy::cast_precision_loss)] // token lengths are tiny
    {
        (1.0 - distance as f64 / m.max(n) as f64) * 100.0
    }
}

/// Fuzzy-match `keywords` against the whitespace tokens of `text`.
///
/// Each token is scored against each keyword, both folded to lowercase; a
/// score at or above `threshold` counts the token as one occurrence of the
/// keyword. Keywords without a single hit are omitted, as are empty
/// keywords.
#[must_use]
pub fn fuzzy_match<S: AsRef<str>>(text: &str, keywords: &[S], threshold: f64) -> Vec<KeywordMatch> {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    let mut matches = Vec::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if keyword.is_empty() {
            continue;
        }
        let folded = keyword.to_lowercase();

        let occurrences = tokens
            .iter()
            .filter(|token| similarity(&folded, token) >= threshold)
            .count() as u64;

        if occurrences > 0 {
            matches.push(KeywordMatch::new(keyword, occurrences));
        }
    }

    matches
}
