use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::applicant::DocumentId;
use crate::core::query::SearchQuery;
use crate::core::types::{Algorithm, KeywordMatch, MatchStats};
use crate::corpus::cache::TextCache;
use crate::corpus::store::ApplicantCorpus;
use crate::matching::aho_corasick::KeywordAutomaton;
use crate::matching::fuzzy::{self, DEFAULT_FUZZY_THRESHOLD};
use crate::matching::{boyer_moore, kmp};

/// Configuration for the search engine
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Similarity percentage at or above which a token counts as a fuzzy hit
    pub fuzzy_threshold: f64,

    /// Whether the fuzzy fallback phase runs at all
    pub fuzzy_fallback: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_fallback: true,
        }
    }
}

/// One matched applicant in a search outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantMatch {
    /// Corpus id of the applicant
    pub applicant_id: u64,

    /// Applicant display name
    pub name: String,

    /// Number of distinct query positions that matched
    pub matched_keywords: u64,

    /// Per-keyword occurrence counts; only keywords that occurred
    pub keywords_data: Vec<KeywordMatch>,

    /// Path of the document the match came from
    pub cv_path: String,
}

/// Aggregate result of one search invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Documents matched and elapsed time for the exact phase
    pub exact_match_stats: MatchStats,

    /// Documents matched and elapsed time for the fuzzy phase
    pub fuzzy_match_stats: MatchStats,

    /// Matched applicants, exact-phase rows first, then fuzzy-phase rows
    pub applicants: Vec<ApplicantMatch>,
}

/// Exact matcher prepared once per search invocation.
///
/// KMP and Boyer-Moore run once per keyword per document; Aho-Corasick
/// builds its automaton up front and scans each document once for all
/// keywords.
enum ExactMatcher {
    PerKeyword(fn(&str, &str) -> u64),
    Automaton(KeywordAutomaton),
}

impl ExactMatcher {
    fn prepare(algorithm: Algorithm, keywords: &[String]) -> Self {
        match algorithm {
            Algorithm::KnuthMorrisPratt => Self::PerKeyword(kmp::count_occurrences),
            Algorithm::BoyerMoore => Self::PerKeyword(boyer_moore::count_occurrences),
            Algorithm::AhoCorasick => Self::Automaton(KeywordAutomaton::build(keywords)),
        }
    }

    /// Match all keywords against one document's text.
    ///
    /// `text` and `folded` keywords must already be lowercase; `raw` keeps
    /// the original casing for the result rows. Empty keywords are skipped;
    /// zero-count keywords are dropped.
    fn matches(&self, text: &str, raw: &[String], folded: &[String]) -> Vec<KeywordMatch> {
        match self {
            Self::PerKeyword(count) => raw
                .iter()
                .zip(folded)
                .filter(|(r, _)| !r.is_empty())
                .filter_map(|(r, f)| {
                    let occurrences = count(text, f);
                    (occurrences > 0).then(|| KeywordMatch::new(r.clone(), occurrences))
                })
                .collect(),
            Self::Automaton(automaton) => automaton
                .scan(text)
                .into_iter()
                .zip(raw)
                .filter(|&(occurrences, _)| occurrences > 0)
                .map(|(occurrences, r)| KeywordMatch::new(r.clone(), occurrences))
                .collect(),
        }
    }
}

/// Match `keywords` against a single text with the selected algorithm.
///
/// Folds the text to lowercase before scanning, so callers can pass raw
/// extracted text. Returns one entry per query position that occurred in
/// the text, in query order.
#[must_use]
pub fn match_keywords(algorithm: Algorithm, text: &str, keywords: &[String]) -> Vec<KeywordMatch> {
    let folded: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let matcher = ExactMatcher::prepare(algorithm, keywords);
    matcher.matches(&text.to_lowercase(), keywords, &folded)
}

/// The two-phase search engine.
///
/// Borrows the corpus and the text cache for its lifetime; a search never
/// mutates either, so one corpus and cache can serve any number of
/// sequential searches.
pub struct SearchEngine<'a> {
    corpus: &'a ApplicantCorpus,
    cache: &'a TextCache,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new(corpus: &'a ApplicantCorpus, cache: &'a TextCache) -> Self {
        Self::with_config(corpus, cache, SearchConfig::default())
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(corpus: &'a ApplicantCorpus, cache: &'a TextCache, config: SearchConfig) -> Self {
        Self {
            corpus,
            cache,
            config,
        }
    }

    /// Run both search phases and collect the outcome.
    ///
    /// Phase one scans every applicant's documents with the query's exact
    /// algorithm, in corpus order, claiming each document that matches.
    /// Phase two re-walks the remaining applicants with the fuzzy matcher,
    /// skipping claimed documents. The result cap applies to the combined
    /// applicant list across both phases; documents without cached text
    /// are skipped silently.
    #[must_use]
    pub fn run(&self, query: &SearchQuery) -> SearchOutcome {
        let folded: Vec<String> = query.keywords.iter().map(|k| k.to_lowercase()).collect();
        let matcher = ExactMatcher::prepare(query.algorithm, &query.keywords);
        let cap = query.cap();

        let mut applicants: Vec<ApplicantMatch> = Vec::new();
        let mut claimed: HashSet<DocumentId> = HashSet::new();
        let mut matched_applicants: HashSet<u64> = HashSet::new();

        // exact phase
        let started = Instant::now();
        let mut exact_count = 0u64;
        for applicant in self.corpus.iter() {
            if cap.is_some_and(|c| applicants.len() >= c) {
                break;
            }
            for document in &applicant.documents {
                // cache text is already cleaned (lowercased, whitespace collapsed)
                let Some(text) = self.cache.get(&document.id()) else {
                    continue;
                };

                let keywords_data = matcher.matches(text, &query.keywords, &folded);
                if keywords_data.is_empty() {
                    continue;
                }

                claimed.insert(document.id());
                matched_applicants.insert(applicant.id);
                applicants.push(ApplicantMatch {
                    applicant_id: applicant.id,
                    name: applicant.name.clone(),
                    matched_keywords: keywords_data.len() as u64,
                    keywords_data,
                    cv_path: document.cv_path.clone(),
                });
                exact_count += 1;
                break;
            }
        }
        let exact_match_stats = MatchStats {
            count: exact_count,
            time_ms: elapsed_ms(started),
        };
        tracing::debug!(
            algorithm = %query.algorithm,
            matched = exact_match_stats.count,
            time_ms = exact_match_stats.time_ms,
            "exact phase complete"
        );

        // fuzzy fallback over whatever the exact phase left unclaimed
        let started = Instant::now();
        let mut fuzzy_count = 0u64;
        if self.config.fuzzy_fallback {
            for applicant in self.corpus.iter() {
                if cap.is_some_and(|c| applicants.len() >= c) {
                    break;
                }
                if matched_applicants.contains(&applicant.id) {
                    continue;
                }
                for document in &applicant.documents {
                    if claimed.contains(&document.id()) {
                        continue;
                    }
                    let Some(text) = self.cache.get(&document.id()) else {
                        continue;
                    };

                    let keywords_data =
                        fuzzy::fuzzy_match(text, &query.keywords, self.config.fuzzy_threshold);
                    if keywords_data.is_empty() {
                        continue;
                    }

                    applicants.push(ApplicantMatch {
                        applicant_id: applicant.id,
                        name: applicant.name.clone(),
                        matched_keywords: keywords_data.len() as u64,
                        keywords_data,
                        cv_path: document.cv_path.clone(),
                    });
                    fuzzy_count += 1;
                    break;
                }
            }
        }
        let fuzzy_match_stats = MatchStats {
            count: fuzzy_count,
            time_ms: elapsed_ms(started),
        };
        tracing::debug!(
            matched = fuzzy_match_stats.count,
            time_ms = fuzzy_match_stats.time_ms,
            "fuzzy phase complete"
        );

        SearchOutcome {
            exact_match_stats,
            fuzzy_match_stats,
            applicants,
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::applicant::{Applicant, Document};

    fn corpus_and_cache(entries: &[(u64, &str, &str, &str)]) -> (ApplicantCorpus, TextCache) {
        let mut corpus = ApplicantCorpus::new();
        let mut cache = TextCache::new();
        for &(id, name, cv_path, text) in entries {
            corpus.add_applicant(Applicant::new(id, name).with_document(Document::new(cv_path)));
            if !text.is_empty() {
                cache.insert(DocumentId::new(cv_path), text);
            }
        }
        (corpus, cache)
    }

    fn query(keywords: &[&str], algorithm: Algorithm, top_match: i64) -> SearchQuery {
        SearchQuery::new(
            keywords.iter().map(ToString::to_string).collect(),
            algorithm,
            top_match,
        )
    }

    #[test]
    fn test_match_keywords_end_to_end() {
        let text = "I love React and Express. HTML and CSS are great with React.";
        let keywords: Vec<String> = ["React", "Express", "HTML", "CSS", "JavaScript"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let matches = match_keywords(Algorithm::AhoCorasick, text, &keywords);

        assert_eq!(
            matches,
            vec![
                KeywordMatch::new("React", 2),
                KeywordMatch::new("Express", 1),
                KeywordMatch::new("HTML", 1),
                KeywordMatch::new("CSS", 1),
            ]
        );
    }

    #[test]
    fn test_match_keywords_agrees_across_algorithms() {
        let text = "rust go rust python";
        let keywords: Vec<String> = ["rust", "go", "perl"].iter().map(ToString::to_string).collect();

        let kmp = match_keywords(Algorithm::KnuthMorrisPratt, text, &keywords);
        let bm = match_keywords(Algorithm::BoyerMoore, text, &keywords);
        let ac = match_keywords(Algorithm::AhoCorasick, text, &keywords);

        assert_eq!(kmp, bm);
        assert_eq!(kmp, ac);
        assert_eq!(kmp[0], KeywordMatch::new("rust", 2));
    }

    #[test]
    fn test_exact_phase_matches_in_corpus_order() {
        let (corpus, cache) = corpus_and_cache(&[
            (1, "Farhan", "cv/farhan.txt", "React and Express developer"),
            (2, "Alana", "cv/alana.txt", "Pure backend, no frontend"),
            (3, "Ariel", "cv/ariel.txt", "React React React"),
        ]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["React"], Algorithm::AhoCorasick, 0));

        assert_eq!(outcome.exact_match_stats.count, 2);
        assert_eq!(outcome.fuzzy_match_stats.count, 0);
        let names: Vec<&str> = outcome.applicants.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Farhan", "Ariel"]);
        assert_eq!(outcome.applicants[1].keywords_data, vec![KeywordMatch::new("React", 3)]);
    }

    #[test]
    fn test_top_match_caps_combined_results() {
        let (corpus, cache) = corpus_and_cache(&[
            (1, "A", "cv/a.txt", "rust here"),
            (2, "B", "cv/b.txt", "rust there"),
            (3, "C", "cv/c.txt", "rust everywhere"),
        ]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["rust"], Algorithm::KnuthMorrisPratt, 2));

        assert_eq!(outcome.applicants.len(), 2);
        assert_eq!(outcome.exact_match_stats.count, 2);
    }

    #[test]
    fn test_fuzzy_phase_picks_up_near_misses() {
        let (corpus, cache) = corpus_and_cache(&[
            (1, "Farhan", "cv/farhan.txt", "seasoned Python engineer"),
            (2, "Alana", "cv/alana.txt", "wrote Pythn scripts for years"),
        ]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["Python"], Algorithm::BoyerMoore, 0));

        assert_eq!(outcome.exact_match_stats.count, 1);
        assert_eq!(outcome.fuzzy_match_stats.count, 1);
        let names: Vec<&str> = outcome.applicants.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Farhan", "Alana"]);
        assert_eq!(
            outcome.applicants[1].keywords_data,
            vec![KeywordMatch::new("Python", 1)]
        );
    }

    #[test]
    fn test_claimed_documents_skip_fuzzy_phase() {
        // the single document matches exactly, so the fuzzy phase must not
        // revisit it even though it would also fuzzy-match
        let (corpus, cache) =
            corpus_and_cache(&[(1, "Farhan", "cv/farhan.txt", "React and Reakt")]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["React"], Algorithm::AhoCorasick, 0));

        assert_eq!(outcome.exact_match_stats.count, 1);
        assert_eq!(outcome.fuzzy_match_stats.count, 0);
        assert_eq!(outcome.applicants.len(), 1);
    }

    #[test]
    fn test_documents_without_text_are_skipped() {
        let (corpus, cache) = corpus_and_cache(&[
            (1, "A", "cv/a.txt", ""),
            (2, "B", "cv/b.txt", "rust developer"),
        ]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["rust"], Algorithm::AhoCorasick, 0));

        assert_eq!(outcome.applicants.len(), 1);
        assert_eq!(outcome.applicants[0].name, "B");
    }

    #[test]
    fn test_empty_keyword_list_matches_nothing() {
        let (corpus, cache) = corpus_and_cache(&[(1, "A", "cv/a.txt", "plenty of text")]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&[], Algorithm::KnuthMorrisPratt, 0));

        assert!(outcome.applicants.is_empty());
        assert_eq!(outcome.exact_match_stats.count, 0);
        assert_eq!(outcome.fuzzy_match_stats.count, 0);
    }

    #[test]
    fn test_empty_keywords_within_list_are_skipped() {
        let (corpus, cache) = corpus_and_cache(&[(1, "A", "cv/a.txt", "rust developer")]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["", "rust"], Algorithm::BoyerMoore, 0));

        assert_eq!(outcome.applicants.len(), 1);
        assert_eq!(
            outcome.applicants[0].keywords_data,
            vec![KeywordMatch::new("rust", 1)]
        );
    }

    #[test]
    fn test_fuzzy_fallback_can_be_disabled() {
        let (corpus, cache) = corpus_and_cache(&[(1, "A", "cv/a.txt", "wrote Pythn scripts")]);
        let config = SearchConfig {
            fuzzy_fallback: false,
            ..SearchConfig::default()
        };
        let engine = SearchEngine::with_config(&corpus, &cache, config);

        let outcome = engine.run(&query(&["Python"], Algorithm::AhoCorasick, 0));

        assert!(outcome.applicants.is_empty());
        assert_eq!(outcome.fuzzy_match_stats.count, 0);
    }

    #[test]
    fn test_duplicate_keywords_each_reported() {
        let (corpus, cache) = corpus_and_cache(&[(1, "A", "cv/a.txt", "rust and rust")]);
        let engine = SearchEngine::new(&corpus, &cache);

        let outcome = engine.run(&query(&["rust", "rust"], Algorithm::AhoCorasick, 0));

        assert_eq!(
            outcome.applicants[0].keywords_data,
            vec![KeywordMatch::new("rust", 2), KeywordMatch::new("rust", 2)]
        );
    }

    #[test]
    fn test_outcome_serializes_with_contract_field_names() {
        let (corpus, cache) = corpus_and_cache(&[(1, "Farhan", "cv/farhan.txt", "react")]);
        let engine = SearchEngine::new(&corpus, &cache);
        let outcome = engine.run(&query(&["React"], Algorithm::AhoCorasick, 0));

        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("exact_match_stats").is_some());
        assert!(json.get("fuzzy_match_stats").is_some());
        let row = &json["applicants"][0];
        assert_eq!(row["applicant_id"], 1);
        assert_eq!(row["matched_keywords"], 1);
        assert_eq!(row["keywords_data"][0]["keyword"], "React");
        assert_eq!(row["keywords_data"][0]["occurrences"], 1);
        assert_eq!(row["cv_path"], "cv/farhan.txt");
    }
}
