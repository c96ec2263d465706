use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::query::{parse_keyword_list, SearchQuery};
use crate::core::types::Algorithm;
use crate::corpus::cache::TextCache;
use crate::corpus::store::ApplicantCorpus;
use crate::matching::engine::{SearchConfig, SearchEngine, SearchOutcome};
use crate::matching::fuzzy::DEFAULT_FUZZY_THRESHOLD;

#[derive(Args)]
pub struct SearchArgs {
    /// Corpus JSON file
    #[arg(required = true)]
    pub corpus: PathBuf,

    /// Comma-separated keywords to search for
    #[arg(short, long, required = true)]
    pub keywords: String,

    /// Exact-match algorithm: "Knuth-Morris-Pratt", "Boyer-Moore" or "Aho-Corasick"
    #[arg(short, long, default_value = "Aho-Corasick")]
    pub algorithm: String,

    /// Maximum number of applicants to return (0 = unlimited)
    #[arg(short = 'n', long, default_value = "0")]
    pub top_matches: i64,

    /// Similarity percentage a token needs to count as a fuzzy hit
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
    pub fuzzy_threshold: f64,

    /// Skip the fuzzy fallback phase
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Directory document paths resolve against (default: the corpus file's directory)
    #[arg(long)]
    pub text_dir: Option<PathBuf>,
}

/// Execute the search subcommand
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or the algorithm name
/// is not one of the three known algorithms.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let corpus = ApplicantCorpus::load_from_file(&args.corpus)?;
    let algorithm = Algorithm::from_name(&args.algorithm)?;
    let keywords = parse_keyword_list(&args.keywords);

    if verbose {
        eprintln!(
            "Loaded corpus with {} applicants ({} documents)",
            corpus.len(),
            corpus.document_count()
        );
    }

    let text_dir = match &args.text_dir {
        Some(dir) => dir.clone(),
        None => args
            .corpus
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    let cache = load_texts(&corpus, &text_dir);

    if verbose {
        eprintln!("Extracted text for {} of {} documents", cache.len(), corpus.document_count());
    }

    let query = SearchQuery::new(keywords, algorithm, args.top_matches);
    let config = SearchConfig {
        fuzzy_threshold: args.fuzzy_threshold,
        fuzzy_fallback: !args.no_fuzzy,
    };
    let outcome = SearchEngine::with_config(&corpus, &cache, config).run(&query);

    match format {
        OutputFormat::Text => print_text(&outcome, algorithm),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

/// Read and clean every document's text file.
///
/// Unreadable files are logged and left out of the cache; the engine then
/// treats those documents as non-matching.
fn load_texts(corpus: &ApplicantCorpus, text_dir: &Path) -> TextCache {
    let mut cache = TextCache::new();

    for applicant in corpus.iter() {
        for document in &applicant.documents {
            let path = text_dir.join(&document.cv_path);
            match std::fs::read_to_string(&path) {
                Ok(raw) => cache.insert(document.id(), &raw),
                Err(e) => {
                    tracing::debug!("skipping {}: {e}", path.display());
                }
            }
        }
    }

    cache
}

fn print_text(outcome: &SearchOutcome, algorithm: Algorithm) {
    println!(
        "Exact match ({algorithm}): {} CVs matched in {} ms",
        outcome.exact_match_stats.count, outcome.exact_match_stats.time_ms
    );
    println!(
        "Fuzzy match: {} CVs matched in {} ms",
        outcome.fuzzy_match_stats.count, outcome.fuzzy_match_stats.time_ms
    );

    if outcome.applicants.is_empty() {
        println!("\nNo applicants matched.");
        return;
    }

    println!();
    for (rank, applicant) in outcome.applicants.iter().enumerate() {
        println!(
            "{}. {} - {} matched keyword{} ({})",
            rank + 1,
            applicant.name,
            applicant.matched_keywords,
            if applicant.matched_keywords == 1 { "" } else { "s" },
            applicant.cv_path
        );
        for keyword_match in &applicant.keywords_data {
            println!(
                "     {}: {} occurrence{}",
                keyword_match.keyword,
                keyword_match.occurrences,
                if keyword_match.occurrences == 1 { "" } else { "s" }
            );
        }
    }
}
