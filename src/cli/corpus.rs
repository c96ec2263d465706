use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::corpus::store::ApplicantCorpus;

#[derive(Args)]
pub struct CorpusArgs {
    /// Corpus JSON file
    #[arg(required = true)]
    pub corpus: PathBuf,

    /// Directory document paths resolve against (default: the corpus file's directory)
    #[arg(long)]
    pub text_dir: Option<PathBuf>,
}

/// Execute the corpus subcommand
///
/// # Errors
///
/// Returns an error if the corpus file cannot be read or parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CorpusArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let corpus = ApplicantCorpus::load_from_file(&args.corpus)?;

    match format {
        OutputFormat::Json => {
            println!("{}", corpus.to_json()?);
        }
        OutputFormat::Text => {
            let text_dir = match &args.text_dir {
                Some(dir) => dir.clone(),
                None => args
                    .corpus
                    .parent()
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            };

            println!(
                "{} applicants, {} documents",
                corpus.len(),
                corpus.document_count()
            );
            for applicant in corpus.iter() {
                println!("\n{} (id {})", applicant.name, applicant.id);
                for document in &applicant.documents {
                    let available = text_dir.join(&document.cv_path).is_file();
                    println!(
                        "  {} [{}]{}",
                        document.cv_path,
                        if available { "text found" } else { "missing" },
                        document
                            .role
                            .as_deref()
                            .map(|r| format!(" - {r}"))
                            .unwrap_or_default()
                    );
                }
            }
        }
    }

    Ok(())
}
