use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::applicant::Applicant;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Corpus file version for compatibility checking
pub const CORPUS_VERSION: &str = "1.0.0";

/// Serializable corpus format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusData {
    pub version: String,
    pub applicants: Vec<Applicant>,
}

/// The applicant corpus a search runs over.
///
/// Applicants keep their insertion order; both search phases iterate them
/// in that stable order, so results are deterministic for a given corpus
/// file.
#[derive(Debug, Default)]
pub struct ApplicantCorpus {
    /// All applicants, in file order
    applicants: Vec<Applicant>,

    /// Index: applicant id -> index in applicants vec
    id_to_index: HashMap<u64, usize>,
}

impl ApplicantCorpus {
    /// Create an empty corpus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a corpus from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a corpus from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let data: CorpusData = serde_json::from_str(json)?;

        if data.version != CORPUS_VERSION {
            tracing::warn!(
                "Corpus version mismatch (expected {CORPUS_VERSION}, found {})",
                data.version
            );
        }

        let mut corpus = Self::new();
        for applicant in data.applicants {
            corpus.add_applicant(applicant);
        }

        Ok(corpus)
    }

    /// Serialize the corpus to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, CorpusError> {
        let data = CorpusData {
            version: CORPUS_VERSION.to_string(),
            applicants: self.applicants.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Add an applicant to the corpus.
    ///
    /// A re-used id replaces nothing; the newer record shadows the older
    /// one in the id index while both remain iterable.
    pub fn add_applicant(&mut self, applicant: Applicant) {
        let index = self.applicants.len();
        self.id_to_index.insert(applicant.id, index);
        self.applicants.push(applicant);
    }

    /// Look up an applicant by id
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Applicant> {
        self.id_to_index.get(&id).map(|&i| &self.applicants[i])
    }

    /// Iterate applicants in stable corpus order
    pub fn iter(&self) -> impl Iterator<Item = &Applicant> {
        self.applicants.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// Total number of documents across all applicants
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.applicants.iter().map(|a| a.documents.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ApplicantCorpus {
    type Item = &'a Applicant;
    type IntoIter = std::slice::Iter<'a, Applicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.applicants.iter()
    }
}
