use std::collections::HashMap;

use crate::core::applicant::DocumentId;

/// Normalize extracted CV text for matching.
///
/// Collapses all whitespace runs (newlines included) to single spaces,
/// trims the ends, and folds to lowercase. Matchers assume cached text has
/// been through this.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Cleaned document text, keyed by document id.
///
/// The cache is populated once, before any search runs, by whatever layer
/// extracts text from the CV files; searches borrow it immutably and never
/// mutate it. Keeping it an explicit value rather than process-global state
/// means a corpus can be re-extracted by simply building a new cache.
#[derive(Debug, Default)]
pub struct TextCache {
    texts: HashMap<DocumentId, String>,
}

impl TextCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean `raw` and store it under `id`, replacing any previous entry
    pub fn insert(&mut self, id: DocumentId, raw: &str) {
        self.texts.insert(id, clean_text(raw));
    }

    /// Cached text for a document.
    ///
    /// Returns `None` for unknown documents and for documents whose
    /// cleaned text came out empty; both are skipped by searches.
    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<&str> {
        self.texts
            .get(id)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Whether a document has usable (non-empty) text
    #[must_use]
    pub fn contains(&self, id: &DocumentId) -> bool {
        self.get(id).is_some()
    }
}
