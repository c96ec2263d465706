use serde::{Deserialize, Serialize};

/// Stable identifier for a CV document.
///
/// The id doubles as the key into the [`TextCache`](crate::corpus::cache::TextCache);
/// it is derived from the document's path, which is unique per application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single CV document attached to an application.
///
/// The document carries no text of its own; extracted and cleaned text lives
/// in the text cache, keyed by [`Document::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Path to the CV file this document was extracted from
    pub cv_path: String,

    /// Role the CV was submitted for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Document {
    pub fn new(cv_path: impl Into<String>) -> Self {
        Self {
            cv_path: cv_path.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Cache key for this document
    #[must_use]
    pub fn id(&self) -> DocumentId {
        DocumentId::new(self.cv_path.clone())
    }
}

/// An applicant and the CV documents submitted with their applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Applicant record id, unique within a corpus
    pub id: u64,

    /// Display name
    pub name: String,

    /// Submitted CV documents, in application order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
}

impl Applicant {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            documents: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }
}
