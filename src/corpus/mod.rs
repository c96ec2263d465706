//! Applicant corpus storage and document text caching.
//!
//! The corpus holds the applicants and document metadata a search iterates;
//! the text cache holds the extracted, cleaned text those documents point
//! at. They are deliberately separate: the corpus is cheap, serializable
//! metadata, while the cache is built once from the (possibly slow) text
//! extraction step and reused across searches.
//!
//! ## Corpus files
//!
//! A corpus is a JSON file:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "applicants": [
//!     {
//!       "id": 1,
//!       "name": "Farhan",
//!       "documents": [{ "cv_path": "cv/farhan.txt", "role": "Backend" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Document text is not part of the file; `cv_path` points at the extracted
//! text to be cleaned and cached before searching.

pub mod cache;
pub mod store;

pub use cache::TextCache;
pub use store::ApplicantCorpus;
