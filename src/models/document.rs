//! Document records and listings returned by the search API.

use serde::{Deserialize, Serialize};

/// The shape of a document inside a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
}

/// A full document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Identifiers of the concepts mentioned in the document.
    #[serde(default)]
    pub concepts: Vec<String>,
}

/// Result envelope of `GET /documents`.
///
/// The pagination links are carried through untouched; the frontend never
/// follows them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListing {
    #[serde(default)]
    pub results: Vec<DocumentSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,
}

impl DocumentListing {
    /// Total reported upstream, or the number of results on hand.
    pub fn total(&self) -> u64 {
        self.total_results.unwrap_or(self.results.len() as u64)
    }
}
