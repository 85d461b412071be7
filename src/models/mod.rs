//! Payload models for the external search API.

mod concept;
mod document;

pub use concept::Concept;
pub use document::{Document, DocumentListing, DocumentSummary};
