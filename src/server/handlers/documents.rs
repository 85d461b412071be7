//! Document listing and detail handlers.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::super::template_structs::{
    concept_href, ConceptLink, DocumentLink, DocumentListTemplate, DocumentTemplate,
};
use super::super::AppState;
use super::helpers::{error_response, render};

/// Query params for the document listing.
#[derive(Debug, Deserialize, Default)]
pub struct DocumentListParams {
    /// Concept identifier (or comma-separated identifiers) to filter on.
    pub concepts: Option<String>,
}

/// Documents mentioning a concept.
pub async fn list_documents(
    State(state): State<AppState>,
    Query(params): Query<DocumentListParams>,
) -> Response {
    let concept = match params.concepts.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => {
            return render(&DocumentListTemplate {
                title: "Documents",
                concept_href: None,
                total: 0,
                documents: Vec::new(),
            })
            .into_response();
        }
    };

    let listing = match state.api.list_documents(concept).await {
        Ok(l) => l,
        Err(e) => return error_response("documents", &e),
    };

    let template = DocumentListTemplate {
        title: "Documents",
        concept_href: Some(concept_href(concept)),
        total: listing.total(),
        documents: listing
            .results
            .iter()
            .map(DocumentLink::from_summary)
            .collect(),
    };

    render(&template).into_response()
}

/// Document detail page.
pub async fn document_detail(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
) -> Response {
    let document = match state.api.get_document(&doc_id).await {
        Ok(d) => d,
        Err(e) => return error_response("document", &e),
    };

    let template = DocumentTemplate {
        title: &document.title,
        document: &document,
        concepts: document
            .concepts
            .iter()
            .map(|id| ConceptLink::new(id))
            .collect(),
    };

    render(&template).into_response()
}
