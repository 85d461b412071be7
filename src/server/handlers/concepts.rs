//! Concept page handler.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use super::super::template_structs::{concept_documents_href, ConceptTemplate, DocumentLink};
use super::super::AppState;
use super::helpers::{error_response, render};

/// Concept detail page with a few matching documents.
pub async fn concept_detail(State(state): State<AppState>, Path(uid): Path<String>) -> Response {
    let (concept, documents) = tokio::join!(
        state.api.get_concept(&uid),
        state.api.list_documents(&uid)
    );

    let concept = match concept {
        Ok(c) => c,
        Err(e) => return error_response("concept", &e),
    };
    let documents = match documents {
        Ok(d) => d,
        Err(e) => return error_response("matching documents", &e),
    };

    let template = ConceptTemplate {
        title: &concept.preferred_label,
        concept: &concept,
        alternative_labels: concept.all_labels().into_iter().skip(1).collect(),
        documents: documents
            .results
            .iter()
            .map(DocumentLink::from_summary)
            .collect(),
        see_all_href: concept_documents_href(&uid),
    };

    render(&template).into_response()
}
