//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::models::{Concept, Document, DocumentSummary};

/// Helper struct for document links in listings.
pub struct DocumentLink {
    pub href: String,
    pub title: String,
}

impl DocumentLink {
    pub fn from_summary(summary: &DocumentSummary) -> Self {
        Self {
            href: document_href(&summary.id),
            title: summary.title.clone(),
        }
    }
}

/// Helper struct for concept references on a document page.
pub struct ConceptLink {
    pub id: String,
    pub href: String,
}

impl ConceptLink {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            href: concept_href(id),
        }
    }
}

/// Link to the document view.
pub fn document_href(id: &str) -> String {
    format!("/documents/{}", urlencoding::encode(id))
}

/// Link to the concept view.
pub fn concept_href(id: &str) -> String {
    format!("/concepts/{}", urlencoding::encode(id))
}

/// Link to the full document listing for a concept.
pub fn concept_documents_href(id: &str) -> String {
    format!("/documents?concepts={}", urlencoding::encode(id))
}

/// Landing page with the upstream health-check body.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    /// Pretty-printed health-check JSON; `None` until the fetch resolves.
    pub health: Option<String>,
}

/// Concept page with its matching documents.
#[derive(Template)]
#[template(path = "concept.html")]
pub struct ConceptTemplate<'a> {
    pub title: &'a str,
    pub concept: &'a Concept,
    /// Every label except the preferred one.
    pub alternative_labels: Vec<&'a str>,
    pub documents: Vec<DocumentLink>,
    pub see_all_href: String,
}

/// Full document listing for a concept filter.
#[derive(Template)]
#[template(path = "documents.html")]
pub struct DocumentListTemplate<'a> {
    pub title: &'a str,
    pub concept_href: Option<String>,
    pub total: u64,
    pub documents: Vec<DocumentLink>,
}

/// Document detail page.
#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate<'a> {
    pub title: &'a str,
    pub document: &'a Document,
    pub concepts: Vec<ConceptLink>,
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_encode_identifiers() {
        assert_eq!(document_href("a1b2c3d4"), "/documents/a1b2c3d4");
        assert_eq!(concept_href("a b/c"), "/concepts/a%20b%2Fc");
        assert_eq!(
            concept_documents_href("68t56e7d,vfbhyncy"),
            "/documents?concepts=68t56e7d%2Cvfbhyncy"
        );
    }

    #[test]
    fn test_index_renders_health_only_when_present() {
        let empty = IndexTemplate {
            title: "Tribunals search",
            health: None,
        }
        .render()
        .unwrap();
        assert!(empty.contains("Tribunals search"));
        assert!(!empty.contains("<pre"));

        let filled = IndexTemplate {
            title: "Tribunals search",
            health: Some("{\n  \"status\": \"ok\"\n}".to_string()),
        }
        .render()
        .unwrap();
        assert!(filled.contains("<pre"));
        assert!(filled.contains("status"));
    }

    #[test]
    fn test_concept_template_escapes_upstream_text() {
        let concept = Concept {
            preferred_label: "<script>alert(1)</script>".to_string(),
            description: "Fish & chips".to_string(),
            alternative_labels: vec![],
        };
        let html = ConceptTemplate {
            title: &concept.preferred_label,
            concept: &concept,
            alternative_labels: vec!["Cod & chips"],
            documents: vec![DocumentLink {
                href: document_href("x1"),
                title: "A <b>bold title".to_string(),
            }],
            see_all_href: concept_documents_href("c1"),
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Fish &amp; chips"));
        assert!(html.contains("Also known as: Cod &amp; chips</p>"));
        assert!(html.contains(r#"<a href="/documents/x1">A &lt;b&gt;bold title</a>"#));
        assert!(html.contains(r#"href="/documents?concepts=c1""#));
    }

    #[test]
    fn test_document_template_optional_sections() {
        let document = Document {
            id: "d1".to_string(),
            title: "Smith v Acme Ltd".to_string(),
            summary: None,
            text: Some("Full judgment".to_string()),
            concepts: vec!["c1".to_string()],
        };
        let html = DocumentTemplate {
            title: &document.title,
            document: &document,
            concepts: document.concepts.iter().map(|c| ConceptLink::new(c)).collect(),
        }
        .render()
        .unwrap();

        assert!(!html.contains("class=\"summary\""));
        assert!(html.contains("Full judgment"));
        assert!(html.contains(r#"href="/concepts/c1""#));
    }
}
