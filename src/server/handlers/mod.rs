//! HTTP request handlers for the web server.

mod api;
mod concepts;
mod documents;
mod helpers;
mod home;
mod static_files;

// Re-export handlers for use by the router
pub use api::health;
pub use concepts::concept_detail;
pub use documents::{document_detail, list_documents};
pub use home::index;
pub use static_files::serve_css;
