//! Concept records returned by the search API.

use serde::{Deserialize, Serialize};

/// A labelled topic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub preferred_label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub alternative_labels: Vec<String>,
}

impl Concept {
    /// Preferred label followed by every alternative label.
    pub fn all_labels(&self) -> Vec<&str> {
        std::iter::once(self.preferred_label.as_str())
            .chain(self.alternative_labels.iter().map(String::as_str))
            .collect()
    }
}
