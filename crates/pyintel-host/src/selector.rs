//! Document filters and selectors

use serde::{Deserialize, Serialize};

/// Language identifier for Python documents
pub const PYTHON_LANGUAGE: &str = "python";

/// Filters the documents a registration applies to
///
/// A filter matches when every populated field matches the document. An
/// empty filter matches everything; registries may reject it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Language identifier, e.g. `"python"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// URI scheme, e.g. `"file"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Glob pattern over the resource path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A registration applies to documents matching any filter in the selector
pub type DocumentSelector = Vec<DocumentFilter>;

/// Selector covering Python documents on any scheme
///
/// This is the one selector every pyintel capability registers against, so
/// registrations with the same selector target the same document set.
pub fn python_selector() -> DocumentSelector {
    vec![DocumentFilter {
        language: Some(PYTHON_LANGUAGE.to_string()),
        scheme: None,
        pattern: None,
    }]
}
