use serde::{Deserialize, Serialize};

/// A single corpus document: an opaque URI-like identifier, the ordered terms
/// of its content, and the identifiers it links out to.
///
/// Documents are immutable for the lifetime of a ranking session; changing
/// the corpus means rebuilding the engines from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub uri: String,
    pub terms: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Document {
    pub fn new(
        uri: impl Into<String>,
        terms: Vec<String>,
        links: Vec<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            terms,
            links,
        }
    }
}
