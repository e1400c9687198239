//! Evidence module - sources backing statements

use serde::{Deserialize, Serialize};

/// A piece of evidence attached to an argument map
///
/// Credibility is carried as an opaque rating; this core only parses it,
/// it never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Document-scoped identifier
    pub external_id: String,

    /// Short label for the source; required in the wire format
    pub title: String,

    /// Kind of source (article, study, testimony, ...)
    pub source_type: String,

    /// Name of the publication or author
    pub source_name: String,

    /// Where the source can be found
    pub url: String,

    /// Free-form description
    pub description: String,

    /// Numeric credibility rating; `None` when absent or unparsable
    pub credibility_rating: Option<f64>,
}

impl EvidenceRecord {
    /// Create a record with only the required fields populated
    pub fn new(external_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            title: title.into(),
            source_type: String::new(),
            source_name: String::new(),
            url: String::new(),
            description: String::new(),
            credibility_rating: None,
        }
    }
}
