//! The validate → normalize → store pipeline

use crate::IngestError;
use argmap_domain::traits::MapStore;
use argmap_domain::MapId;
use argmap_normalizer::GraphNormalizer;
use argmap_validator::{SchemaValidator, ValidationResult};
use argmap_xml::Document;
use tracing::{info, warn};

/// Summary of one successful ingestion
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    /// Id the store assigned to the new map
    pub map_id: MapId,

    /// Title of the ingested map
    pub title: String,

    /// Number of statements persisted
    pub statement_count: usize,

    /// Number of relationships persisted
    pub relationship_count: usize,

    /// Number of evidence records persisted
    pub evidence_count: usize,
}

/// Composes the validator, the normalizer, and a storage collaborator
///
/// Control flow per document: reject early on any validation failure
/// (carrying the complete diagnostics list), normalize, then hand the
/// record to the store. The document text is parsed exactly once.
pub struct IngestPipeline<S: MapStore> {
    validator: SchemaValidator,
    normalizer: GraphNormalizer,
    store: S,
}

impl<S> IngestPipeline<S>
where
    S: MapStore,
    S::Error: std::fmt::Display,
{
    /// Create a pipeline from its three collaborators
    pub fn new(validator: SchemaValidator, normalizer: GraphNormalizer, store: S) -> Self {
        Self {
            validator,
            normalizer,
            store,
        }
    }

    /// Ingest one raw XML document
    pub fn ingest(&mut self, xml_text: &str) -> Result<IngestOutcome, IngestError> {
        let doc = match Document::parse(xml_text) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("document rejected before validation: {}", e);
                return Err(IngestError::Rejected(ValidationResult {
                    is_valid: false,
                    diagnostics: vec![e.to_string()],
                }));
            }
        };

        let report = self.validator.validate_document(&doc);
        if !report.is_valid {
            return Err(IngestError::Rejected(report));
        }

        let map = self.normalizer.parse(&doc);
        let outcome_stub = (
            map.title.clone(),
            map.statement_count(),
            map.relationship_count(),
            map.evidence.len(),
        );

        let map_id = self
            .store
            .create_map(map)
            .map_err(|e| IngestError::Store(e.to_string()))?;

        let (title, statement_count, relationship_count, evidence_count) = outcome_stub;
        info!(%map_id, statements = statement_count, "argument map ingested");
        Ok(IngestOutcome {
            map_id,
            title,
            statement_count,
            relationship_count,
            evidence_count,
        })
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
