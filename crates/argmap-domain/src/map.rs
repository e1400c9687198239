//! The normalized argument-map record and its identifier

use crate::{EvidenceRecord, RelationshipEdge, StatementNode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored argument map, based on UUIDv7
///
/// UUIDv7 provides chronological sortability and coordination-free
/// generation; the storage collaborator mints one per accepted map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MapId(u128);

impl MapId {
    /// Generate a new UUIDv7-based MapId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a MapId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for MapId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// The normalized output record for one document
///
/// This is what the pipeline hands to the persistence collaborator: field
/// names and shapes map directly onto a relational schema, with
/// `StatementNode::path` destined for a label-tree column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentMap {
    /// Map title from the document
    pub title: String,

    /// Optional description; empty when absent
    pub description: String,

    /// The raw XML the map was built from, carried through for auditing
    pub source_xml: String,

    /// Statements in document order, each with path and depth assigned
    pub statements: Vec<StatementNode>,

    /// Relationships in document order
    pub relationships: Vec<RelationshipEdge>,

    /// Evidence items in document order
    pub evidence: Vec<EvidenceRecord>,
}

impl ArgumentMap {
    /// Look up a statement by its external id
    pub fn statement(&self, external_id: &str) -> Option<&StatementNode> {
        self.statements.iter().find(|s| s.external_id == external_id)
    }

    /// Number of statements in the map
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    /// Number of relationships in the map
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
