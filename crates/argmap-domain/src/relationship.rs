//! Relationship module - the directed edges of the argument graph

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of relationship between statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// The `from` statement supports the `to` statement
    Support,

    /// The `from` statement opposes the `to` statement
    Oppose,
}

impl RelationType {
    /// Get the type name as it appears in the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Support => "support",
            RelationType::Oppose => "oppose",
        }
    }

    /// Parse a relation type from its wire-format name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "support" => Some(RelationType::Support),
            "oppose" => Some(RelationType::Oppose),
            _ => None,
        }
    }

    /// Whether edges of this type contribute to the statement hierarchy
    ///
    /// Only `support` edges shape paths and depths; `oppose` edges are
    /// recorded but never affect the tree.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, RelationType::Support)
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive a stable convergence-group id from a user-supplied group token
///
/// The id is content-addressed (UUIDv5 over the DNS namespace), so the same
/// token always yields the same id, within and across documents.
pub fn convergence_group_id(token: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, token.as_bytes())
}

/// A directed edge between two statements
///
/// `from_id` and `to_id` are external statement ids as they appeared in the
/// source document; extraction does not require them to resolve, and
/// hierarchy assignment silently ignores edges whose endpoints are unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// External id of the source statement
    pub from_id: String,

    /// External id of the target statement
    pub to_id: String,

    /// Support or oppose
    pub relation_type: RelationType,

    /// Stable id shared by premises converging on the same conclusion
    pub convergence_group_id: Option<Uuid>,

    /// Relationship strength; semantics live outside this core
    pub strength: Option<f64>,
}

impl RelationshipEdge {
    /// Create a new edge with no group or strength
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        relation_type: RelationType,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            relation_type,
            convergence_group_id: None,
            strength: None,
        }
    }

    /// Attach a convergence group derived from the given token
    pub fn with_group_token(mut self, token: &str) -> Self {
        self.convergence_group_id = Some(convergence_group_id(token));
        self
    }

    /// Attach a strength value
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }
}
