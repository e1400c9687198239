//! Statement module - the nodes of the argument graph

use serde::{Deserialize, Serialize};

/// Kind of statement in an argument map
///
/// The four kinds share identical structure; the type only records the
/// rhetorical role a statement plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementType {
    /// A supporting reason offered for some other statement
    Premise,

    /// A claim the document argues for
    Conclusion,

    /// An objection raised against a statement
    Rebuttal,

    /// A competing conclusion opposed to the main one
    CounterConclusion,
}

impl StatementType {
    /// All statement kinds, in the order they are extracted from a document
    pub const ALL: [StatementType; 4] = [
        StatementType::Premise,
        StatementType::Conclusion,
        StatementType::Rebuttal,
        StatementType::CounterConclusion,
    ];

    /// Get the type name as it appears in the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementType::Premise => "premise",
            StatementType::Conclusion => "conclusion",
            StatementType::Rebuttal => "rebuttal",
            StatementType::CounterConclusion => "counter_conclusion",
        }
    }

    /// Parse a statement type from its wire-format name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "premise" => Some(StatementType::Premise),
            "conclusion" => Some(StatementType::Conclusion),
            "rebuttal" => Some(StatementType::Rebuttal),
            "counter_conclusion" => Some(StatementType::CounterConclusion),
            _ => None,
        }
    }
}

impl std::str::FromStr for StatementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid statement type: {}", s))
    }
}

impl std::fmt::Display for StatementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statement node in the argument graph
///
/// `path` and `depth` are absent until hierarchy assignment runs; once a
/// parse completes, every emitted statement carries both. `path` is a
/// dot-delimited materialized path of sanitized labels suitable for a
/// label-tree column, enabling ancestor/descendant queries without graph
/// traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementNode {
    /// Document-scoped identifier; never empty in extracted output
    pub external_id: String,

    /// Statement text (may be empty at extraction time)
    pub text: String,

    /// Rhetorical role of the statement
    pub statement_type: StatementType,

    /// Materialized path from a root to this node, assigned by normalization
    pub path: Option<String>,

    /// Distance from the root of this node's tree
    pub depth: u32,
}

impl StatementNode {
    /// Create a new statement with no path assigned yet
    pub fn new(
        external_id: impl Into<String>,
        text: impl Into<String>,
        statement_type: StatementType,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            text: text.into(),
            statement_type,
            path: None,
            depth: 0,
        }
    }
}
