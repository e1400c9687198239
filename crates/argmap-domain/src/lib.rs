//! Argmap Domain Layer
//!
//! This crate contains the domain model for argument maps: the statement,
//! relationship, and evidence records extracted from a document, the
//! normalized `ArgumentMap` output record, and the trait interface to the
//! external persistence collaborator.
//!
//! ## Key Concepts
//!
//! - **StatementNode**: A claim in the argument graph, labeled with a
//!   materialized path and depth once normalization completes
//! - **RelationshipEdge**: A directed support/oppose edge between statements
//! - **EvidenceRecord**: A source backing one or more statements
//! - **ArgumentMap**: The normalized record handed to storage
//!
//! ## Architecture
//!
//! This crate holds pure data and business rules only. Parsing lives in
//! `argmap-xml`/`argmap-normalizer`, validation in `argmap-validator`, and
//! storage behind the `MapStore` trait defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Namespace URI of the argument-map wire format
///
/// Matching elsewhere in the workspace is URI-based, so documents may bind
/// this URI to any prefix (or use it as the default namespace).
pub const ARGUMENT_MAP_NS: &str = "http://example.com/argument_map";

pub mod evidence;
pub mod map;
pub mod relationship;
pub mod statement;
pub mod traits;

// Re-exports for convenience
pub use evidence::EvidenceRecord;
pub use map::{ArgumentMap, MapId};
pub use relationship::{convergence_group_id, RelationType, RelationshipEdge};
pub use statement::{StatementNode, StatementType};
