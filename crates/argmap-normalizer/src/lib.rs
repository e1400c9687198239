//! Argmap Normalizer
//!
//! Converts validated argument-map documents into structured records with
//! a deterministic hierarchical labeling.
//!
//! # Overview
//!
//! The normalizer walks a parsed document once per entity category —
//! statements, relationships, evidence — applying drop-and-warn tolerance
//! to records missing required fields, then folds the `support` edge set
//! into a materialized-path labeling: every statement receives a
//! dot-delimited path and an integer depth suitable for a label-tree
//! column, so ancestor/descendant queries need no graph traversal.
//!
//! # Architecture
//!
//! ```text
//! XML text → SchemaValidator → GraphNormalizer → ArgumentMap → MapStore
//! ```
//!
//! # Determinism
//!
//! Traversal is breadth-first with roots in document order and children in
//! sorted-id order. Convergent support (one statement supporting two
//! parents) is linearized first-discovery-wins: a documented contract of
//! the labeling, not a traversal accident. Statements unreachable from any
//! root — isolated nodes, or cycles with no external entry — get their own
//! sanitized id as a self-path at depth 0.
//!
//! # Examples
//!
//! ```
//! use argmap_normalizer::GraphNormalizer;
//!
//! let xml = r#"
//!     <argument_map xmlns="http://example.com/argument_map">
//!         <title>Example</title>
//!         <statements>
//!             <premise id="p1">Premise</premise>
//!             <conclusion id="c1">Conclusion</conclusion>
//!         </statements>
//!         <relationships>
//!             <support from="p1" to="c1"/>
//!         </relationships>
//!     </argument_map>
//! "#;
//!
//! let map = GraphNormalizer::default_config().parse_str(xml)?;
//! assert_eq!(map.statement("p1").unwrap().path.as_deref(), Some("c1.p1"));
//! assert_eq!(map.statement("c1").unwrap().depth, 0);
//! # Ok::<(), argmap_normalizer::NormalizerError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod hierarchy;
mod normalizer;

pub use config::NormalizerConfig;
pub use error::NormalizerError;
pub use hierarchy::{assign_paths_and_depths, LabelAllocator};
pub use normalizer::GraphNormalizer;
