//! Argmap Ingest
//!
//! Composes the two pipeline stages and the storage collaborator.
//!
//! # Overview
//!
//! ```text
//! XML text → SchemaValidator → GraphNormalizer → MapStore
//! ```
//!
//! A document that fails validation is rejected before extraction with the
//! complete diagnostics list, so callers can fix every problem in one
//! round trip. Accepted documents are normalized and handed to the store.
//!
//! # Examples
//!
//! ```
//! use argmap_ingest::{IngestPipeline, MemoryStore};
//! use argmap_normalizer::GraphNormalizer;
//! use argmap_validator::SchemaValidator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = IngestPipeline::new(
//!     SchemaValidator::builtin()?,
//!     GraphNormalizer::default_config(),
//!     MemoryStore::new(),
//! );
//!
//! let err = pipeline.ingest("<unclosed").unwrap_err();
//! assert_eq!(err.diagnostics().unwrap().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod pipeline;
mod store;

pub use error::IngestError;
pub use pipeline::{IngestOutcome, IngestPipeline};
pub use store::MemoryStore;
