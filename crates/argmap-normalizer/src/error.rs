//! Error types for the normalizer
//!
//! Individual malformed records never error; they are dropped with a
//! logged warning. A parse call fails only when the document itself
//! cannot be interpreted.

use thiserror::Error;

/// Errors that can occur during normalization
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// The input text could not be parsed as XML at all
    #[error("XML error: {0}")]
    Xml(#[from] argmap_xml::XmlError),
}
