//! Argmap XML Layer
//!
//! Namespace-aware XML documents for the validation and normalization
//! pipeline.
//!
//! # Overview
//!
//! Parses a UTF-8 XML string into an owned element tree. Every element
//! carries its resolved namespace URI (matching is URI-based, never
//! prefix-based) and the byte offset of its start tag, convertible to a
//! line/column pair for diagnostics.
//!
//! Elements under a default namespace, a prefixed namespace, or no
//! namespace at all are all representable; lookup helpers accept an
//! expected namespace URI and tolerate elements that carry none.
//!
//! # Examples
//!
//! ```
//! use argmap_xml::Document;
//!
//! let doc = Document::parse(r#"<m:map xmlns:m="urn:maps"><m:title>T</m:title></m:map>"#)?;
//! let title = doc.root().find_text("urn:maps", "title");
//! assert_eq!(title, Some("T"));
//! # Ok::<(), argmap_xml::XmlError>(())
//! ```

#![warn(missing_docs)]

mod document;
mod error;

pub use document::{Document, Element};
pub use error::XmlError;
