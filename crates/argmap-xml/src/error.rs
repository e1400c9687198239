//! Error types for the XML layer

use thiserror::Error;

/// Errors that can occur while parsing a document
#[derive(Error, Debug)]
pub enum XmlError {
    /// The text is not well-formed XML
    #[error("XML syntax error (line {line}, column {column}): {message}")]
    Syntax {
        /// 1-based line of the offending position
        line: u32,
        /// 1-based byte column of the offending position
        column: u32,
        /// Parser message
        message: String,
    },

    /// The text contained no root element
    #[error("document contains no root element")]
    Empty,
}

impl XmlError {
    /// Build a syntax error located at a byte offset into `source`
    pub(crate) fn syntax_at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = crate::document::line_col(source, offset);
        XmlError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }
}
