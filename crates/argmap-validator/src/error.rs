//! Validator error types
//!
//! These errors only cover schema-artifact problems, which are fatal at
//! construction time. Problems with a candidate document are never errors;
//! they are diagnostics on the [`crate::ValidationResult`].

use thiserror::Error;

/// Errors that can occur while loading or compiling schema artifacts
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A schema artifact could not be read
    #[error("failed to read schema artifact '{artifact}': {source}")]
    SchemaIo {
        /// Path or label of the artifact
        artifact: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A schema artifact is not valid TOML for its expected shape
    #[error("failed to parse schema artifact '{artifact}': {message}")]
    SchemaParse {
        /// Path or label of the artifact
        artifact: String,
        /// Deserialization error text
        message: String,
    },

    /// A schema artifact parsed but is internally inconsistent
    #[error("schema artifact '{artifact}' failed to compile: {message}")]
    SchemaCompile {
        /// Path or label of the artifact
        artifact: String,
        /// What is inconsistent
        message: String,
    },
}
