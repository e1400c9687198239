//! Argmap Validator
//!
//! Two-stage schema validation for argument-map documents.
//!
//! # Overview
//!
//! A candidate document passes through two declarative schemas before the
//! normalizer is allowed to touch it:
//!
//! 1. **Structural schema** — permitted element/attribute shape and child
//!    cardinality, checked with line/column diagnostics.
//! 2. **Business-rule schema** — cross-element assertions (unique ids,
//!    resolvable relationship endpoints, non-empty statement text).
//!
//! Both stages run to completion and their diagnostics are aggregated, so
//! callers get one complete error report instead of a fix-one-resubmit
//! loop. Both schemas are versioned TOML artifacts loaded at construction;
//! failure to load or compile them is a startup error, never a
//! per-document one.
//!
//! # Examples
//!
//! ```
//! use argmap_validator::SchemaValidator;
//!
//! let validator = SchemaValidator::builtin()?;
//! let result = validator.validate("<oops");
//! assert!(!result.is_valid);
//! assert_eq!(result.diagnostics.len(), 1);
//! # Ok::<(), argmap_validator::ValidatorError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod rules;
mod structure;
mod validator;

pub use config::ValidatorConfig;
pub use error::ValidatorError;
pub use rules::{Assertion, Rule, RuleSchema};
pub use structure::{AttributeDecl, ChildDecl, ElementDecl, StructuralSchema};
pub use validator::{SchemaValidator, ValidationResult};
