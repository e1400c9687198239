//! Two-stage document validation

use crate::config::ValidatorConfig;
use crate::rules::RuleSchema;
use crate::structure::StructuralSchema;
use crate::ValidatorError;
use argmap_xml::Document;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of validating one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff no diagnostics were produced
    pub is_valid: bool,

    /// Ordered diagnostics: syntax first, then structural (with
    /// line/column), then failed business assertions
    pub diagnostics: Vec<String>,
}

impl ValidationResult {
    fn from_diagnostics(diagnostics: Vec<String>) -> Self {
        Self {
            is_valid: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

/// The SchemaValidator decides whether a document may proceed to
/// extraction, and explains why not
///
/// Both schema artifacts are loaded and compiled at construction; failure
/// there is fatal and the validator is never handed out. After
/// construction the validator holds no mutable state and can be shared
/// freely across threads.
#[derive(Debug)]
pub struct SchemaValidator {
    structure: StructuralSchema,
    rules: RuleSchema,
}

/// Canonical structural schema shipped with the crate
const BUILTIN_STRUCTURE: &str = include_str!("../schemas/argument_map.structure.toml");

/// Canonical business-rule schema shipped with the crate
const BUILTIN_RULES: &str = include_str!("../schemas/business_rules.toml");

impl SchemaValidator {
    /// Construct a validator from the artifacts at the configured paths
    pub fn new(config: &ValidatorConfig) -> Result<Self, ValidatorError> {
        let structure = Self::read_artifact(&config.structure_path)?;
        let rules = Self::read_artifact(&config.rules_path)?;
        let validator = Self::from_artifacts(
            &structure,
            &config.structure_path.display().to_string(),
            &rules,
            &config.rules_path.display().to_string(),
        )?;
        info!(
            structure = %config.structure_path.display(),
            rules = %config.rules_path.display(),
            "schema artifacts loaded"
        );
        Ok(validator)
    }

    /// Construct a validator from the artifacts embedded in this crate
    pub fn builtin() -> Result<Self, ValidatorError> {
        Self::from_artifacts(
            BUILTIN_STRUCTURE,
            "builtin argument_map.structure.toml",
            BUILTIN_RULES,
            "builtin business_rules.toml",
        )
    }

    /// Construct a validator from artifact text already in memory
    pub fn from_artifacts(
        structure_toml: &str,
        structure_label: &str,
        rules_toml: &str,
        rules_label: &str,
    ) -> Result<Self, ValidatorError> {
        let structure = StructuralSchema::compile(structure_toml, structure_label)?;
        let rules = RuleSchema::compile(rules_toml, rules_label)?;
        debug!(
            elements = structure.elements.len(),
            rules = rules.rules.len(),
            "schema artifacts compiled"
        );
        Ok(Self { structure, rules })
    }

    fn read_artifact(path: &Path) -> Result<String, ValidatorError> {
        std::fs::read_to_string(path).map_err(|source| ValidatorError::SchemaIo {
            artifact: path.display().to_string(),
            source,
        })
    }

    /// Namespace URI the structural schema expects
    pub fn namespace(&self) -> &str {
        &self.structure.namespace
    }

    /// Validate raw XML text
    ///
    /// On a syntax error the result carries that single diagnostic and
    /// nothing else; otherwise both validation stages run to completion so
    /// the caller sees every problem at once.
    pub fn validate(&self, xml_text: &str) -> ValidationResult {
        match Document::parse(xml_text) {
            Ok(doc) => self.validate_document(&doc),
            Err(e) => {
                warn!("document rejected before validation: {}", e);
                ValidationResult::from_diagnostics(vec![e.to_string()])
            }
        }
    }

    /// Validate an already-parsed document
    ///
    /// The structural pass does not short-circuit the business-rule pass;
    /// diagnostics from both stages are aggregated in order.
    pub fn validate_document(&self, doc: &Document) -> ValidationResult {
        let mut diagnostics = self.structure.check(doc);
        if !diagnostics.is_empty() {
            debug!(count = diagnostics.len(), "structural validation failed");
        }

        let rule_diagnostics = self.rules.check(doc, &self.structure.namespace);
        if !rule_diagnostics.is_empty() {
            debug!(count = rule_diagnostics.len(), "business-rule validation failed");
        }
        diagnostics.extend(rule_diagnostics);

        if diagnostics.is_empty() {
            info!("document validation successful");
        } else {
            warn!(count = diagnostics.len(), "document validation failed");
        }
        ValidationResult::from_diagnostics(diagnostics)
    }
}
