//! Business-rule schema: declarative cross-element assertions
//!
//! Rules express what a structurally sound document must additionally
//! satisfy to be meaningful: unique ids, resolvable relationship
//! endpoints, non-empty statement text. Each rule is data — an assertion
//! kind plus parameters and a message — so the rule set can evolve
//! without touching code.

use crate::ValidatorError;
use argmap_xml::{Document, Element};
use serde::Deserialize;
use std::collections::HashSet;

/// Declarative business-rule schema, loaded from a TOML artifact
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSchema {
    /// Artifact format version
    pub version: u32,

    /// Rules in evaluation order
    #[serde(default, rename = "rule")]
    pub rules: Vec<Rule>,
}

/// One business rule
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    /// Stable rule identifier, for artifact maintenance
    pub id: String,

    /// Natural-language assertion text; the lead of every diagnostic this
    /// rule emits
    pub message: String,

    /// The assertion to evaluate
    #[serde(rename = "assert")]
    pub assertion: Assertion,
}

/// Assertion kinds the rules engine can evaluate
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assertion {
    /// An attribute's values must be unique across the named elements
    UniqueAttribute {
        /// Local names of the elements to inspect
        elements: Vec<String>,
        /// Attribute whose values must not repeat
        attribute: String,
    },

    /// Attribute values must match some target element's attribute value
    AttributeReferences {
        /// Local names of the referring elements
        elements: Vec<String>,
        /// Referring attributes (each checked independently)
        attributes: Vec<String>,
        /// Local names of the elements that define valid targets
        targets: Vec<String>,
        /// Attribute on target elements that defines the id space
        target_attribute: String,
    },

    /// The named elements must have non-empty text content
    NonEmptyText {
        /// Local names of the elements to inspect
        elements: Vec<String>,
    },
}

impl RuleSchema {
    /// Parse and compile an artifact from TOML text
    pub fn compile(toml_text: &str, artifact: &str) -> Result<Self, ValidatorError> {
        let schema: RuleSchema =
            toml::from_str(toml_text).map_err(|e| ValidatorError::SchemaParse {
                artifact: artifact.to_string(),
                message: e.to_string(),
            })?;

        let compile_err = |message: String| ValidatorError::SchemaCompile {
            artifact: artifact.to_string(),
            message,
        };

        if schema.version != 1 {
            return Err(compile_err(format!(
                "unsupported artifact version {}",
                schema.version
            )));
        }
        for rule in &schema.rules {
            if rule.message.trim().is_empty() {
                return Err(compile_err(format!("rule '{}' has an empty message", rule.id)));
            }
            let empty = match &rule.assertion {
                Assertion::UniqueAttribute { elements, attribute } => {
                    elements.is_empty() || attribute.is_empty()
                }
                Assertion::AttributeReferences {
                    elements,
                    attributes,
                    targets,
                    target_attribute,
                } => {
                    elements.is_empty()
                        || attributes.is_empty()
                        || targets.is_empty()
                        || target_attribute.is_empty()
                }
                Assertion::NonEmptyText { elements } => elements.is_empty(),
            };
            if empty {
                return Err(compile_err(format!(
                    "rule '{}' has an incomplete assertion",
                    rule.id
                )));
            }
        }

        Ok(schema)
    }

    /// Evaluate every rule over a document
    ///
    /// `namespace` is the expected namespace URI for element matching.
    /// Diagnostics are ordered by rule, then by document order of the
    /// offending element.
    pub fn check(&self, doc: &Document, namespace: &str) -> Vec<String> {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            rule.check(doc, namespace, &mut diagnostics);
        }
        diagnostics
    }
}

impl Rule {
    fn check(&self, doc: &Document, namespace: &str, diagnostics: &mut Vec<String>) {
        match &self.assertion {
            Assertion::UniqueAttribute { elements, attribute } => {
                let mut seen = HashSet::new();
                for elem in matching(doc, namespace, elements) {
                    if let Some(value) = elem.attribute(attribute) {
                        if !seen.insert(value.to_string()) {
                            diagnostics
                                .push(format!("{}: duplicate value '{}'", self.message, value));
                        }
                    }
                }
            }
            Assertion::AttributeReferences {
                elements,
                attributes,
                targets,
                target_attribute,
            } => {
                let known: HashSet<&str> = matching(doc, namespace, targets)
                    .filter_map(|t| t.attribute(target_attribute))
                    .collect();
                for elem in matching(doc, namespace, elements) {
                    for attribute in attributes {
                        if let Some(value) = elem.attribute(attribute) {
                            if !known.contains(value) {
                                diagnostics.push(format!(
                                    "{}: unknown reference '{}'",
                                    self.message, value
                                ));
                            }
                        }
                    }
                }
            }
            Assertion::NonEmptyText { elements } => {
                for elem in matching(doc, namespace, elements) {
                    if elem.text().is_empty() {
                        let label = elem.attribute("id").unwrap_or_else(|| elem.name());
                        diagnostics.push(format!("{}: '{}' has no text", self.message, label));
                    }
                }
            }
        }
    }
}

/// Document-order iterator over descendants matching any of the names
fn matching<'a>(
    doc: &'a Document,
    namespace: &'a str,
    names: &'a [String],
) -> impl Iterator<Item = &'a Element> {
    doc.root()
        .descendants()
        .filter(move |e| names.iter().any(|n| e.is(namespace, n)))
}
