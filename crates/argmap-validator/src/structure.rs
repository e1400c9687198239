//! Structural schema: declarative element/attribute shape
//!
//! The artifact answers "is this document the right shape" — permitted
//! elements, their attributes, and child cardinality. Cross-element
//! constraints live in the business-rule artifact.

use crate::ValidatorError;
use argmap_xml::{Document, Element};
use serde::Deserialize;
use std::collections::HashMap;

/// Declarative structural schema, loaded from a TOML artifact
#[derive(Debug, Clone, Deserialize)]
pub struct StructuralSchema {
    /// Artifact format version
    pub version: u32,

    /// Namespace URI every element is expected to live in (elements
    /// carrying no namespace are tolerated)
    pub namespace: String,

    /// Local name of the required root element
    pub root: String,

    /// Declarations for every permitted element
    #[serde(rename = "element")]
    pub elements: Vec<ElementDecl>,
}

/// Shape of one permitted element
#[derive(Debug, Clone, Deserialize)]
pub struct ElementDecl {
    /// Local element name
    pub name: String,

    /// Permitted attributes
    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,

    /// Permitted child elements with cardinality
    #[serde(default)]
    pub children: Vec<ChildDecl>,
}

/// One permitted attribute
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDecl {
    /// Attribute name
    pub name: String,

    /// Whether the attribute must be present
    #[serde(default)]
    pub required: bool,
}

/// Cardinality of one permitted child element
#[derive(Debug, Clone, Deserialize)]
pub struct ChildDecl {
    /// Local name of the child; must have its own [`ElementDecl`]
    pub name: String,

    /// Minimum number of occurrences
    #[serde(default)]
    pub min: u32,

    /// Maximum number of occurrences; unbounded when absent
    #[serde(default)]
    pub max: Option<u32>,
}

impl StructuralSchema {
    /// Parse and compile an artifact from TOML text
    ///
    /// Compilation cross-checks the artifact: the root and every child
    /// reference must have a declaration. Failure here is startup-fatal.
    pub fn compile(toml_text: &str, artifact: &str) -> Result<Self, ValidatorError> {
        let schema: StructuralSchema =
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

        let mut names = HashMap::new();
        for decl in &schema.elements {
            if names.insert(decl.name.as_str(), decl).is_some() {
                return Err(compile_err(format!(
                    "element '{}' is declared twice",
                    decl.name
                )));
            }
        }
        if !names.contains_key(schema.root.as_str()) {
            return Err(compile_err(format!(
                "root element '{}' has no declaration",
                schema.root
            )));
        }
        for decl in &schema.elements {
            for child in &decl.children {
                if !names.contains_key(child.name.as_str()) {
                    return Err(compile_err(format!(
                        "child '{}' of '{}' has no declaration",
                        child.name, decl.name
                    )));
                }
                if child.max.is_some_and(|max| max < child.min) {
                    return Err(compile_err(format!(
                        "child '{}' of '{}' has max < min",
                        child.name, decl.name
                    )));
                }
            }
        }

        Ok(schema)
    }

    /// Run the structural pass over a document
    ///
    /// Returns one diagnostic per violation, each positioned at the
    /// offending element's start tag. Never short-circuits.
    pub fn check(&self, doc: &Document) -> Vec<String> {
        let mut diagnostics = Vec::new();
        let root = doc.root();

        if root.name() != self.root {
            diagnostics.push(self.diagnostic(
                doc,
                root,
                format!(
                    "unexpected root element '{}' (expected '{}')",
                    root.name(),
                    self.root
                ),
            ));
            // Nothing below the root can be interpreted against the schema
            return diagnostics;
        }
        if let Some(ns) = root.namespace() {
            if ns != self.namespace {
                diagnostics.push(self.diagnostic(
                    doc,
                    root,
                    format!("root element is in unexpected namespace '{}'", ns),
                ));
                return diagnostics;
            }
        }

        self.check_element(doc, root, &mut diagnostics);
        diagnostics
    }

    fn check_element(&self, doc: &Document, element: &Element, diagnostics: &mut Vec<String>) {
        let Some(decl) = self.decl(element.name()) else {
            // Unexpected elements are reported at their parent; nothing
            // more to say about their insides
            return;
        };

        for attr in &decl.attributes {
            if attr.required && element.attribute(&attr.name).is_none() {
                diagnostics.push(self.diagnostic(
                    doc,
                    element,
                    format!(
                        "element '{}' is missing required attribute '{}'",
                        element.name(),
                        attr.name
                    ),
                ));
            }
        }
        for (name, _) in element.attributes() {
            if !decl.attributes.iter().any(|a| a.name == name) {
                diagnostics.push(self.diagnostic(
                    doc,
                    element,
                    format!(
                        "element '{}' has unexpected attribute '{}'",
                        element.name(),
                        name
                    ),
                ));
            }
        }

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for child in element.children() {
            if let Some(ns) = child.namespace() {
                if ns != self.namespace {
                    diagnostics.push(self.diagnostic(
                        doc,
                        child,
                        format!("element '{}' is in unexpected namespace '{}'", child.name(), ns),
                    ));
                    continue;
                }
            }
            if decl.children.iter().any(|c| c.name == child.name()) {
                *counts.entry(child.name()).or_default() += 1;
                self.check_element(doc, child, diagnostics);
            } else {
                diagnostics.push(self.diagnostic(
                    doc,
                    child,
                    format!(
                        "unexpected element '{}' inside '{}'",
                        child.name(),
                        element.name()
                    ),
                ));
            }
        }

        for child in &decl.children {
            let count = counts.get(child.name.as_str()).copied().unwrap_or(0);
            if count < child.min {
                diagnostics.push(self.diagnostic(
                    doc,
                    element,
                    format!(
                        "element '{}' is missing required child '{}'",
                        element.name(),
                        child.name
                    ),
                ));
            }
            if child.max.is_some_and(|max| count > max) {
                diagnostics.push(self.diagnostic(
                    doc,
                    element,
                    format!(
                        "element '{}' has {} '{}' children (at most {} allowed)",
                        element.name(),
                        count,
                        child.name,
                        child.max.unwrap_or(0)
                    ),
                ));
            }
        }
    }

    fn decl(&self, name: &str) -> Option<&ElementDecl> {
        self.elements.iter().find(|d| d.name == name)
    }

    fn diagnostic(&self, doc: &Document, element: &Element, message: String) -> String {
        let (line, column) = doc.position(element.offset());
        format!("Structure error (line {}, column {}): {}", line, column, message)
    }
}
