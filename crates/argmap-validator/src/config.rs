//! Validator configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the schema validator
///
/// Points at the two schema artifacts. Both are loaded once at validator
/// construction and are read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Path to the structural schema artifact (element/attribute shape)
    pub structure_path: PathBuf,

    /// Path to the business-rule schema artifact (cross-element assertions)
    pub rules_path: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            structure_path: PathBuf::from("schemas/argument_map.structure.toml"),
            rules_path: PathBuf::from("schemas/business_rules.toml"),
        }
    }
}

impl ValidatorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.structure_path.as_os_str().is_empty() {
            return Err("structure_path must not be empty".to_string());
        }
        if self.rules_path.as_os_str().is_empty() {
            return Err("rules_path must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
