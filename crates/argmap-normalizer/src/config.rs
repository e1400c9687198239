//! Configuration for the normalizer

use argmap_domain::ARGUMENT_MAP_NS;
use serde::{Deserialize, Serialize};

/// Configuration for the GraphNormalizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Namespace URI statement, relationship, and evidence elements are
    /// expected to live in; elements carrying no namespace still match
    pub namespace: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            namespace: ARGUMENT_MAP_NS.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.namespace.trim().is_empty() {
            return Err("namespace must not be empty".to_string());
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
