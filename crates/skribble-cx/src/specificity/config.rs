//! Loading specificity tables from JSON or YAML configuration.
//!
//! A config document carries a single `specificity` map from parent group
//! to the list of groups it subsumes:
//!
//! ```yaml
//! specificity:
//!   p: [px, py, pt, pr, pl, pb]
//!   px: [pl, pr]
//! ```
//!
//! A document without a `specificity` key yields an empty table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::registry::SpecificityRegistry;
use crate::error::RegistryError;

/// Deserialized form of a specificity config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificityConfig {
    #[serde(default)]
    pub specificity: BTreeMap<String, Vec<String>>,
}

impl SpecificityConfig {
    /// Parses a config document from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(source).map_err(|e| RegistryError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a config document from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, RegistryError> {
        serde_yaml::from_str(source).map_err(|e| RegistryError::Parse {
            message: e.to_string(),
        })
    }

    /// Validates the mapping and builds a registry from it.
    pub fn into_registry(self) -> Result<SpecificityRegistry, RegistryError> {
        SpecificityRegistry::from_mapping(self.specificity)
    }
}

impl From<&SpecificityRegistry> for SpecificityConfig {
    fn from(registry: &SpecificityRegistry) -> Self {
        Self {
            specificity: registry.to_mapping(),
        }
    }
}

impl SpecificityRegistry {
    /// Builds a registry from a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON and
    /// [`RegistryError::InvalidMapping`] for a direct cycle.
    pub fn from_json_str(source: &str) -> Result<Self, RegistryError> {
        SpecificityConfig::from_json_str(source)?.into_registry()
    }

    /// Builds a registry from a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed YAML and
    /// [`RegistryError::InvalidMapping`] for a direct cycle.
    pub fn from_yaml_str(source: &str) -> Result<Self, RegistryError> {
        SpecificityConfig::from_yaml_str(source)?.into_registry()
    }
}
