//! Loader configuration

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Options controlling document loading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Marker that splits the excerpt from the rest of the body
    pub excerpt_separator: String,

    /// Reading speed used when `timeToRead` is not declared
    pub words_per_minute: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            excerpt_separator: "<!-- more -->".to_string(),
            words_per_minute: 200,
        }
    }
}

impl LoadConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, LoadError> {
        serde_yaml::from_str(text).map_err(|e| LoadError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
