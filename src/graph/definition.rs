//! Declarative tree definition consumed by `SkillGraph::build`
//!
//! Definitions arrive from an external loader as JSON or TOML; both
//! forms share the same camelCase schema.

use crate::core::error::ConfigError;
use crate::core::types::SkillId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_max_points() -> u32 {
    1
}

fn default_num_portraits() -> u32 {
    1
}

fn default_points_per_level() -> u32 {
    crate::stats::DEFAULT_POINTS_PER_LEVEL
}

/// One stat bonus entry in a skill definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatBonusDef {
    pub title: String,
    pub value: f32,
}

/// Declarative description of a single skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDefinition {
    pub id: SkillId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_max_points")]
    pub max_points: u32,
    #[serde(default)]
    pub depends_on: Vec<SkillId>,
    #[serde(default)]
    pub stats: Vec<StatBonusDef>,
    #[serde(default)]
    pub talents: Vec<String>,
    #[serde(default)]
    pub rank_descriptions: Vec<String>,
    #[serde(default)]
    pub icon: String,
    /// Starting allocation, for definitions that restore a saved build
    #[serde(default)]
    pub points: u32,
}

/// Top-level definition: the full skill set plus character defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDefinition {
    #[serde(default = "default_num_portraits")]
    pub num_portraits: u32,
    #[serde(default)]
    pub default_stats: BTreeMap<String, f32>,
    /// Allocation points required per derived level
    #[serde(default = "default_points_per_level")]
    pub points_per_level: u32,
    pub skills: Vec<SkillDefinition>,
}

impl TreeDefinition {
    /// Parse a definition from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a definition from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a definition file, dispatching on the extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
