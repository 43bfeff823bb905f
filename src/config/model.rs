//! Config struct definition and default implementation.

use crate::agent::Execution;
use crate::schedule::{DEFAULT_SPRINT_LENGTH, DEFAULT_TOTAL_DAYS};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "flowgen.yaml";

/// Configuration for flowgen.
///
/// This struct represents the contents of `flowgen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Template settings
    // =========================================================================
    /// Directory templates are loaded from (default: "templates").
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// File name globs selecting templates inside `template_dir`.
    #[serde(default = "default_template_globs")]
    pub template_globs: Vec<String>,

    // =========================================================================
    // Schedule settings
    // =========================================================================
    /// Project length in days used when none is given.
    #[serde(default = "default_total_days")]
    pub total_days: u32,

    /// Sprint length in days used when none is given.
    #[serde(default = "default_sprint_length")]
    pub sprint_length: u32,

    // =========================================================================
    // Agent settings
    // =========================================================================
    /// Execution block written into generated agent configs.
    #[serde(default)]
    pub execution: Execution,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            template_globs: default_template_globs(),
            total_days: default_total_days(),
            sprint_length: default_sprint_length(),
            execution: Execution::default(),
        }
    }
}

fn default_template_dir() -> String {
    "templates".to_string()
}

/// Default template file globs.
pub fn default_template_globs() -> Vec<String> {
    vec![
        "*.json".to_string(),
        "*.yaml".to_string(),
        "*.yml".to_string(),
    ]
}

fn default_total_days() -> u32 {
    DEFAULT_TOTAL_DAYS
}

fn default_sprint_length() -> u32 {
    DEFAULT_SPRINT_LENGTH
}
