//! Configuration I/O (YAML schema types)
//!
//! Loading and saving live in `extraction_config.rs`; this file only
//! defines the on-disk shape.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Field overrides applied on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_query_matches: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_duplicate_policy: Option<bool>,
}
