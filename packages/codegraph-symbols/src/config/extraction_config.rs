//! Extraction configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides};
use super::preset::Preset;

/// Default match budget per file
pub const DEFAULT_MAX_QUERY_MATCHES: usize = 100_000;

const MAX_QUERY_MATCHES_LIMIT: usize = 10_000_000;
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Options recognized by the extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Emit underscore-prefixed / unexported symbols
    pub include_private: bool,

    /// Query matches visited per file before the catalog is truncated
    pub max_query_matches: usize,

    /// Fail the file on duplicate qualified paths instead of warning
    pub strict_duplicate_policy: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::preset(Preset::Balanced)
    }
}

impl ExtractionConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Balanced => Self {
                include_private: true,
                max_query_matches: DEFAULT_MAX_QUERY_MATCHES,
                strict_duplicate_policy: false,
            },
            Preset::Strict => Self {
                include_private: true,
                max_query_matches: DEFAULT_MAX_QUERY_MATCHES,
                strict_duplicate_policy: true,
            },
            Preset::PublicApi => Self {
                include_private: false,
                max_query_matches: DEFAULT_MAX_QUERY_MATCHES,
                strict_duplicate_policy: false,
            },
        }
    }

    pub fn with_include_private(mut self, enabled: bool) -> Self {
        self.include_private = enabled;
        self
    }

    pub fn with_max_query_matches(mut self, budget: usize) -> Self {
        self.max_query_matches = budget;
        self
    }

    pub fn with_strict_duplicate_policy(mut self, enabled: bool) -> Self {
        self.strict_duplicate_policy = enabled;
        self
    }

    /// Range-check every field
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_query_matches == 0 || self.max_query_matches > MAX_QUERY_MATCHES_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_query_matches",
                self.max_query_matches,
                (1, MAX_QUERY_MATCHES_LIMIT),
                "0 truncates every file",
            ));
        }
        Ok(())
    }

    fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(include_private) = overrides.include_private {
            self.include_private = include_private;
        }
        if let Some(budget) = overrides.max_query_matches {
            self.max_query_matches = budget;
        }
        if let Some(strict) = overrides.strict_duplicate_policy {
            self.strict_duplicate_policy = strict;
        }
    }

    /// Load and validate a versioned YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&export.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = export.preset.parse()?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = &export.overrides {
            config.apply(overrides);
        }
        config.validate()?;
        Ok(config)
    }

    /// Serialize as a v1 document (preset `balanced` plus explicit overrides)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            preset: Preset::Balanced.as_str().to_string(),
            overrides: Some(ConfigOverrides {
                include_private: Some(self.include_private),
                max_query_matches: Some(self.max_query_matches),
                strict_duplicate_policy: Some(self.strict_duplicate_policy),
            }),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}
