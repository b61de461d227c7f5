//! Named starting points for `ExtractionConfig`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Every symbol; duplicate paths are warnings
    #[default]
    Balanced,

    /// Every symbol; a duplicate path fails the file
    Strict,

    /// Exported symbols only; duplicate paths are warnings
    PublicApi,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Balanced, Preset::Strict, Preset::PublicApi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Strict => "strict",
            Self::PublicApi => "public_api",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    /// Case-insensitive; `public-api` is accepted for `public_api`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
