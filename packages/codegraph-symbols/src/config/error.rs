//! Configuration errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric option outside its accepted range
    #[error("{field} = {value} is outside {min}..={max} ({hint})")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
        hint: &'static str,
    },

    #[error("config schema version {found} is not supported (expected one of {supported:?})")]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    #[error("unknown preset '{0}' (expected balanced, strict or public_api)")]
    UnknownPreset(String),

    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Range violation with a remedy for the user
    pub fn range_with_hint(
        field: &'static str,
        value: usize,
        (min, max): (usize, usize),
        hint: &'static str,
    ) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
            hint,
        }
    }
}
