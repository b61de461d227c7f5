//! Extraction configuration
//!
//! Two tiers:
//! - Preset: `ExtractionConfig::preset(Preset::Strict)`
//! - YAML: `ExtractionConfig::from_yaml("symbols.yaml")` (versioned schema)
//!
//! ```rust,ignore
//! use codegraph_symbols::config::{ExtractionConfig, Preset};
//!
//! let config = ExtractionConfig::preset(Preset::PublicApi).with_max_query_matches(10_000);
//! config.validate()?;
//! ```

pub mod error;
pub mod extraction_config;
pub mod io;
pub mod preset;

pub use error::{ConfigError, ConfigResult};
pub use extraction_config::{ExtractionConfig, DEFAULT_MAX_QUERY_MATCHES};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
