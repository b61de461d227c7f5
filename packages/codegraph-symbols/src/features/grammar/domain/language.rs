//! Language identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SymbolError;

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Java,
    TypeScript,
    Go,
    Rust,
}

impl LanguageId {
    pub const ALL: [LanguageId; 5] = [
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::TypeScript,
        LanguageId::Go,
        LanguageId::Rust,
    ];

    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::TypeScript => "typescript",
            LanguageId::Go => "go",
            LanguageId::Rust => "rust",
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "ts" | "mts" | "cts" => Some(LanguageId::TypeScript),
            "go" => Some(LanguageId::Go),
            "rs" => Some(LanguageId::Rust),
            _ => None,
        }
    }

    /// Get language from a file path's extension
    pub fn from_path(path: &str) -> Option<Self> {
        std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["py", "pyi"],
            LanguageId::Java => &["java"],
            LanguageId::TypeScript => &["ts", "mts", "cts"],
            LanguageId::Go => &["go"],
            LanguageId::Rust => &["rs"],
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageId {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(LanguageId::Python),
            "java" => Ok(LanguageId::Java),
            "typescript" | "ts" => Ok(LanguageId::TypeScript),
            "go" | "golang" => Ok(LanguageId::Go),
            "rust" | "rs" => Ok(LanguageId::Rust),
            _ => Err(SymbolError::UnsupportedLanguage(s.to_string())),
        }
    }
}
