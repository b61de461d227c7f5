//! Error types for codegraph-symbols
//!
//! Fatal failures are `SymbolError`s. Everything recoverable (parse errors,
//! budget exhaustion, lenient duplicates) is reported as a
//! [`Diagnostic`](crate::shared::models::Diagnostic) on the catalog instead.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::Location;

/// Main error type for symbol extraction
#[derive(Debug, Error)]
pub enum SymbolError {
    /// No grammar registered for the requested language
    #[error("Unsupported language '{0}'")]
    UnsupportedLanguage(String),

    /// The tree-sitter runtime rejected the grammar (ABI mismatch)
    #[error("Parser unavailable for {language}: {source}")]
    ParserUnavailable {
        language: String,
        #[source]
        source: tree_sitter::LanguageError,
    },

    /// The parser returned no tree at all
    #[error("Parse failed for '{path}'")]
    ParseFailed { path: String },

    /// Two siblings share a qualified path under the strict policy
    #[error("Duplicate symbol '{qualified_path}' at {second} (first defined at {first})")]
    DuplicateSymbol {
        qualified_path: String,
        first: Location,
        second: Location,
    },

    /// Grammar registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building or installing the grammar registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required capture pattern does not compile against its grammar
    #[error("Query for {language} failed to compile ({section}): {source}")]
    QueryCompile {
        language: String,
        section: String,
        #[source]
        source: tree_sitter::QueryError,
    },

    /// A query uses a capture name that the language's tag map does not cover
    #[error("Capture '@{capture}' in the {language} query has no tag mapping")]
    UnmappedCapture { language: String, capture: String },

    /// The same language was registered twice
    #[error("Language {0} is already registered")]
    DuplicateLanguage(String),

    /// No pattern survived compilation
    #[error("Query set for {0} is empty")]
    EmptyQuerySet(String),

    /// `install` was called after a registry was already installed
    #[error("A grammar registry is already installed for this process")]
    AlreadyInstalled,

    /// The process-wide entry point was used before any registry was installed
    #[error("No grammar registry installed; call install() or install_builtin() first")]
    NotInstalled,
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, SymbolError>;
