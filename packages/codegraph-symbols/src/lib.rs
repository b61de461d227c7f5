/*
 * Codegraph Symbols - Multi-language Symbol Catalog Extraction
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Symbol, ImportRecord, Span) and tree helpers
 * - features/    : Pipeline stages (grammar → query → classify → imports → symbols → catalog)
 * - pipeline/    : Orchestration (single file and rayon batches)
 * - config/      : Presets and YAML configuration
 *
 * Languages: Python, Java, TypeScript, Go, Rust
 */

#![allow(clippy::too_many_arguments)] // Builder entry points take the full per-file context
#![allow(clippy::type_complexity)] // Bucket maps keyed by optional parents
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_lifetimes)] // Explicit lifetimes for clarity

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (extraction stages)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ExtractionConfig, Preset};
pub use errors::{RegistryError, Result, SymbolError};
pub use features::grammar::{
    create_builtin_registry, install, install_builtin, installed, GrammarRegistry, LanguageId,
};
pub use pipeline::{extract, SourceFile, SymbolExtractor};
pub use shared::models::{
    Diagnostic, DiagnosticKind, ImportRecord, ImportedName, Location, Parameter, ParameterKind,
    Severity, Span, Symbol, SymbolCatalog, SymbolKind, TypeParameter, Visibility,
};
