//! Symbol extraction pipeline
//!
//! ```text
//! source ─parse─▶ CST ─query─▶ matches ─classify─▶ fragments
//!        ─imports/builder─▶ flat symbols ─assemble─▶ SymbolCatalog
//! ```
//!
//! Every call owns its parser, cursor and builder state; the registry is
//! only read. Calls can therefore run on any thread.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};
use tree_sitter::Tree;

use crate::config::ExtractionConfig;
use crate::errors::{RegistryError, Result, SymbolError};
use crate::features::catalog::CatalogAssembler;
use crate::features::classify::NodeClassifier;
use crate::features::grammar::domain::LanguageId;
use crate::features::grammar::infrastructure::registry::{installed, GrammarRegistry};
use crate::features::grammar::infrastructure::parse_source;
use crate::features::imports::ImportResolver;
use crate::features::query::QueryEngine;
use crate::features::symbols::SymbolBuilder;
use crate::shared::models::{Diagnostic, ImportRecord, SymbolCatalog};
use crate::shared::utils::tree_sitter::collect_error_sites;

/// Stems that name their directory rather than themselves
const PACKAGE_STEMS: &[&str] = &["__init__", "mod", "index"];

/// Module name used as the root of every qualified path
///
/// `pkg/container.py` → `container`, `pkg/__init__.py` → `pkg`.
pub fn module_name_for(file_path: &str) -> String {
    let path = Path::new(file_path);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();

    if PACKAGE_STEMS.contains(&stem) {
        let parent = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if !parent.is_empty() {
            return parent.to_string();
        }
    }
    if stem.is_empty() {
        "module".to_string()
    } else {
        stem.to_string()
    }
}

/// One input for [`SymbolExtractor::extract_batch`]
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub file_path: String,
    pub language: LanguageId,
    pub source: String,
}

impl SourceFile {
    pub fn new(file_path: impl Into<String>, language: LanguageId, source: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            language,
            source: source.into(),
        }
    }

    /// Infer the language from the file extension
    pub fn from_path(file_path: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let file_path = file_path.into();
        let language = LanguageId::from_path(&file_path)
            .ok_or_else(|| SymbolError::UnsupportedLanguage(file_path.clone()))?;
        Ok(Self::new(file_path, language, source))
    }
}

/// Extraction pipeline bound to a registry and a configuration
#[derive(Debug, Clone)]
pub struct SymbolExtractor<'r> {
    registry: &'r GrammarRegistry,
    config: ExtractionConfig,
}

impl<'r> SymbolExtractor<'r> {
    /// Fails if the configuration does not validate
    pub fn new(registry: &'r GrammarRegistry, config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn registry(&self) -> &'r GrammarRegistry {
        self.registry
    }

    /// Parse `source` and extract its catalog
    pub fn extract(&self, source: &str, language: LanguageId, file_path: &str) -> Result<SymbolCatalog> {
        let descriptor = self.registry.lookup(language)?;
        let tree = parse_source(descriptor, source, file_path)?;
        self.extract_tree(&tree, source, language, file_path)
    }

    /// Extract from a tree the caller already parsed with the same grammar
    pub fn extract_tree(
        &self,
        tree: &Tree,
        source: &str,
        language: LanguageId,
        file_path: &str,
    ) -> Result<SymbolCatalog> {
        let descriptor = self.registry.lookup(language)?;
        let root = tree.root_node();
        let mut diagnostics: Vec<Diagnostic> = collect_error_sites(root, source)
            .into_iter()
            .map(|site| {
                let message = if site.missing {
                    format!("missing {}", site.detail)
                } else {
                    format!("unexpected syntax: {}", site.detail)
                };
                Diagnostic::parse_error(site.span, message)
            })
            .collect();

        // Query
        let engine = QueryEngine::new(self.config.max_query_matches);
        let outcome = engine.run(descriptor.query(), root, source);
        if outcome.truncated {
            diagnostics.push(Diagnostic::budget_exceeded(engine.max_matches()));
        }

        // Classify
        let classification = NodeClassifier::new(descriptor.capture_roles()).classify(&outcome);

        // Imports
        let resolved = ImportResolver::new(&descriptor.taxonomy().imports).resolve(&classification, file_path);

        // Symbols
        let module_name = module_name_for(file_path);
        let builder = SymbolBuilder::new(
            descriptor,
            file_path,
            &module_name,
            source,
            self.config.include_private,
        );
        let built = builder.build(root, &classification, &resolved);

        // Assemble
        let assembler = CatalogAssembler::new(self.config.strict_duplicate_policy);
        let assembly = assembler.assemble(built.root, built.symbols)?;
        diagnostics.extend(assembly.diagnostics);

        let imports: Vec<ImportRecord> = resolved.into_iter().map(|r| r.record).collect();

        debug!(
            file_path = %file_path,
            language = %language,
            matches = outcome.len(),
            imports = imports.len(),
            diagnostics = diagnostics.len(),
            truncated = outcome.truncated,
            "Extracted symbol catalog"
        );

        Ok(SymbolCatalog::new(
            language.name(),
            file_path,
            assembly.root,
            imports,
            diagnostics,
            outcome.truncated,
        ))
    }

    /// Extract many files in parallel; results keep input order
    pub fn extract_batch(&self, files: &[SourceFile]) -> Vec<Result<SymbolCatalog>> {
        info!(files = files.len(), "Extracting batch");

        let results: Vec<Result<SymbolCatalog>> = files
            .par_iter()
            .map(|file| self.extract(&file.source, file.language, &file.file_path))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(files = files.len(), failed, "Batch extraction finished");
        results
    }
}

/// Extract with the installed process-wide registry and default settings
pub fn extract(source: &str, language: LanguageId, file_path: &str) -> Result<SymbolCatalog> {
    let registry = installed().ok_or(RegistryError::NotInstalled)?;
    SymbolExtractor::new(registry, ExtractionConfig::default())?.extract(source, language, file_path)
}
