//! Symbol catalog
//!
//! The result of one extraction call. Self-contained: rendering it needs no
//! access to the source, the tree or the registry. Fields are private so a
//! catalog cannot be altered after it is handed out.

use serde::{Deserialize, Serialize};

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::import::ImportRecord;
use super::symbol::{Symbol, SymbolKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    language: String,
    file_path: String,
    root: Symbol,
    imports: Vec<ImportRecord>,
    diagnostics: Vec<Diagnostic>,
    truncated: bool,
}

impl SymbolCatalog {
    pub(crate) fn new(
        language: impl Into<String>,
        file_path: impl Into<String>,
        root: Symbol,
        imports: Vec<ImportRecord>,
        diagnostics: Vec<Diagnostic>,
        truncated: bool,
    ) -> Self {
        Self {
            language: language.into(),
            file_path: file_path.into(),
            root,
            imports,
            diagnostics,
            truncated,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Root module symbol
    pub fn root(&self) -> &Symbol {
        &self.root
    }

    /// Import records in source order
    pub fn imports(&self) -> &[ImportRecord] {
        &self.imports
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when the query budget ran out and the catalog is partial
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn has_parse_errors(&self) -> bool {
        self.diagnostics_of(DiagnosticKind::ParseError).next().is_some()
    }

    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    /// Every symbol in pre-order, root included
    pub fn symbols(&self) -> Vec<&Symbol> {
        self.root.walk()
    }

    pub fn find(&self, qualified_path: &str) -> Option<&Symbol> {
        self.symbols()
            .into_iter()
            .find(|s| s.qualified_path == qualified_path)
    }

    pub fn count_of(&self, kind: SymbolKind) -> usize {
        self.symbols().iter().filter(|s| s.kind == kind).count()
    }

    /// Split into `(root, imports, diagnostics)`
    pub fn into_parts(self) -> (Symbol, Vec<ImportRecord>, Vec<Diagnostic>) {
        (self.root, self.imports, self.diagnostics)
    }
}
