//! Shared data model

mod catalog;
mod diagnostic;
mod import;
mod span;
mod symbol;

pub use catalog::SymbolCatalog;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use import::{ImportRecord, ImportedName};
pub use span::{Location, Span};
pub use symbol::{Parameter, ParameterKind, Symbol, SymbolKind, TypeParameter, Visibility};
