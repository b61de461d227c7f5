//! Pipeline orchestration

pub mod extractor;

pub use extractor::{extract, module_name_for, SourceFile, SymbolExtractor};
