//! Parsing entry point
//!
//! A `Parser` is cheap to create and not `Sync`, so every call builds its own.
//! Trees containing `ERROR` nodes are returned as-is; callers report them as
//! diagnostics.

use tree_sitter::{Parser, Tree};

use super::registry::GrammarDescriptor;
use crate::errors::{Result, SymbolError};

/// Parse `source` with the descriptor's grammar
pub fn parse_source(descriptor: &GrammarDescriptor, source: &str, file_path: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(descriptor.ts_language())
        .map_err(|source| SymbolError::ParserUnavailable {
            language: descriptor.language().name().to_string(),
            source,
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| SymbolError::ParseFailed {
            path: file_path.to_string(),
        })?;

    if tree.root_node().has_error() {
        tracing::debug!(
            file_path = %file_path,
            language = %descriptor.language(),
            "Parsed with syntax errors"
        );
    }
    Ok(tree)
}
