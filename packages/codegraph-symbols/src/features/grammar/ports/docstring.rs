//! Docstring extraction port
//!
//! Languages disagree on where documentation lives: Python puts a string
//! literal first in the body, the brace languages put comments in front of
//! the declaration. Each grammar ships one strategy.

use tree_sitter::Node;

use crate::features::grammar::domain::NodeTaxonomy;

/// What a strategy may inspect for one declaration
#[derive(Debug, Clone, Copy)]
pub struct DocContext<'a> {
    /// The declaration node
    pub declaration: Node<'a>,
    /// Enclosing wrapper (`decorated_definition`, `export_statement`), if any
    pub wrapper: Option<Node<'a>>,
    /// `DocCandidate` captures, in source order
    pub candidates: &'a [Node<'a>],
    pub source: &'a str,
    pub taxonomy: &'a NodeTaxonomy,
}

/// Docstring extraction strategy
pub trait DocstringStrategy: Send + Sync {
    /// Strategy name (for logging)
    fn name(&self) -> &'static str;

    /// Cleaned docstring, or `None` when the declaration has none
    fn extract(&self, ctx: &DocContext<'_>) -> Option<String>;
}
