//! Shared utilities

pub mod scope_stack;
pub mod text;
pub mod tree_sitter;

pub use scope_stack::{ScopeStack, QUALIFIED_PATH_SEPARATOR};
