//! Import Resolver

pub mod resolver;

pub use resolver::{split_relative, ImportBinding, ImportResolver, ResolvedImport};
