//! Grammar Registry
//!
//! Language identifiers, the capture tag vocabulary, per-language node
//! taxonomies, docstring strategies and the registry that binds them.

pub mod domain;
pub mod infrastructure;
pub mod plugins;
pub mod ports;

pub use domain::{
    CaptureRole, DeclarationKind, FragmentRole, ImportPart, LanguageId, NodeTaxonomy, TagMap,
};
pub use infrastructure::{
    create_builtin_registry, install, install_builtin, installed, parse_source,
    GrammarDescriptor, GrammarRegistry, GrammarRegistryBuilder, LanguageGrammar, QuerySet,
};
pub use ports::{DocContext, DocstringStrategy};
