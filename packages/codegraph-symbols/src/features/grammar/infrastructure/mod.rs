//! Grammar infrastructure: registry, parsing, docstring strategies

pub mod docstring;
pub mod parser;
pub mod registry;

pub use docstring::{BodyStringDocstring, LeadingCommentDocstring};
pub use parser::parse_source;
pub use registry::{
    create_builtin_registry, install, install_builtin, installed, GrammarDescriptor,
    GrammarRegistry, GrammarRegistryBuilder, LanguageGrammar, QuerySet,
};
