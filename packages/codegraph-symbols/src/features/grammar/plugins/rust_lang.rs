//! Rust grammar

use crate::features::grammar::domain::{
    GenericShape, ImportShape, LanguageId, NodeTaxonomy, ParameterShape, PlainBinding, PrivacyRule,
    RelativeMarker, TagMap,
};
use crate::features::grammar::infrastructure::docstring::LeadingCommentDocstring;
use crate::features::grammar::infrastructure::registry::{LanguageGrammar, QuerySet};

pub const QUERY: &str = include_str!("../../../../queries/rust.scm");

/// `use_wildcard` children differ across grammar releases
pub const OPTIONAL_PATTERNS: &[&str] = &[
    "(use_declaration argument: (use_wildcard [(identifier) (scoped_identifier) (crate) (self) (super)] @import.module) @import.wildcard) @import.statement",
];

pub const DOC_PREFIXES: &[&str] = &["///", "/**"];

pub const TAXONOMY: NodeTaxonomy = NodeTaxonomy {
    comment_kinds: &["line_comment", "block_comment"],
    string_kinds: &[],
    expression_statement_kinds: &[],
    wrapper_kinds: &[],
    leading_decorator_kinds: &["attribute_item"],
    parameters: ParameterShape {
        name_fields: &["pattern"],
        name_kinds: &["self_parameter", "identifier"],
        type_fields: &["type"],
        type_fallback: false,
        default_fields: &[],
        var_positional_kinds: &["variadic_parameter"],
        var_keyword_kinds: &[],
        keyword_only_separator_kinds: &[],
        positional_only_separator_kinds: &[],
        skip_kinds: &["attribute_item"],
    },
    generics: GenericShape {
        name_fields: &["name", "left"],
        name_kinds: &["type_identifier", "lifetime", "identifier"],
        bound_fields: &["bounds", "type"],
        bound_kinds: &["trait_bounds"],
    },
    imports: ImportShape {
        relative: RelativeMarker::SelfSuper,
        path_separator: "::",
        plain_binding: PlainBinding::LastSegment,
        quoted_module: false,
    },
    privacy: PrivacyRule::RequiresModifier {
        modifier_kinds: &["visibility_modifier"],
    },
};

pub fn grammar() -> LanguageGrammar {
    LanguageGrammar {
        language: LanguageId::Rust,
        ts_language: tree_sitter_rust::language(),
        queries: QuerySet::new(QUERY).with_optional(OPTIONAL_PATTERNS),
        tags: TagMap::standard(),
        taxonomy: TAXONOMY,
        docstrings: Box::new(LeadingCommentDocstring::new(DOC_PREFIXES)),
    }
}
