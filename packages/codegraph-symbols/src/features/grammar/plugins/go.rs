//! Go grammar

use crate::features::grammar::domain::{
    GenericShape, ImportShape, LanguageId, NodeTaxonomy, ParameterShape, PlainBinding, PrivacyRule,
    RelativeMarker, TagMap,
};
use crate::features::grammar::infrastructure::docstring::LeadingCommentDocstring;
use crate::features::grammar::infrastructure::registry::{LanguageGrammar, QuerySet};

pub const QUERY: &str = include_str!("../../../../queries/go.scm");

/// Type parameters (Go 1.18+)
pub const OPTIONAL_PATTERNS: &[&str] = &[
    "(function_declaration type_parameters: (type_parameter_list (_) @function.generic)) @function.definition",
    "(type_spec type_parameters: (type_parameter_list (_) @class.generic)) @class.definition",
];

pub const DOC_PREFIXES: &[&str] = &["//"];

pub const TAXONOMY: NodeTaxonomy = NodeTaxonomy {
    comment_kinds: &["comment"],
    string_kinds: &[],
    expression_statement_kinds: &[],
    wrapper_kinds: &["type_declaration"],
    leading_decorator_kinds: &[],
    parameters: ParameterShape {
        name_fields: &["name"],
        name_kinds: &["identifier"],
        type_fields: &["type"],
        type_fallback: false,
        default_fields: &[],
        var_positional_kinds: &["variadic_parameter_declaration"],
        var_keyword_kinds: &[],
        keyword_only_separator_kinds: &[],
        positional_only_separator_kinds: &[],
        skip_kinds: &[],
    },
    generics: GenericShape {
        name_fields: &["name"],
        name_kinds: &["identifier"],
        bound_fields: &["type", "constraint"],
        bound_kinds: &[],
    },
    imports: ImportShape {
        relative: RelativeMarker::None,
        path_separator: "/",
        plain_binding: PlainBinding::LastSegment,
        quoted_module: true,
    },
    privacy: PrivacyRule::Capitalization,
};

pub fn grammar() -> LanguageGrammar {
    LanguageGrammar {
        language: LanguageId::Go,
        ts_language: tree_sitter_go::language(),
        queries: QuerySet::new(QUERY).with_optional(OPTIONAL_PATTERNS),
        tags: TagMap::standard(),
        taxonomy: TAXONOMY,
        docstrings: Box::new(LeadingCommentDocstring::new(DOC_PREFIXES)),
    }
}
