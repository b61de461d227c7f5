//! Python grammar

use crate::features::grammar::domain::{
    CaptureRole, FragmentRole, GenericShape, ImportShape, LanguageId, NodeTaxonomy, ParameterShape,
    PlainBinding, PrivacyRule, RelativeMarker, TagMap,
};
use crate::features::grammar::infrastructure::docstring::BodyStringDocstring;
use crate::features::grammar::infrastructure::registry::{LanguageGrammar, QuerySet};

pub const QUERY: &str = include_str!("../../../../queries/python.scm");

/// PEP 695 type parameters (older grammar releases lack the field) and
/// `from __future__ import ...`, whose module is an anonymous token
pub const OPTIONAL_PATTERNS: &[&str] = &[
    "(function_definition type_parameters: (type_parameter (type) @function.generic)) @function.definition",
    "(class_definition type_parameters: (type_parameter (type) @class.generic)) @class.definition",
    "(future_import_statement \"__future__\" @import.module name: (dotted_name) @import.name) @import.statement",
    "(future_import_statement \"__future__\" @import.module name: (aliased_import name: (dotted_name) @import.name alias: (identifier) @import.alias)) @import.statement",
];

pub const TAXONOMY: NodeTaxonomy = NodeTaxonomy {
    comment_kinds: &["comment"],
    string_kinds: &["string", "concatenated_string"],
    expression_statement_kinds: &["expression_statement"],
    wrapper_kinds: &["decorated_definition"],
    leading_decorator_kinds: &[],
    parameters: ParameterShape {
        name_fields: &["name"],
        name_kinds: &[
            "identifier",
            "list_splat_pattern",
            "dictionary_splat_pattern",
        ],
        type_fields: &["type"],
        type_fallback: false,
        default_fields: &["value"],
        var_positional_kinds: &["list_splat_pattern"],
        var_keyword_kinds: &["dictionary_splat_pattern"],
        keyword_only_separator_kinds: &["keyword_separator"],
        positional_only_separator_kinds: &["positional_separator"],
        skip_kinds: &[],
    },
    generics: GenericShape {
        name_fields: &[],
        name_kinds: &["identifier"],
        bound_fields: &[],
        bound_kinds: &[],
    },
    imports: ImportShape {
        relative: RelativeMarker::LeadingDots,
        path_separator: ".",
        plain_binding: PlainBinding::FirstSegment,
        quoted_module: false,
    },
    privacy: PrivacyRule::UnderscorePrefix,
};

pub fn tags() -> TagMap {
    let doc = CaptureRole::Fragment(FragmentRole::DocCandidate);
    TagMap::standard()
        .with("module.docstring", doc)
        .with("class.docstring", doc)
        .with("function.docstring", doc)
}

pub fn grammar() -> LanguageGrammar {
    LanguageGrammar {
        language: LanguageId::Python,
        ts_language: tree_sitter_python::language(),
        queries: QuerySet::new(QUERY).with_optional(OPTIONAL_PATTERNS),
        tags: tags(),
        taxonomy: TAXONOMY,
        docstrings: Box::new(BodyStringDocstring),
    }
}
