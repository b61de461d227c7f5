//! Java grammar

use crate::features::grammar::domain::{
    CaptureRole, FragmentRole, GenericShape, ImportShape, LanguageId, NodeTaxonomy, ParameterShape,
    PlainBinding, PrivacyRule, RelativeMarker, TagMap,
};
use crate::features::grammar::infrastructure::docstring::LeadingCommentDocstring;
use crate::features::grammar::infrastructure::registry::{LanguageGrammar, QuerySet};

pub const QUERY: &str = include_str!("../../../../queries/java.scm");

pub const OPTIONAL_PATTERNS: &[&str] = &[
    "(import_declaration (asterisk) @import.wildcard) @import.statement",
    "(method_declaration type_parameters: (type_parameters (type_parameter) @function.generic)) @function.definition",
    "(constructor_declaration type_parameters: (type_parameters (type_parameter) @function.generic)) @function.definition",
    "(record_declaration name: (identifier) @class.name) @class.definition",
    "(record_declaration body: (class_body) @class.body) @class.definition",
];

pub const DOC_PREFIXES: &[&str] = &["/**"];

pub const TAXONOMY: NodeTaxonomy = NodeTaxonomy {
    comment_kinds: &["line_comment", "block_comment", "comment"],
    string_kinds: &[],
    expression_statement_kinds: &[],
    wrapper_kinds: &["field_declaration"],
    leading_decorator_kinds: &[],
    parameters: ParameterShape {
        name_fields: &["name"],
        name_kinds: &["identifier", "variable_declarator"],
        type_fields: &["type"],
        type_fallback: true,
        default_fields: &[],
        var_positional_kinds: &["spread_parameter"],
        var_keyword_kinds: &[],
        keyword_only_separator_kinds: &[],
        positional_only_separator_kinds: &[],
        skip_kinds: &["modifiers", "annotation", "marker_annotation", "dimensions"],
    },
    generics: GenericShape {
        name_fields: &["name"],
        name_kinds: &["type_identifier", "identifier"],
        bound_fields: &[],
        bound_kinds: &["type_bound"],
    },
    imports: ImportShape {
        relative: RelativeMarker::None,
        path_separator: ".",
        plain_binding: PlainBinding::LastSegment,
        quoted_module: false,
    },
    privacy: PrivacyRule::PrivateModifier {
        modifier_kinds: &["modifiers"],
        private_words: &["private"],
    },
};

pub fn tags() -> TagMap {
    TagMap::standard().with(
        "annotation",
        CaptureRole::Fragment(FragmentRole::Decorator),
    )
}

pub fn grammar() -> LanguageGrammar {
    LanguageGrammar {
        language: LanguageId::Java,
        ts_language: tree_sitter_java::language(),
        queries: QuerySet::new(QUERY).with_optional(OPTIONAL_PATTERNS),
        tags: tags(),
        taxonomy: TAXONOMY,
        docstrings: Box::new(LeadingCommentDocstring::new(DOC_PREFIXES)),
    }
}
