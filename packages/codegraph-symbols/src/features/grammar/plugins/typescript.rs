//! TypeScript grammar

use crate::features::grammar::domain::{
    GenericShape, ImportShape, LanguageId, NodeTaxonomy, ParameterShape, PlainBinding, PrivacyRule,
    RelativeMarker, TagMap,
};
use crate::features::grammar::infrastructure::docstring::LeadingCommentDocstring;
use crate::features::grammar::infrastructure::registry::{LanguageGrammar, QuerySet};

pub const QUERY: &str = include_str!("../../../../queries/typescript.scm");

/// Decorator placement and abstract classes moved between grammar releases
pub const OPTIONAL_PATTERNS: &[&str] = &[
    "(class_declaration (decorator) @decorator) @class.definition",
    "(class_body (decorator) @decorator . (method_definition) @function.definition)",
    "(method_definition (decorator) @decorator) @function.definition",
    "(abstract_class_declaration name: (type_identifier) @class.name) @class.definition",
    "(abstract_class_declaration body: (class_body) @class.body) @class.definition",
    "(abstract_class_declaration type_parameters: (type_parameters (type_parameter) @class.generic)) @class.definition",
    "(interface_declaration body: (_) @class.body) @class.definition",
    "(method_signature name: (_) @function.name) @function.definition",
    "(method_signature parameters: (formal_parameters (_) @function.parameter)) @function.definition",
    "(method_signature return_type: (_) @function.return) @function.definition",
    "(abstract_method_signature name: (_) @function.name) @function.definition",
    "(abstract_method_signature parameters: (formal_parameters (_) @function.parameter)) @function.definition",
    "(abstract_method_signature return_type: (_) @function.return) @function.definition",
];

pub const DOC_PREFIXES: &[&str] = &["/**"];

pub const TAXONOMY: NodeTaxonomy = NodeTaxonomy {
    comment_kinds: &["comment"],
    string_kinds: &[],
    expression_statement_kinds: &[],
    wrapper_kinds: &["export_statement", "lexical_declaration"],
    leading_decorator_kinds: &["decorator"],
    parameters: ParameterShape {
        name_fields: &["pattern", "name"],
        name_kinds: &["identifier", "rest_pattern", "this"],
        type_fields: &["type"],
        type_fallback: false,
        default_fields: &["value"],
        var_positional_kinds: &["rest_pattern"],
        var_keyword_kinds: &[],
        keyword_only_separator_kinds: &[],
        positional_only_separator_kinds: &[],
        skip_kinds: &["accessibility_modifier", "decorator"],
    },
    generics: GenericShape {
        name_fields: &["name"],
        name_kinds: &["type_identifier", "identifier"],
        bound_fields: &["constraint"],
        bound_kinds: &["constraint"],
    },
    imports: ImportShape {
        relative: RelativeMarker::PathDots,
        path_separator: "/",
        plain_binding: PlainBinding::Nothing,
        quoted_module: true,
    },
    privacy: PrivacyRule::PrivateModifier {
        modifier_kinds: &["accessibility_modifier"],
        private_words: &["private"],
    },
};

pub fn grammar() -> LanguageGrammar {
    LanguageGrammar {
        language: LanguageId::TypeScript,
        ts_language: tree_sitter_typescript::language_typescript(),
        queries: QuerySet::new(QUERY).with_optional(OPTIONAL_PATTERNS),
        tags: TagMap::standard(),
        taxonomy: TAXONOMY,
        docstrings: Box::new(LeadingCommentDocstring::new(DOC_PREFIXES)),
    }
}
