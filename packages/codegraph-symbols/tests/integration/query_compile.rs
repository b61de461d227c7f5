//! Query compilation tests
//!
//! Every built-in query file must compile against the grammar version this
//! crate links, and every capture must carry a role.

use codegraph_symbols::features::grammar::plugins::{self, go, java, python, rust_lang, typescript};
use codegraph_symbols::features::grammar::{
    CaptureRole, DeclarationKind, GrammarRegistry, LanguageGrammar, QuerySet, TagMap,
};
use codegraph_symbols::{create_builtin_registry, LanguageId, RegistryError};
use pretty_assertions::assert_eq;
use tree_sitter::Query;

fn required_compiles(language: LanguageId, grammar: LanguageGrammar) {
    Query::new(&grammar.ts_language, grammar.queries.required)
        .unwrap_or_else(|err| panic!("{language} query file does not compile: {err}"));
}

#[test]
fn test_every_query_file_compiles_standalone() {
    required_compiles(LanguageId::Python, python::grammar());
    required_compiles(LanguageId::Java, java::grammar());
    required_compiles(LanguageId::TypeScript, typescript::grammar());
    required_compiles(LanguageId::Go, go::grammar());
    required_compiles(LanguageId::Rust, rust_lang::grammar());
}

#[test]
fn test_builtin_grammars_cover_every_language() {
    let languages: Vec<LanguageId> = plugins::builtin_grammars()
        .iter()
        .map(|g| g.language)
        .collect();
    assert_eq!(languages, LanguageId::ALL.to_vec());
}

#[test]
fn test_dropped_patterns_are_only_optional() {
    let registry = create_builtin_registry().unwrap();

    for grammar in plugins::builtin_grammars() {
        let descriptor = registry.lookup(grammar.language).unwrap();
        assert!(descriptor.query().pattern_count() > 0, "{}", grammar.language);
        assert!(descriptor.dropped_patterns() <= grammar.queries.optional.len());
    }
}

#[test]
fn test_every_query_declares_definitions() {
    let registry = create_builtin_registry().unwrap();

    for language in registry.languages() {
        let descriptor = registry.lookup(language).unwrap();
        let roles = descriptor.capture_roles();
        assert_eq!(roles.len(), descriptor.query().capture_names().len());

        let has = |kind: DeclarationKind| roles.contains(&Some(CaptureRole::Declaration(kind)));
        assert!(has(DeclarationKind::Callable), "{language} has no callables");
        assert!(has(DeclarationKind::Class), "{language} has no classes");
        assert!(
            roles.contains(&Some(CaptureRole::ImportStatement)),
            "{language} has no imports"
        );
    }
}

#[test]
fn test_helper_captures_have_no_role() {
    let registry = create_builtin_registry().unwrap();

    for language in registry.languages() {
        let descriptor = registry.lookup(language).unwrap();
        for (name, role) in descriptor
            .query()
            .capture_names()
            .iter()
            .zip(descriptor.capture_roles())
        {
            let name: &str = name.as_ref();
            if TagMap::is_helper(name) {
                assert_eq!(*role, None, "{language}: {name}");
            } else {
                assert!(role.is_some(), "{language}: {name} is unmapped");
            }
        }
    }
}

#[test]
fn test_rust_impl_is_a_scope() {
    let registry = create_builtin_registry().unwrap();
    let descriptor = registry.lookup(LanguageId::Rust).unwrap();

    assert!(descriptor
        .capture_roles()
        .contains(&Some(CaptureRole::Declaration(DeclarationKind::Scope))));
}

#[test]
fn test_bad_query_names_language_and_section() {
    let mut grammar = go::grammar();
    grammar.queries =
        QuerySet::new("(function_declaration nonexistent_field: (identifier)) @function.definition");

    let mut builder = GrammarRegistry::builder();
    let err = builder.register(grammar).unwrap_err();
    match err {
        RegistryError::QueryCompile {
            language, section, ..
        } => {
            assert_eq!(language, "go");
            assert_eq!(section, "required");
        }
        other => panic!("expected QueryCompile, got {other}"),
    }
}

#[test]
fn test_registry_rejects_second_registration() {
    let mut builder = GrammarRegistry::builder();
    builder.register(java::grammar()).unwrap();
    builder.register(go::grammar()).unwrap();

    let err = builder.register(java::grammar()).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateLanguage(ref name) if name == "java"));

    let registry = builder.build();
    assert_eq!(registry.languages(), vec![LanguageId::Java, LanguageId::Go]);
}
