//! Edge case tests - malformed input, budgets, registry misses

#[path = "../common/mod.rs"]
mod common;

use std::str::FromStr;

use codegraph_symbols::features::grammar::plugins::python;
use codegraph_symbols::{
    DiagnosticKind, ExtractionConfig, GrammarRegistry, LanguageId, Severity, SymbolError,
    SymbolExtractor, SymbolKind,
};
use common::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════════
// Empty and trivial input
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_empty_source() {
    for language in LanguageId::ALL {
        let catalog = extract_ok("", language, "empty");
        assert!(catalog.root().children.is_empty(), "{language}");
        assert!(catalog.imports().is_empty());
        assert!(!catalog.is_truncated());
    }
}

#[test]
fn edge_comment_only_file() {
    let catalog = extract_python("# just a note\n# def not_a_function():\n#     pass\n");
    assert!(catalog.root().children.is_empty());
    assert_no_diagnostics(&catalog);
}

#[test]
fn edge_late_string_is_not_a_docstring() {
    let source = r#"
def f():
    x = 1
    "not a docstring"
"#;
    let catalog = extract_python(source);
    assert_eq!(find(&catalog, "sample.f").docstring, None);
    assert_eq!(catalog.root().docstring, None);
}

#[test]
fn edge_multiline_docstring_is_dedented() {
    let source = r#"
def f():
    """Summary line.

    Details follow
        with indentation.
    """
"#;
    let catalog = extract_python(source);
    assert_eq!(
        find(&catalog, "sample.f").docstring.as_deref(),
        Some("Summary line.\n\nDetails follow\n    with indentation.")
    );
}

#[test]
fn edge_docstring_with_multibyte_indentation() {
    let catalog = extract_python("def f():\n    \"\"\"Doc.\n  x\n\u{3000}y\n    \"\"\"\n");
    assert_eq!(find(&catalog, "sample.f").docstring.as_deref(), Some("Doc.\n x\ny"));

    let catalog = extract_python("def g():\n    \"\"\"Doc.\n\u{00A0}\u{00A0}a\n\u{00A0}b\n    \"\"\"\n");
    assert_eq!(find(&catalog, "sample.g").docstring.as_deref(), Some("Doc.\n\u{00A0}a\nb"));
}

#[test]
fn edge_block_comment_with_multibyte_gutter() {
    let source = "/** *  one\n * \u{3000}two */\nclass A {}\n";
    let catalog = extract_ok(source, LanguageId::Java, "A.java");
    assert_eq!(find(&catalog, "A.A").docstring.as_deref(), Some("one\ntwo"));
}

#[test]
fn edge_concatenated_string_docstring() {
    let source = r#"
def f():
    "Joined " 'from ' """parts."""
    return 1

class C:
    "Class " "doc."
"#;
    let catalog = extract_python(source);
    assert_eq!(find(&catalog, "sample.f").docstring.as_deref(), Some("Joined from parts."));
    assert_eq!(find(&catalog, "sample.C").docstring.as_deref(), Some("Class doc."));
}

// ═══════════════════════════════════════════════════════════════════════════
// Malformed source
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_parse_errors_are_diagnostics() {
    let source = "def ok():\n    pass\n\ndef broken(:\n    pass\n\nclass Fine:\n    pass\n";
    let catalog = extract_python(source);

    assert!(catalog.has_parse_errors());
    let errors: Vec<_> = catalog.diagnostics_of(DiagnosticKind::ParseError).collect();
    assert!(!errors.is_empty());
    assert!(errors.iter().all(|d| d.severity == Severity::Error && d.span.is_some()));
    assert!(catalog.find("sample.ok").is_some());
}

#[test]
fn edge_unbalanced_braces_still_catalog() {
    let source = "package main\n\nfunc Good() {}\n\nfunc Bad( {\n";
    let catalog = extract_ok(source, LanguageId::Go, "main.go");

    assert!(catalog.has_parse_errors());
    assert!(catalog.find("main.Good").is_some());
}

// ═══════════════════════════════════════════════════════════════════════════
// Query budget
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_budget_truncates_large_file() {
    let config = ExtractionConfig::default().with_max_query_matches(3);
    let catalog = extractor(config)
        .extract(&fixture_n_functions(50), LanguageId::Python, "big.py")
        .unwrap();

    assert!(catalog.is_truncated());
    assert_diagnostic_count(&catalog, DiagnosticKind::QueryBudgetExceeded, 1);
    assert!(catalog.root().children.len() <= 3);
}

#[test]
fn edge_generous_budget_is_not_truncated() {
    let config = ExtractionConfig::default().with_max_query_matches(10_000);
    let catalog = extractor(config)
        .extract(&fixture_n_functions(50), LanguageId::Python, "big.py")
        .unwrap();

    assert!(!catalog.is_truncated());
    assert_eq!(catalog.count_of(SymbolKind::Function), 50);
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry misses
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_unsupported_language_is_fatal() {
    let mut builder = GrammarRegistry::builder();
    builder.register(python::grammar()).unwrap();
    let registry = builder.build();
    let extractor = SymbolExtractor::new(&registry, ExtractionConfig::default()).unwrap();

    let err = extractor
        .extract("package main\n", LanguageId::Go, "main.go")
        .unwrap_err();
    assert!(matches!(err, SymbolError::UnsupportedLanguage(ref name) if name == "go"));
}

#[test]
fn edge_unknown_language_name() {
    assert!(matches!(
        LanguageId::from_str("cobol"),
        Err(SymbolError::UnsupportedLanguage(_))
    ));
    assert_eq!(LanguageId::from_str("TS").unwrap(), LanguageId::TypeScript);
}

#[test]
fn edge_free_extract_uses_installed_registry() {
    codegraph_symbols::install_builtin().unwrap();
    let catalog = codegraph_symbols::extract("def f():\n    pass\n", LanguageId::Python, "m.py").unwrap();
    assert_eq!(child_names(catalog.root(), SymbolKind::Function), vec!["f"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Odd but valid input
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn edge_unicode_identifiers() {
    let source = "def grüße(名前):\n    return 名前\n";
    let catalog = extract_python(source);
    let greet = find(&catalog, "sample.grüße");

    assert_eq!(greet.parameters[0].name, "名前");
    assert_eq!(greet.location.span.start_line, 1);
}

#[test]
fn edge_deeply_nested_classes() {
    let source = r#"
class A:
    class B:
        class C:
            def deep(self):
                pass
"#;
    let catalog = extract_python(source);

    let deep = find(&catalog, "sample.A.B.C.deep");
    assert_kind(deep, SymbolKind::Method);
    assert_eq!(find(&catalog, "sample.A.B").children.len(), 1);
}

#[test]
fn edge_lambdas_are_not_symbols() {
    let catalog = extract_python("handler = lambda x: x\n");

    assert_eq!(catalog.count_of(SymbolKind::Function), 0);
    assert_kind(find(&catalog, "sample.handler"), SymbolKind::Variable);
}

#[test]
fn edge_diagnostics_render_locations() {
    let source = "def f():\n    pass\n\ndef f():\n    return 1\n";
    let catalog = extract_python(source);
    let duplicate = catalog
        .diagnostics_of(DiagnosticKind::DuplicateSymbol)
        .next()
        .unwrap();

    assert_eq!(duplicate.severity, Severity::Warning);
    assert!(duplicate.message.contains("sample.py:1:0"));
    assert!(duplicate.message.contains("sample.py:4:0"));
}
