//! Multi-language extraction tests
//!
//! One realistic fixture per built-in language.

#[path = "../common/mod.rs"]
mod common;

use codegraph_symbols::{
    DiagnosticKind, ExtractionConfig, LanguageId, ParameterKind, SourceFile, SymbolKind,
    Visibility,
};
use common::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════════
// Java
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn java_class_shape() {
    let catalog = extract_ok(JAVA_REPOSITORY, LanguageId::Java, "Repository.java");
    let class = find(&catalog, "Repository.Repository");

    assert_kind(class, SymbolKind::Class);
    assert_eq!(class.decorators, vec!["Deprecated"]);
    assert_eq!(class.docstring.as_deref(), Some("Stores entities by id."));
    assert_eq!(class.generic_names(), vec!["T"]);
    assert_eq!(class.generic_params[0].bound.as_deref(), Some("Entity"));
    assert_eq!(class.signature, "[T: Entity]");

    assert_eq!(child_names(class, SymbolKind::Variable), vec!["size", "name"]);
    assert_eq!(
        child_names(class, SymbolKind::Method),
        vec!["Repository", "find", "reset"]
    );
}

#[test]
fn java_members() {
    let catalog = extract_ok(JAVA_REPOSITORY, LanguageId::Java, "Repository.java");

    let size = find(&catalog, "Repository.Repository.size");
    assert_eq!(size.visibility, Visibility::Private);
    assert_eq!(size.signature, "int");
    assert_eq!(find(&catalog, "Repository.Repository.name").visibility, Visibility::Public);

    let constructor = find(&catalog, "Repository.Repository.Repository");
    assert_eq!(constructor.docstring.as_deref(), Some("Creates an empty repository."));

    let find_method = find(&catalog, "Repository.Repository.find");
    assert_eq!(find_method.decorators, vec!["Override"]);
    assert_eq!(find_method.docstring.as_deref(), Some("Finds an entity."));
    assert_eq!(find_method.return_type.as_deref(), Some("T"));
    let params: Vec<(&str, ParameterKind)> = find_method
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.kind))
        .collect();
    assert_eq!(
        params,
        vec![("id", ParameterKind::Positional), ("hints", ParameterKind::VarPositional)]
    );

    let reset = find(&catalog, "Repository.Repository.reset");
    assert_eq!(reset.visibility, Visibility::Private);
    assert_eq!(reset.docstring, None);

    let entity = find(&catalog, "Repository.Entity");
    assert_eq!(child_names(entity, SymbolKind::Method), vec!["id"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// TypeScript
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn typescript_exported_declarations() {
    let catalog = extract_ok(TYPESCRIPT_SERVICE, LanguageId::TypeScript, "src/service.ts");

    let retries = find(&catalog, "service.MAX_RETRIES");
    assert_kind(retries, SymbolKind::Variable);
    assert_eq!(retries.signature, "number");
    assert_eq!(retries.docstring.as_deref(), Some("Maximum retry count."));

    let greeter = find(&catalog, "service.Greeter");
    assert_eq!(greeter.docstring.as_deref(), Some("Greets people."));
    assert_eq!(greeter.signature, "[T: Person]");

    let compose = find(&catalog, "service.compose");
    assert_kind(compose, SymbolKind::Function);
    assert_eq!(compose.generic_names(), vec!["A", "B"]);
    assert_eq!(compose.return_type.as_deref(), Some("B"));
    assert_eq!(compose.parameters.len(), 2);

    assert_kind(find(&catalog, "service.Person"), SymbolKind::Class);
}

#[test]
fn typescript_methods() {
    let catalog = extract_ok(TYPESCRIPT_SERVICE, LanguageId::TypeScript, "src/service.ts");
    let greeter = find(&catalog, "service.Greeter");

    assert_eq!(child_names(greeter, SymbolKind::Method), vec!["greet", "secret"]);

    let greet = find(&catalog, "service.Greeter.greet");
    assert_eq!(greet.decorators, vec!["Log()"]);
    assert_eq!(greet.docstring.as_deref(), Some("Say hello."));
    assert_eq!(greet.signature, "(person: T, *extra: string[]) -> string");

    let secret = find(&catalog, "service.Greeter.secret");
    assert_eq!(secret.visibility, Visibility::Private);
}

// ═══════════════════════════════════════════════════════════════════════════
// Go
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn go_types_and_functions() {
    let catalog = extract_ok(GO_STORE, LanguageId::Go, "store/store.go");
    let root = catalog.root();

    assert_eq!(child_names(root, SymbolKind::Class), vec!["Store", "Reader"]);
    assert_eq!(child_names(root, SymbolKind::Function), vec!["NewStore", "Handle"]);

    let store = find(&catalog, "store.Store");
    assert_eq!(store.docstring.as_deref(), Some("Store keeps values in memory."));

    let new_store = find(&catalog, "store.NewStore");
    assert_eq!(new_store.docstring.as_deref(), Some("NewStore builds an empty store."));
    assert_eq!(new_store.return_type.as_deref(), Some("*Store"));

    let handle = find(&catalog, "store.Handle");
    assert_eq!(handle.parameters[1].name, "args");
    assert_eq!(handle.parameters[1].kind, ParameterKind::VarPositional);
}

#[test]
fn go_methods_qualify_through_receiver() {
    let catalog = extract_ok(GO_STORE, LanguageId::Go, "store/store.go");

    let get = find(&catalog, "store.Store.Get");
    assert_kind(get, SymbolKind::Method);
    assert_eq!(get.docstring.as_deref(), Some("Get looks up a key."));
    assert_eq!(get.visibility, Visibility::Public);
    assert_eq!(get.return_type.as_deref(), Some("(string, bool)"));

    let put = find(&catalog, "store.Store.put");
    assert_eq!(put.visibility, Visibility::Private);
    assert_eq!(put.parameters.len(), 2);

    assert_eq!(
        child_names(catalog.root(), SymbolKind::Method),
        vec!["Get", "put"]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Rust
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn rust_items() {
    let catalog = extract_ok(RUST_BUFFER, LanguageId::Rust, "src/buffer.rs");

    let capacity = find(&catalog, "buffer.DEFAULT_CAPACITY");
    assert_kind(capacity, SymbolKind::Variable);
    assert_eq!(capacity.signature, "usize");
    assert_eq!(capacity.docstring.as_deref(), Some("Default capacity in bytes."));

    let buffer = find(&catalog, "buffer.Buffer");
    assert_kind(buffer, SymbolKind::Class);
    assert_eq!(buffer.decorators, vec!["derive(Debug, Clone)"]);
    assert_eq!(buffer.docstring.as_deref(), Some("A growable byte buffer."));
    assert_eq!(buffer.signature, "[T: Clone]");
    assert_eq!(buffer.visibility, Visibility::Public);
}

#[test]
fn rust_impl_methods_qualify_through_type() {
    let catalog = extract_ok(RUST_BUFFER, LanguageId::Rust, "src/buffer.rs");

    let new = find(&catalog, "buffer.Buffer.new");
    assert_kind(new, SymbolKind::Method);
    assert_eq!(new.docstring.as_deref(), Some("Creates an empty buffer."));
    assert_eq!(new.signature, "() -> Self");

    assert_eq!(find(&catalog, "buffer.Buffer.push").visibility, Visibility::Public);
    assert_eq!(find(&catalog, "buffer.Buffer.grow").visibility, Visibility::Private);
    assert_eq!(
        child_names(catalog.root(), SymbolKind::Method),
        vec!["new", "push", "grow"]
    );
}

#[test]
fn rust_traits_and_modules() {
    let catalog = extract_ok(RUST_BUFFER, LanguageId::Rust, "src/buffer.rs");

    let sink = find(&catalog, "buffer.Sink");
    assert_eq!(child_names(sink, SymbolKind::Method), vec!["accept"]);
    assert_eq!(
        find(&catalog, "buffer.Sink.accept").docstring.as_deref(),
        Some("Consumes one item.")
    );

    let helpers = find(&catalog, "buffer.helpers");
    assert_kind(helpers, SymbolKind::Module);
    assert_eq!(child_names(helpers, SymbolKind::Function), vec!["checksum"]);
}

const RUST_TRAIT_IMPLS: &str = r#"
use std::fmt;

pub struct Buffer;

impl Buffer {
    pub fn len(&self) -> usize { 0 }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "buffer") }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Buffer") }
}

impl<T> From<Vec<T>> for Buffer {
    fn from(_: Vec<T>) -> Self { Buffer }
}
"#;

#[test]
fn rust_trait_impls_qualify_through_trait() {
    let catalog = extract_ok(RUST_TRAIT_IMPLS, LanguageId::Rust, "src/buffer.rs");

    assert_kind(find(&catalog, "buffer.Buffer.len"), SymbolKind::Method);
    assert_kind(find(&catalog, "buffer.Buffer.Display.fmt"), SymbolKind::Method);
    assert_kind(find(&catalog, "buffer.Buffer.Debug.fmt"), SymbolKind::Method);
    assert_kind(find(&catalog, "buffer.Buffer.From<Vec<T>>.from"), SymbolKind::Method);
    assert!(catalog.find("buffer.Buffer.fmt").is_none());
    assert_diagnostic_count(&catalog, DiagnosticKind::DuplicateSymbol, 0);
}

#[test]
fn rust_trait_impls_pass_strict_duplicate_policy() {
    let strict = extractor(ExtractionConfig::default().with_strict_duplicate_policy(true));
    let catalog = strict
        .extract(RUST_TRAIT_IMPLS, LanguageId::Rust, "src/buffer.rs")
        .unwrap();

    assert_eq!(
        child_names(catalog.root(), SymbolKind::Method),
        vec!["len", "fmt", "fmt", "from"]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Batch
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn batch_matches_sequential_extraction() {
    let files = vec![
        SourceFile::new("pkg/container.py", LanguageId::Python, PYTHON_CONTAINER),
        SourceFile::new("Repository.java", LanguageId::Java, JAVA_REPOSITORY),
        SourceFile::new("src/service.ts", LanguageId::TypeScript, TYPESCRIPT_SERVICE),
        SourceFile::new("store/store.go", LanguageId::Go, GO_STORE),
        SourceFile::new("src/buffer.rs", LanguageId::Rust, RUST_BUFFER),
    ];
    let extractor = extractor(Default::default());

    let batch = extractor.extract_batch(&files);
    assert_eq!(batch.len(), files.len());
    for (file, result) in files.iter().zip(batch) {
        let sequential = extract_ok(&file.source, file.language, &file.file_path);
        assert_eq!(result.unwrap(), sequential);
    }
}

#[test]
fn source_file_infers_language() {
    let file = SourceFile::from_path("lib/buffer.rs", RUST_BUFFER).unwrap();
    assert_eq!(file.language, LanguageId::Rust);
    assert!(SourceFile::from_path("notes.txt", "").is_err());
}
