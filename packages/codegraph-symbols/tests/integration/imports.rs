//! Import resolution tests
//!
//! Import records per language plus the import symbols they bind.

#[path = "../common/mod.rs"]
mod common;

use codegraph_symbols::{LanguageId, SymbolKind};
use common::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════════
// Python
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn python_aliased_module_import() {
    let catalog = extract_python("import numpy as np\n");
    let records = catalog.imports();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].module, "numpy");
    assert_eq!(records[0].alias.as_deref(), Some("np"));
    assert!(records[0].imported_names.is_empty());
    assert_eq!(records[0].relative_level, 0);
}

#[test]
fn python_aliased_from_import() {
    let catalog = extract_python("from collections import OrderedDict as OD\n");
    let records = catalog.imports();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].module, "collections");
    assert_eq!(records[0].alias, None);
    assert_eq!(records[0].name_pairs(), vec![("OrderedDict", Some("OD"))]);
}

#[test]
fn python_commented_import_yields_nothing() {
    let catalog = extract_python("# import json\n# from os import path\nx = 1\n");
    assert!(catalog.imports().is_empty());
    assert_eq!(catalog.count_of(SymbolKind::Import), 0);
}

#[test]
fn python_fixture_imports_in_source_order() {
    let catalog = extract_ok(PYTHON_CONTAINER, LanguageId::Python, "pkg/container.py");
    let modules: Vec<&str> = catalog.imports().iter().map(|r| r.module.as_str()).collect();

    assert_eq!(
        modules,
        vec!["os", "numpy", "collections", "typing", "", "core.base"]
    );
}

#[test]
fn python_relative_imports_count_levels() {
    let catalog = extract_ok(PYTHON_CONTAINER, LanguageId::Python, "pkg/container.py");
    let records = catalog.imports();

    let siblings = &records[4];
    assert_eq!(siblings.relative_level, 1);
    assert!(siblings.is_relative());
    assert_eq!(siblings.name_pairs(), vec![("siblings", None)]);

    let base = &records[5];
    assert_eq!(base.relative_level, 2);
    assert_eq!(base.name_pairs(), vec![("Base", None), ("Mixin", Some("M"))]);
}

#[test]
fn python_multi_module_import_splits_records() {
    let catalog = extract_python("import os, sys as system\n");
    let records = catalog.imports();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].module, "os");
    assert_eq!(records[0].alias, None);
    assert_eq!(records[1].module, "sys");
    assert_eq!(records[1].alias.as_deref(), Some("system"));
}

#[test]
fn python_dotted_import_binds_first_segment() {
    let catalog = extract_python("import os.path\nimport xml.etree.ElementTree as ET\n");
    let records = catalog.imports();

    assert_eq!(records[0].module, "os.path");
    assert_eq!(records[0].alias, None);
    assert_eq!(records[1].module, "xml.etree.ElementTree");

    let names = child_names(catalog.root(), SymbolKind::Import);
    assert_eq!(names, vec!["os", "ET"]);
    assert_eq!(find(&catalog, "sample.os").signature, "import os.path");
}

#[test]
fn python_future_import_is_recorded() {
    let catalog = extract_python("from __future__ import annotations, division as d\n");
    let records = catalog.imports();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].module, "__future__");
    assert_eq!(records[0].relative_level, 0);
    assert_eq!(
        records[0].name_pairs(),
        vec![("annotations", None), ("division", Some("d"))]
    );
    assert!(catalog.find("sample.annotations").is_some());
    assert!(catalog.find("sample.d").is_some());
}

#[test]
fn python_wildcard_import() {
    let catalog = extract_python("from os.path import *\n");
    let record = &catalog.imports()[0];

    assert_eq!(record.module, "os.path");
    assert_eq!(record.name_pairs(), vec![("*", None)]);
    assert!(record.imported_names[0].is_wildcard());
    assert!(catalog.find("sample.os.path.*").is_some());
}

#[test]
fn python_import_symbols_use_bound_names() {
    let catalog = extract_ok(PYTHON_CONTAINER, LanguageId::Python, "pkg/container.py");
    let names = child_names(catalog.root(), SymbolKind::Import);

    assert_eq!(
        names,
        vec!["os", "np", "OD", "Callable", "Generic", "TypeVar", "siblings", "Base", "M"]
    );
    assert_eq!(find(&catalog, "container.np").signature, "import numpy as np");
    assert_eq!(
        find(&catalog, "container.M").signature,
        "from ..core.base import Base, Mixin as M"
    );
}

#[test]
fn python_function_level_import_belongs_to_function() {
    let source = r#"
def load():
    import json
    return json
"#;
    let catalog = extract_python(source);
    let load = find(&catalog, "sample.load");

    assert_eq!(child_names(load, SymbolKind::Import), vec!["json"]);
    assert_eq!(catalog.imports().len(), 1);
}

#[test]
fn python_rebinding_import_warns() {
    let catalog = extract_python("import os\nimport os\n");

    assert_eq!(catalog.imports().len(), 2);
    assert_eq!(child_names(catalog.root(), SymbolKind::Import), vec!["os"]);
    assert_eq!(catalog.diagnostics().len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Other languages
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn typescript_imports() {
    let catalog = extract_ok(TYPESCRIPT_SERVICE, LanguageId::TypeScript, "src/service.ts");
    let records = catalog.imports();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].module, "fs");
    assert_eq!(
        records[0].name_pairs(),
        vec![("readFile", None), ("writeFile", Some("write"))]
    );

    assert_eq!(records[1].module, "path");
    assert_eq!(records[1].alias.as_deref(), Some("path"));

    assert_eq!(records[2].module, "defaults");
    assert_eq!(records[2].relative_level, 1);
    assert_eq!(records[2].name_pairs(), vec![("default", Some("Default"))]);

    assert_eq!(records[3].module, "polyfills");
    assert_eq!(records[3].relative_level, 2);

    assert_eq!(
        child_names(catalog.root(), SymbolKind::Import),
        vec!["readFile", "write", "path", "Default"]
    );
}

#[test]
fn typescript_reexports_are_records_without_bindings() {
    let source = r#"
import { helper } from "./helpers";
export { a, b as c } from "./util";
export * from "../all";
export * as ns from "./ns";
export { local };
export const x = 1;
"#;
    let catalog = extract_ok(source, LanguageId::TypeScript, "src/index.ts");
    let records = catalog.imports();

    assert_eq!(records.len(), 4);
    assert!(!records[0].reexport);

    let util = &records[1];
    assert!(util.reexport);
    assert_eq!(util.module, "util");
    assert_eq!(util.relative_level, 1);
    assert_eq!(util.name_pairs(), vec![("a", None), ("b", Some("c"))]);

    let all = &records[2];
    assert!(all.reexport);
    assert_eq!(all.module, "all");
    assert_eq!(all.relative_level, 2);
    assert!(all.imported_names[0].is_wildcard());

    let ns = &records[3];
    assert!(ns.reexport);
    assert_eq!(ns.module, "ns");
    assert_eq!(ns.alias.as_deref(), Some("ns"));
    assert!(ns.imported_names.is_empty());

    assert_eq!(child_names(catalog.root(), SymbolKind::Import), vec!["helper"]);
}

#[test]
fn go_imports() {
    let catalog = extract_ok(GO_STORE, LanguageId::Go, "store/store.go");
    let records = catalog.imports();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].module, "fmt");
    assert_eq!(records[1].module, "net/http");
    assert_eq!(records[1].alias.as_deref(), Some("h"));
    assert_eq!(child_names(catalog.root(), SymbolKind::Import), vec!["fmt", "h"]);
}

#[test]
fn rust_use_declarations() {
    let catalog = extract_ok(RUST_BUFFER, LanguageId::Rust, "src/buffer.rs");
    let records = catalog.imports();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].module, "std::collections::HashMap");
    assert!(records[0].imported_names.is_empty());

    assert_eq!(records[1].module, "std::io");
    assert_eq!(
        records[1].name_pairs(),
        vec![("Read", Some("IoRead")), ("Write", None)]
    );

    assert_eq!(records[2].module, "util");
    assert_eq!(records[2].relative_level, 2);

    assert!(catalog.find("buffer.HashMap").is_some());
    assert!(catalog.find("buffer.IoRead").is_some());
}

#[test]
fn java_imports() {
    let catalog = extract_ok(JAVA_REPOSITORY, LanguageId::Java, "Repository.java");
    let records = catalog.imports();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].module, "java.util.List");
    assert!(catalog.find("Repository.List").is_some());
    assert_eq!(records[1].module, "java.util");
    assert_eq!(records[1].name_pairs(), vec![("*", None)]);
}
