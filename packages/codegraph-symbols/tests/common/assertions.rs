//! Custom assertions for catalog verification

use codegraph_symbols::{DiagnosticKind, Symbol, SymbolCatalog, SymbolKind};

/// Names of the direct children of `symbol` with the given kind
pub fn child_names(symbol: &Symbol, kind: SymbolKind) -> Vec<&str> {
    symbol.children_of_kind(kind).map(|s| s.name.as_str()).collect()
}

/// Look up a symbol by qualified path or fail with the available paths
pub fn find<'c>(catalog: &'c SymbolCatalog, qualified_path: &str) -> &'c Symbol {
    catalog.find(qualified_path).unwrap_or_else(|| {
        panic!(
            "Expected symbol '{qualified_path}', available: {:?}",
            catalog
                .symbols()
                .iter()
                .map(|s| s.qualified_path.as_str())
                .collect::<Vec<_>>()
        )
    })
}

pub fn assert_no_diagnostics(catalog: &SymbolCatalog) {
    assert!(
        catalog.diagnostics().is_empty(),
        "Expected no diagnostics, got: {:?}",
        catalog.diagnostics()
    );
}

pub fn assert_diagnostic_count(catalog: &SymbolCatalog, kind: DiagnosticKind, expected: usize) {
    let found = catalog.diagnostics_of(kind).count();
    assert_eq!(
        found,
        expected,
        "Expected {expected} {kind:?} diagnostics, got {found}: {:?}",
        catalog.diagnostics()
    );
}

pub fn assert_kind(symbol: &Symbol, kind: SymbolKind) {
    assert_eq!(
        symbol.kind, kind,
        "Expected '{}' to be {kind:?}, got {:?}",
        symbol.qualified_path, symbol.kind
    );
}
