//! Catalog Assembler
//!
//! Nests the flat builder output into the symbol tree.
//!
//! # Algorithm
//! 1. Drop hidden symbols (their subtrees go with them)
//! 2. Bucket the rest by parent declaration
//! 3. Per parent: sort by source position, enforce unique qualified paths
//! 4. Recurse into the survivors

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::errors::{Result, SymbolError};
use crate::features::symbols::BuiltSymbol;
use crate::shared::models::{Diagnostic, Symbol};

/// Assembled tree plus the duplicate warnings raised on the way
#[derive(Debug)]
pub struct Assembly {
    pub root: Symbol,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogAssembler {
    strict: bool,
}

impl CatalogAssembler {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Attach `symbols` under `root`
    ///
    /// Fails with [`SymbolError::DuplicateSymbol`] only in strict mode.
    pub fn assemble(&self, mut root: Symbol, symbols: Vec<BuiltSymbol>) -> Result<Assembly> {
        let total = symbols.len();
        let mut buckets: FxHashMap<Option<usize>, Vec<BuiltSymbol>> = FxHashMap::default();
        let mut hidden = 0usize;

        for built in symbols {
            if built.hidden {
                hidden += 1;
                continue;
            }
            buckets.entry(built.parent_id).or_default().push(built);
        }

        let mut diagnostics = Vec::new();
        root.children = self.attach(None, &mut buckets, &mut diagnostics)?;

        debug!(
            total,
            hidden,
            duplicates = diagnostics.len(),
            orphaned = buckets.values().map(Vec::len).sum::<usize>(),
            "Assembled symbol tree"
        );
        Ok(Assembly { root, diagnostics })
    }

    fn attach(
        &self,
        parent: Option<usize>,
        buckets: &mut FxHashMap<Option<usize>, Vec<BuiltSymbol>>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<Symbol>> {
        let Some(mut siblings) = buckets.remove(&parent) else {
            return Ok(Vec::new());
        };
        siblings.sort_by_key(|b| (b.start_byte, b.node_id));

        let survivors = self.dedupe(siblings, diagnostics)?;

        let mut children = Vec::with_capacity(survivors.len());
        let mut visited: FxHashSet<usize> = FxHashSet::default();
        for built in survivors {
            let mut symbol = built.symbol;
            if visited.insert(built.node_id) {
                symbol.children = self.attach(Some(built.node_id), buckets, diagnostics)?;
            }
            children.push(symbol);
        }
        Ok(children)
    }

    /// Keep the last of each qualified path, in source order
    fn dedupe(
        &self,
        siblings: Vec<BuiltSymbol>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<BuiltSymbol>> {
        let mut slots: Vec<Option<BuiltSymbol>> = Vec::with_capacity(siblings.len());
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();

        for built in siblings {
            let path = built.symbol.qualified_path.clone();
            if let Some(&earlier) = seen.get(&path) {
                let first = slots[earlier]
                    .take()
                    .map(|b| b.symbol.location)
                    .unwrap_or_else(|| built.symbol.location.clone());
                let second = built.symbol.location.clone();

                if self.strict {
                    return Err(SymbolError::DuplicateSymbol {
                        qualified_path: path,
                        first,
                        second,
                    });
                }
                warn!(
                    qualified_path = %path,
                    first = %first,
                    second = %second,
                    "Duplicate symbol; keeping the later definition"
                );
                diagnostics.push(Diagnostic::duplicate_symbol(
                    second.span,
                    format!("'{path}' redefined at {second}; earlier definition at {first} discarded"),
                ));
            }
            seen.insert(path, slots.len());
            slots.push(Some(built));
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
