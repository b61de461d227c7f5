//! Symbol Builder
//!
//! Groups classified fragments by their declaration node and turns each
//! group into a [`Symbol`]. Nesting comes from the syntax tree: a
//! declaration's parent is the nearest enclosing declaration node.
//!
//! Scope declarations (Rust `impl` blocks) contribute a qualifier to the
//! paths of their members but never become symbols; their members are
//! attached to the scope's own parent. Go receivers qualify methods the
//! same way.

use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::features::classify::{AnchorKind, Classification, Fragment};
use crate::features::grammar::domain::{DeclarationKind, FragmentRole, NodeTaxonomy};
use crate::features::grammar::infrastructure::registry::GrammarDescriptor;
use crate::features::grammar::ports::DocContext;
use crate::features::imports::ResolvedImport;
use crate::features::signature::{format_generics, format_signature, SignatureParts};
use crate::shared::models::{Location, Symbol, SymbolKind, Visibility};
use crate::shared::utils::text::collapse_whitespace;
use crate::shared::utils::tree_sitter::{child_by_any_field, node_text, node_to_span};
use crate::shared::utils::ScopeStack;

use super::parameters::{decompose_generics, decompose_parameters, normalize_annotation};
use super::visibility::visibility_of;

// ═══════════════════════════════════════════════════════════════════════════
// Output
// ═══════════════════════════════════════════════════════════════════════════

/// A symbol before tree assembly
#[derive(Debug, Clone)]
pub struct BuiltSymbol {
    pub symbol: Symbol,
    /// Declaration node id (import anchors for import symbols)
    pub node_id: usize,
    /// Declaration node id of the parent symbol; `None` for the module root
    pub parent_id: Option<usize>,
    pub start_byte: usize,
    /// Private and excluded by configuration
    pub hidden: bool,
}

/// Root module symbol plus every other symbol, flat
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub root: Symbol,
    pub symbols: Vec<BuiltSymbol>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Declaration Groups
// ═══════════════════════════════════════════════════════════════════════════

struct Declaration<'a> {
    kind: DeclarationKind,
    node: Node<'a>,
    fragments: Vec<Fragment<'a>>,
}

impl<'a> Declaration<'a> {
    fn new(kind: DeclarationKind, node: Node<'a>) -> Self {
        Self {
            kind,
            node,
            fragments: Vec::new(),
        }
    }

    fn add(&mut self, fragment: Fragment<'a>) {
        let duplicate = self
            .fragments
            .iter()
            .any(|f| f.role == fragment.role && f.node.id() == fragment.node.id());
        if !duplicate {
            self.fragments.push(fragment);
        }
    }

    /// Fragment nodes of one role, in source order
    fn nodes(&self, role: FragmentRole) -> Vec<Node<'a>> {
        let mut nodes: Vec<Node<'a>> = self
            .fragments
            .iter()
            .filter(|f| f.role == role)
            .map(|f| f.node)
            .collect();
        nodes.sort_by_key(|n| n.start_byte());
        nodes
    }

    fn first(&self, role: FragmentRole) -> Option<&Fragment<'a>> {
        self.fragments
            .iter()
            .filter(|f| f.role == role)
            .min_by_key(|f| f.node.start_byte())
    }
}

/// Scope qualifier text: `&mut Container<T>` becomes `Container`
pub fn normalize_scope_name(text: &str) -> String {
    let mut name = text.trim();
    loop {
        let stripped = name
            .trim_start_matches(['&', '*'])
            .trim_start_matches("mut ")
            .trim_start();
        if stripped == name {
            break;
        }
        name = stripped;
    }
    let end = name.find(['<', '[', '(']).unwrap_or(name.len());
    collapse_whitespace(&name[..end])
}

/// Trait qualifier text: `fmt::Display` becomes `Display`, `From<u8>` stays
pub fn normalize_trait_name(text: &str) -> String {
    let text = collapse_whitespace(text);
    let generics = text.find('<').unwrap_or(text.len());
    let start = text[..generics].rfind("::").map_or(0, |i| i + 2);
    text[start..].to_string()
}

/// Decorator text without `@` or `#[...]` delimiters
pub fn normalize_decorator(text: &str) -> String {
    let trimmed = text.trim();
    let inner = if let Some(attribute) = trimmed.strip_prefix("#[") {
        attribute.strip_suffix(']').unwrap_or(attribute)
    } else {
        trimmed.strip_prefix('@').unwrap_or(trimmed)
    };
    collapse_whitespace(inner)
}

// ═══════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════

/// Builds symbols for one file
pub struct SymbolBuilder<'b> {
    descriptor: &'b GrammarDescriptor,
    file_path: &'b str,
    module_name: &'b str,
    source: &'b str,
    include_private: bool,
}

/// Per-run lookup state
struct Scopes<'a> {
    decls: FxHashMap<usize, Declaration<'a>>,
    names: FxHashMap<usize, String>,
    segments: FxHashMap<usize, Vec<String>>,
}

impl<'b> SymbolBuilder<'b> {
    pub fn new(
        descriptor: &'b GrammarDescriptor,
        file_path: &'b str,
        module_name: &'b str,
        source: &'b str,
        include_private: bool,
    ) -> Self {
        Self {
            descriptor,
            file_path,
            module_name,
            source,
            include_private,
        }
    }

    fn taxonomy(&self) -> &NodeTaxonomy {
        self.descriptor.taxonomy()
    }

    pub fn build<'a>(
        &self,
        root: Node<'a>,
        classification: &Classification<'a>,
        imports: &[ResolvedImport<'a>],
    ) -> BuildOutput {
        let (mut decls, order) = self.group(root, classification);
        let root_decl = decls.remove(&root.id());
        let root_symbol = self.build_root(root, root_decl.as_ref());

        let mut scopes = Scopes {
            names: FxHashMap::default(),
            segments: FxHashMap::default(),
            decls,
        };
        for id in &order {
            let Some(decl) = scopes.decls.get(id) else {
                continue;
            };
            match self.declaration_name(decl) {
                Some(name) => {
                    scopes.names.insert(*id, name);
                }
                None => tracing::debug!(
                    file_path = %self.file_path,
                    kind = decl.node.kind(),
                    line = decl.node.start_position().row + 1,
                    "Skipping declaration without a name"
                ),
            }
        }
        for id in &order {
            if scopes.names.contains_key(id) {
                self.segments_of(*id, &mut scopes);
            }
        }

        let mut symbols = Vec::with_capacity(order.len());
        for id in &order {
            let (Some(decl), Some(name)) = (scopes.decls.get(id), scopes.names.get(id)) else {
                continue;
            };
            if decl.kind == DeclarationKind::Scope {
                continue;
            }
            symbols.push(self.build_declaration(decl, name, &scopes));
        }

        for import in imports {
            symbols.extend(self.build_import_symbols(import, &scopes));
        }

        tracing::trace!(
            file_path = %self.file_path,
            symbols = symbols.len(),
            "Built symbols"
        );
        BuildOutput {
            root: root_symbol,
            symbols,
        }
    }

    /// Group declaration fragments by anchor, in first-seen order
    fn group<'a>(
        &self,
        root: Node<'a>,
        classification: &Classification<'a>,
    ) -> (FxHashMap<usize, Declaration<'a>>, Vec<usize>) {
        let mut decls: FxHashMap<usize, Declaration<'a>> = FxHashMap::default();
        let mut order: Vec<usize> = Vec::new();

        for m in classification.declarations() {
            let (kind, node) = match m.anchor {
                Some(anchor) => match anchor.kind {
                    AnchorKind::Declaration(kind) => (kind, anchor.node),
                    AnchorKind::Import => continue,
                },
                None => (DeclarationKind::Module, root),
            };
            let decl = decls.entry(node.id()).or_insert_with(|| {
                order.push(node.id());
                Declaration::new(kind, node)
            });
            for fragment in &m.fragments {
                decl.add(*fragment);
            }
        }

        (decls, order)
    }

    fn declaration_name(&self, decl: &Declaration<'_>) -> Option<String> {
        let text = decl.first(FragmentRole::Name)?.text;
        if decl.kind != DeclarationKind::Scope {
            let name = collapse_whitespace(text);
            return (!name.is_empty()).then_some(name);
        }

        let name = normalize_scope_name(text);
        if name.is_empty() {
            return None;
        }
        // Trait impls qualify as `Type.Trait`
        match decl.first(FragmentRole::Qualifier).map(|f| normalize_trait_name(f.text)) {
            Some(qualifier) if !qualifier.is_empty() => Some(format!("{name}.{qualifier}")),
            _ => Some(name),
        }
    }

    /// Nearest named declaration strictly enclosing `node`
    fn enclosing(node: Node<'_>, scopes: &Scopes<'_>) -> Option<usize> {
        let mut current = node.parent();
        while let Some(parent) = current {
            if scopes.names.contains_key(&parent.id()) {
                return Some(parent.id());
            }
            current = parent.parent();
        }
        None
    }

    /// Nearest enclosing declaration that is emitted as a symbol
    fn emitting_parent(node: Node<'_>, scopes: &Scopes<'_>) -> Option<usize> {
        let mut current = Self::enclosing(node, scopes);
        while let Some(id) = current {
            match scopes.decls.get(&id) {
                Some(decl) if decl.kind == DeclarationKind::Scope => {
                    current = Self::enclosing(decl.node, scopes);
                }
                _ => return Some(id),
            }
        }
        None
    }

    fn receiver_type(&self, decl: &Declaration<'_>) -> Option<String> {
        let receiver = decl.first(FragmentRole::Receiver)?;
        let type_node = child_by_any_field(receiver.node, self.taxonomy().parameters.type_fields)?;
        let name = normalize_scope_name(node_text(type_node, self.source));
        (!name.is_empty()).then_some(name)
    }

    /// Path segments below the module, memoized
    fn segments_of(&self, id: usize, scopes: &mut Scopes<'_>) -> Vec<String> {
        if let Some(done) = scopes.segments.get(&id) {
            return done.clone();
        }
        let Some(decl) = scopes.decls.get(&id) else {
            return Vec::new();
        };
        let node = decl.node;
        let mut own = Vec::with_capacity(2);
        if let Some(receiver) = self.receiver_type(decl) {
            own.push(receiver);
        }
        if let Some(name) = scopes.names.get(&id) {
            own.push(name.clone());
        }

        let mut segments = match Self::enclosing(node, scopes) {
            Some(parent) => self.segments_of(parent, scopes),
            None => Vec::new(),
        };
        segments.extend(own);
        scopes.segments.insert(id, segments.clone());
        segments
    }

    fn qualified_path(&self, segments: &[String]) -> String {
        ScopeStack::rooted(self.module_name, segments).path()
    }

    fn wrapper_of<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        let mut wrapper = None;
        let mut current = node.parent();
        while let Some(parent) = current {
            if !self.taxonomy().is_wrapper(parent.kind()) {
                break;
            }
            wrapper = Some(parent);
            current = parent.parent();
        }
        wrapper
    }

    fn symbol_kind(&self, decl: &Declaration<'_>, scopes: &Scopes<'_>) -> SymbolKind {
        match decl.kind {
            DeclarationKind::Module => SymbolKind::Module,
            DeclarationKind::Class => SymbolKind::Class,
            DeclarationKind::Variable => SymbolKind::Variable,
            DeclarationKind::Scope => SymbolKind::Class,
            DeclarationKind::Callable => {
                if decl.first(FragmentRole::Receiver).is_some() {
                    return SymbolKind::Method;
                }
                let enclosing_kind = Self::enclosing(decl.node, scopes)
                    .and_then(|id| scopes.decls.get(&id))
                    .map(|parent| parent.kind);
                match enclosing_kind {
                    Some(DeclarationKind::Class) | Some(DeclarationKind::Scope) => {
                        SymbolKind::Method
                    }
                    _ => SymbolKind::Function,
                }
            }
        }
    }

    /// Captured decorators plus decorator siblings (Rust attributes)
    fn decorators<'a>(&self, decl: &Declaration<'a>, wrapper: Option<Node<'a>>) -> Vec<String> {
        let taxonomy = self.taxonomy();
        let mut nodes = decl.nodes(FragmentRole::Decorator);

        if !taxonomy.leading_decorator_kinds.is_empty() {
            for start in std::iter::once(decl.node).chain(wrapper) {
                let mut current = start.prev_named_sibling();
                while let Some(sibling) = current {
                    if taxonomy.leading_decorator_kinds.contains(&sibling.kind()) {
                        if !nodes.iter().any(|n| n.id() == sibling.id()) {
                            nodes.push(sibling);
                        }
                    } else if !taxonomy.is_comment(sibling.kind()) {
                        break;
                    }
                    current = sibling.prev_named_sibling();
                }
            }
            nodes.sort_by_key(|n| n.start_byte());
        }

        nodes
            .into_iter()
            .map(|n| normalize_decorator(node_text(n, self.source)))
            .filter(|d| !d.is_empty())
            .collect()
    }

    fn docstring<'a>(
        &self,
        node: Node<'a>,
        wrapper: Option<Node<'a>>,
        candidates: &[Node<'a>],
    ) -> Option<String> {
        let ctx = DocContext {
            declaration: node,
            wrapper,
            candidates,
            source: self.source,
            taxonomy: self.taxonomy(),
        };
        self.descriptor.docstrings().extract(&ctx)
    }

    fn build_root(&self, root: Node<'_>, decl: Option<&Declaration<'_>>) -> Symbol {
        let location = Location::new(self.file_path, node_to_span(root));
        let mut symbol = Symbol::new(SymbolKind::Module, self.module_name, self.module_name, location);
        if let Some(decl) = decl {
            symbol.docstring = self.docstring(root, None, &decl.nodes(FragmentRole::DocCandidate));
        }
        symbol
    }

    fn build_declaration(&self, decl: &Declaration<'_>, name: &str, scopes: &Scopes<'_>) -> BuiltSymbol {
        let taxonomy = self.taxonomy();
        let node = decl.node;
        let id = node.id();
        let wrapper = self.wrapper_of(node);
        let segments = scopes.segments.get(&id).cloned().unwrap_or_default();
        let kind = self.symbol_kind(decl, scopes);

        let location = Location::new(self.file_path, node_to_span(node));
        let mut symbol = Symbol::new(kind, name, self.qualified_path(&segments), location);

        symbol.generic_params = decompose_generics(
            &decl.nodes(FragmentRole::GenericParam),
            &taxonomy.generics,
            taxonomy.comment_kinds,
            self.source,
        );
        symbol.decorators = self.decorators(decl, wrapper);
        symbol.docstring = self.docstring(node, wrapper, &decl.nodes(FragmentRole::DocCandidate));
        symbol.visibility = visibility_of(&taxonomy.privacy, name, node, wrapper, self.source);

        let annotation = decl
            .first(FragmentRole::ReturnType)
            .and_then(|f| normalize_annotation(f.text));

        match kind {
            SymbolKind::Function | SymbolKind::Method => {
                symbol.parameters = decompose_parameters(
                    &decl.nodes(FragmentRole::Parameter),
                    &taxonomy.parameters,
                    taxonomy.comment_kinds,
                    self.source,
                );
                symbol.return_type = annotation;
                symbol.signature = format_signature(&SignatureParts {
                    generics: &symbol.generic_params,
                    parameters: &symbol.parameters,
                    return_type: symbol.return_type.as_deref(),
                });
            }
            SymbolKind::Class => {
                symbol.signature = format_generics(&symbol.generic_params);
            }
            SymbolKind::Variable => {
                symbol.signature = annotation.unwrap_or_default();
            }
            SymbolKind::Module | SymbolKind::Import => {}
        }

        let hidden = symbol.visibility == Visibility::Private && !self.include_private;
        BuiltSymbol {
            symbol,
            node_id: id,
            parent_id: Self::emitting_parent(node, scopes),
            start_byte: node.start_byte(),
            hidden,
        }
    }

    fn build_import_symbols(&self, import: &ResolvedImport<'_>, scopes: &Scopes<'_>) -> Vec<BuiltSymbol> {
        let anchor = import.anchor;
        let parent_id = Self::emitting_parent(anchor, scopes);
        let segments = Self::enclosing(anchor, scopes)
            .and_then(|id| scopes.segments.get(&id))
            .cloned()
            .unwrap_or_default();
        let privacy = &self.taxonomy().privacy;

        import
            .bindings
            .iter()
            .map(|binding| {
                let mut path = segments.clone();
                path.push(binding.name.clone());
                let mut symbol = Symbol::new(
                    SymbolKind::Import,
                    binding.name.as_str(),
                    self.qualified_path(&path),
                    import.record.location.clone(),
                );
                symbol.signature = binding.signature.clone();
                symbol.visibility = visibility_of(privacy, &binding.name, anchor, None, self.source);

                let hidden = symbol.visibility == Visibility::Private && !self.include_private;
                BuiltSymbol {
                    symbol,
                    node_id: anchor.id(),
                    parent_id,
                    start_byte: anchor.start_byte(),
                    hidden,
                }
            })
            .collect()
    }
}
