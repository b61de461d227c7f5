//! Symbol model
//!
//! A `Symbol` is one declaration in the catalog tree. Every language maps
//! onto the same closed set of kinds.

use serde::{Deserialize, Serialize};

use super::span::Location;

/// Symbol kind (closed vocabulary shared by all languages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Module,
    Import,
    Function,
    Class,
    Method,
    Variable,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Module => "module",
            SymbolKind::Import => "import",
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
            SymbolKind::Variable => "variable",
        }
    }

    /// Can this kind own nested declarations?
    pub fn is_scope(&self) -> bool {
        matches!(
            self,
            SymbolKind::Module | SymbolKind::Class | SymbolKind::Function | SymbolKind::Method
        )
    }
}

/// Visibility as decided by the language's privacy rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// Generic type parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    pub bound: Option<String>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound.into()),
        }
    }
}

/// How a parameter binds arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Ordinary parameter (positional or keyword)
    Positional,
    /// Declared before a positional-only marker (`/`)
    PositionalOnly,
    /// Declared after a keyword-only marker or a variadic positional
    KeywordOnly,
    /// `*args`, `...rest`, `T...`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
}

/// Structured callable parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub annotation: Option<String>,
    pub default: Option<String>,
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
            kind: ParameterKind::Positional,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }
}

/// One declaration in the catalog tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub qualified_path: String,
    pub signature: String,
    pub location: Location,
    pub docstring: Option<String>,
    /// Declaration order, outermost first
    pub decorators: Vec<String>,
    pub generic_params: Vec<TypeParameter>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    pub visibility: Visibility,
    /// Ordered by source position
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(
        kind: SymbolKind,
        name: impl Into<String>,
        qualified_path: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            qualified_path: qualified_path.into(),
            signature: String::new(),
            location,
            docstring: None,
            decorators: Vec::new(),
            generic_params: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            visibility: Visibility::Public,
            children: Vec::new(),
        }
    }

    /// Direct children of the given kind, in source order
    pub fn children_of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&Symbol> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Pre-order walk over this symbol and all descendants
    pub fn walk(&self) -> Vec<&Symbol> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(symbol) = stack.pop() {
            out.push(symbol);
            stack.extend(symbol.children.iter().rev());
        }
        out
    }

    /// Names of the generic parameters, in declaration order
    pub fn generic_names(&self) -> Vec<&str> {
        self.generic_params.iter().map(|p| p.name.as_str()).collect()
    }
}
