//! Capture tag vocabulary
//!
//! Query files tag captures with dialect names (`@function.name`,
//! `@annotation`, `@import.alias`). A language's `TagMap` translates those
//! names into the shared roles below, so nothing downstream of the
//! classifier ever looks at a language-specific tag.

/// Shared fragment vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FragmentRole {
    Name,
    Body,
    Parameter,
    ReturnType,
    Decorator,
    GenericParam,
    DocCandidate,
    /// Method receiver (Go); qualifies the method by the receiver type
    Receiver,
    /// Second qualifier of a scope (the trait of a Rust trait impl)
    Qualifier,
}

/// Declaration kind of an anchor capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Module,
    Class,
    Callable,
    Variable,
    /// Qualifies members without being a symbol itself (Rust `impl`)
    Scope,
}

/// Part of an import statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportPart {
    Module,
    Name,
    /// Pairs with the `Name` of the same match, else with the `Module`
    Alias,
    /// Whole-module alias regardless of match (`import * as ns`, Go `f "fmt"`)
    ModuleAlias,
    Wildcard,
    /// ES default import binding
    DefaultName,
    /// Marks a statement that re-exports rather than binds (`export ... from`)
    Reexport,
}

/// What a capture means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureRole {
    /// The declaration node every other capture of the match belongs to
    Declaration(DeclarationKind),
    /// The statement node grouping import parts
    ImportStatement,
    Fragment(FragmentRole),
    Import(ImportPart),
}

impl CaptureRole {
    pub fn is_anchor(&self) -> bool {
        matches!(self, CaptureRole::Declaration(_) | CaptureRole::ImportStatement)
    }
}

/// Tag-to-role mapping for one language
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    entries: Vec<(&'static str, CaptureRole)>,
}

impl TagMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tags shared by every built-in query file
    pub fn standard() -> Self {
        use CaptureRole::*;
        use FragmentRole as F;

        let entries = vec![
            ("module.definition", Declaration(DeclarationKind::Module)),
            ("class.definition", Declaration(DeclarationKind::Class)),
            ("function.definition", Declaration(DeclarationKind::Callable)),
            ("variable.definition", Declaration(DeclarationKind::Variable)),
            ("scope.definition", Declaration(DeclarationKind::Scope)),
            ("import.statement", ImportStatement),
            ("module.name", Fragment(F::Name)),
            ("class.name", Fragment(F::Name)),
            ("function.name", Fragment(F::Name)),
            ("variable.name", Fragment(F::Name)),
            ("scope.name", Fragment(F::Name)),
            ("scope.qualifier", Fragment(F::Qualifier)),
            ("module.body", Fragment(F::Body)),
            ("class.body", Fragment(F::Body)),
            ("function.body", Fragment(F::Body)),
            ("function.parameter", Fragment(F::Parameter)),
            ("function.return", Fragment(F::ReturnType)),
            ("variable.type", Fragment(F::ReturnType)),
            ("function.receiver", Fragment(F::Receiver)),
            ("class.generic", Fragment(F::GenericParam)),
            ("function.generic", Fragment(F::GenericParam)),
            ("decorator", Fragment(F::Decorator)),
            ("import.module", Import(ImportPart::Module)),
            ("import.name", Import(ImportPart::Name)),
            ("import.alias", Import(ImportPart::Alias)),
            ("import.module_alias", Import(ImportPart::ModuleAlias)),
            ("import.wildcard", Import(ImportPart::Wildcard)),
            ("import.default", Import(ImportPart::DefaultName)),
            ("import.reexport", Import(ImportPart::Reexport)),
        ];
        Self { entries }
    }

    /// Add or replace a mapping
    pub fn with(mut self, tag: &'static str, role: CaptureRole) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == tag) {
            entry.1 = role;
        } else {
            self.entries.push((tag, role));
        }
        self
    }

    pub fn role_of(&self, tag: &str) -> Option<CaptureRole> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, role)| *role)
    }

    /// Helper captures (`@_name`) exist only for predicates
    pub fn is_helper(tag: &str) -> bool {
        tag.starts_with('_')
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
