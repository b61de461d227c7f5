//! Per-language node taxonomy
//!
//! Everything the builder needs to know about a grammar's node kinds, kept
//! as data so that no downstream code matches on language.

/// How a grammar spells parameters
#[derive(Debug, Clone, Copy)]
pub struct ParameterShape {
    /// Fields holding the parameter name (may repeat, e.g. Go `a, b int`)
    pub name_fields: &'static [&'static str],
    /// Kinds that are a name by themselves, or whose first such child is
    pub name_kinds: &'static [&'static str],
    pub type_fields: &'static [&'static str],
    /// Take the first remaining named child as the type when no field matches
    pub type_fallback: bool,
    pub default_fields: &'static [&'static str],
    /// `*args`, `...rest`, `args ...T`
    pub var_positional_kinds: &'static [&'static str],
    /// `**kwargs`
    pub var_keyword_kinds: &'static [&'static str],
    /// Bare `*`: everything after is keyword-only
    pub keyword_only_separator_kinds: &'static [&'static str],
    /// Bare `/`: everything before is positional-only
    pub positional_only_separator_kinds: &'static [&'static str],
    /// Children never treated as name or type (modifiers, annotations)
    pub skip_kinds: &'static [&'static str],
}


/// How a grammar spells generic parameters
#[derive(Debug, Clone, Copy)]
pub struct GenericShape {
    pub name_fields: &'static [&'static str],
    pub name_kinds: &'static [&'static str],
    pub bound_fields: &'static [&'static str],
    pub bound_kinds: &'static [&'static str],
}


/// How relative imports are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeMarker {
    /// No relative imports
    None,
    /// Python: each leading `.` is one level up
    LeadingDots,
    /// ES modules: `./x` is level 1, each `../` one more
    PathDots,
    /// Rust: `self::` is level 1, each `super::` one more
    SelfSuper,
}

/// Name bound by an import of a whole module without an alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainBinding {
    /// ES side-effect imports bind nothing
    Nothing,
    /// Python: `import os.path` binds `os`
    FirstSegment,
    /// Java, Go, Rust: `import java.util.List` binds `List`
    LastSegment,
}

/// How import statements bind names
#[derive(Debug, Clone, Copy)]
pub struct ImportShape {
    pub relative: RelativeMarker,
    /// Separator inside module paths
    pub path_separator: &'static str,
    pub plain_binding: PlainBinding,
    /// Module paths are string literals
    pub quoted_module: bool,
}

/// Which declarations count as private
#[derive(Debug, Clone, Copy)]
pub enum PrivacyRule {
    /// `_name` is private; `__dunder__` is not
    UnderscorePrefix,
    /// Lowercase first letter is unexported
    Capitalization,
    /// Private when a modifier child contains one of the words
    PrivateModifier {
        modifier_kinds: &'static [&'static str],
        private_words: &'static [&'static str],
    },
    /// Private unless a modifier child of these kinds is present
    RequiresModifier {
        modifier_kinds: &'static [&'static str],
    },
}

/// Node-kind knowledge of one grammar
#[derive(Debug, Clone, Copy)]
pub struct NodeTaxonomy {
    pub comment_kinds: &'static [&'static str],
    pub string_kinds: &'static [&'static str],
    /// Statement node wrapping a bare expression
    pub expression_statement_kinds: &'static [&'static str],
    /// Nodes that wrap a declaration without changing it
    /// (`decorated_definition`, `export_statement`)
    pub wrapper_kinds: &'static [&'static str],
    /// Sibling nodes preceding a declaration that act as decorators
    pub leading_decorator_kinds: &'static [&'static str],
    pub parameters: ParameterShape,
    pub generics: GenericShape,
    pub imports: ImportShape,
    pub privacy: PrivacyRule,
}

impl NodeTaxonomy {
    pub fn is_comment(&self, kind: &str) -> bool {
        self.comment_kinds.contains(&kind)
    }

    pub fn is_wrapper(&self, kind: &str) -> bool {
        self.wrapper_kinds.contains(&kind)
    }
}
