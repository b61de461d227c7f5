//! Grammar Registry
//!
//! Maps each `LanguageId` to its parser grammar, compiled capture query, tag
//! map, node taxonomy and docstring strategy. Registration compiles queries
//! eagerly so a broken pattern surfaces at startup, never mid-extraction.
//!
//! The registry is immutable once built. A process-wide instance can be
//! installed exactly once and then read concurrently without locking.

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use tree_sitter::{Language, Query};

use crate::errors::{RegistryError, Result, SymbolError};
use crate::features::grammar::domain::{CaptureRole, LanguageId, NodeTaxonomy, TagMap};
use crate::features::grammar::ports::DocstringStrategy;
use crate::features::grammar::plugins;

// ═══════════════════════════════════════════════════════════════════════════
// Registration Input
// ═══════════════════════════════════════════════════════════════════════════

/// Query text for one language
///
/// `required` is the language's query file and must compile as a whole.
/// Each `optional` pattern is tried on its own and dropped with a warning if
/// the grammar version does not know its node kinds or fields.
#[derive(Debug, Clone, Copy)]
pub struct QuerySet {
    pub required: &'static str,
    pub optional: &'static [&'static str],
}

impl QuerySet {
    pub const fn new(required: &'static str) -> Self {
        Self {
            required,
            optional: &[],
        }
    }

    pub const fn with_optional(mut self, optional: &'static [&'static str]) -> Self {
        self.optional = optional;
        self
    }
}

/// Everything needed to register a language
pub struct LanguageGrammar {
    pub language: LanguageId,
    pub ts_language: Language,
    pub queries: QuerySet,
    pub tags: TagMap,
    pub taxonomy: NodeTaxonomy,
    pub docstrings: Box<dyn DocstringStrategy>,
}

/// Query text containing nothing but comments and whitespace
fn is_query_empty(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with(';')
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Descriptor
// ═══════════════════════════════════════════════════════════════════════════

/// A registered, compiled language
pub struct GrammarDescriptor {
    language: LanguageId,
    ts_language: Language,
    query: Query,
    capture_roles: Vec<Option<CaptureRole>>,
    tags: TagMap,
    taxonomy: NodeTaxonomy,
    docstrings: Box<dyn DocstringStrategy>,
    dropped_patterns: usize,
}

impl GrammarDescriptor {
    fn compile(grammar: LanguageGrammar) -> std::result::Result<Self, RegistryError> {
        let LanguageGrammar {
            language,
            ts_language,
            queries,
            tags,
            taxonomy,
            docstrings,
        } = grammar;

        let mut text = String::new();
        if !is_query_empty(queries.required) {
            Query::new(&ts_language, queries.required).map_err(|source| {
                RegistryError::QueryCompile {
                    language: language.name().to_string(),
                    section: "required".to_string(),
                    source,
                }
            })?;
            text.push_str(queries.required);
        }

        let mut dropped_patterns = 0;
        for (index, pattern) in queries.optional.iter().enumerate() {
            if is_query_empty(pattern) {
                continue;
            }
            match Query::new(&ts_language, pattern) {
                Ok(_) => {
                    text.push('\n');
                    text.push_str(pattern);
                }
                Err(err) => {
                    dropped_patterns += 1;
                    tracing::warn!(
                        language = %language,
                        pattern = index,
                        error = %err,
                        "Dropping optional capture pattern"
                    );
                }
            }
        }

        if is_query_empty(&text) {
            return Err(RegistryError::EmptyQuerySet(language.name().to_string()));
        }

        let query =
            Query::new(&ts_language, &text).map_err(|source| RegistryError::QueryCompile {
                language: language.name().to_string(),
                section: "combined".to_string(),
                source,
            })?;

        let mut capture_roles = Vec::with_capacity(query.capture_names().len());
        for name in query.capture_names() {
            let name: &str = name.as_ref();
            let role = tags.role_of(name);
            if role.is_none() && !TagMap::is_helper(name) {
                return Err(RegistryError::UnmappedCapture {
                    language: language.name().to_string(),
                    capture: name.to_string(),
                });
            }
            capture_roles.push(role);
        }

        tracing::debug!(
            language = %language,
            patterns = query.pattern_count(),
            dropped = dropped_patterns,
            docstrings = docstrings.name(),
            "Registered grammar"
        );

        Ok(Self {
            language,
            ts_language,
            query,
            capture_roles,
            tags,
            taxonomy,
            docstrings,
            dropped_patterns,
        })
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn ts_language(&self) -> &Language {
        &self.ts_language
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Role of each capture, indexed by capture index (`None` for helpers)
    pub fn capture_roles(&self) -> &[Option<CaptureRole>] {
        &self.capture_roles
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn taxonomy(&self) -> &NodeTaxonomy {
        &self.taxonomy
    }

    pub fn docstrings(&self) -> &dyn DocstringStrategy {
        self.docstrings.as_ref()
    }

    /// Optional patterns rejected by this grammar version
    pub fn dropped_patterns(&self) -> usize {
        self.dropped_patterns
    }
}

impl std::fmt::Debug for GrammarDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarDescriptor")
            .field("language", &self.language)
            .field("patterns", &self.query.pattern_count())
            .field("dropped_patterns", &self.dropped_patterns)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════════

/// Mutable phase of the registry
#[derive(Debug, Default)]
pub struct GrammarRegistryBuilder {
    grammars: FxHashMap<LanguageId, GrammarDescriptor>,
}

impl GrammarRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and add a language
    pub fn register(&mut self, grammar: LanguageGrammar) -> std::result::Result<&mut Self, RegistryError> {
        if self.grammars.contains_key(&grammar.language) {
            return Err(RegistryError::DuplicateLanguage(
                grammar.language.name().to_string(),
            ));
        }
        let descriptor = GrammarDescriptor::compile(grammar)?;
        self.grammars.insert(descriptor.language, descriptor);
        Ok(self)
    }

    pub fn build(self) -> GrammarRegistry {
        GrammarRegistry {
            grammars: self.grammars,
        }
    }
}

/// Immutable language registry
pub struct GrammarRegistry {
    grammars: FxHashMap<LanguageId, GrammarDescriptor>,
}

impl GrammarRegistry {
    pub fn builder() -> GrammarRegistryBuilder {
        GrammarRegistryBuilder::new()
    }

    /// Descriptor for a language
    pub fn lookup(&self, language: LanguageId) -> Result<&GrammarDescriptor> {
        self.grammars
            .get(&language)
            .ok_or_else(|| SymbolError::UnsupportedLanguage(language.name().to_string()))
    }

    /// Descriptor for a language given by name (`"python"`, `"ts"`)
    pub fn lookup_name(&self, name: &str) -> Result<&GrammarDescriptor> {
        let language: LanguageId = name.parse()?;
        self.lookup(language)
    }

    /// Descriptor for a file extension
    pub fn lookup_extension(&self, ext: &str) -> Option<&GrammarDescriptor> {
        LanguageId::from_extension(ext).and_then(|lang| self.grammars.get(&lang))
    }

    pub fn supports(&self, language: LanguageId) -> bool {
        self.grammars.contains_key(&language)
    }

    /// Registered languages, in `LanguageId` order
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut languages: Vec<LanguageId> = self.grammars.keys().copied().collect();
        languages.sort();
        languages
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

impl std::fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}

/// Registry with every built-in language
pub fn create_builtin_registry() -> std::result::Result<GrammarRegistry, RegistryError> {
    let mut builder = GrammarRegistryBuilder::new();
    for grammar in plugins::builtin_grammars() {
        builder.register(grammar)?;
    }
    let registry = builder.build();
    tracing::info!(
        languages = registry.len(),
        patterns = registry
            .grammars
            .values()
            .map(|d| d.query().pattern_count())
            .sum::<usize>(),
        "Built-in grammar registry ready"
    );
    Ok(registry)
}

// ═══════════════════════════════════════════════════════════════════════════
// Process-wide Installation
// ═══════════════════════════════════════════════════════════════════════════

static INSTALLED: OnceCell<GrammarRegistry> = OnceCell::new();

/// Install the process-wide registry; fails if one is already installed
pub fn install(registry: GrammarRegistry) -> std::result::Result<&'static GrammarRegistry, RegistryError> {
    INSTALLED
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    INSTALLED.get().ok_or(RegistryError::NotInstalled)
}

/// Install the built-in registry, or return the one already installed
pub fn install_builtin() -> std::result::Result<&'static GrammarRegistry, RegistryError> {
    INSTALLED.get_or_try_init(create_builtin_registry)
}

/// The installed registry, if any
pub fn installed() -> Option<&'static GrammarRegistry> {
    INSTALLED.get()
}
