//! Import records

use serde::{Deserialize, Serialize};

use super::span::Location;

/// One `(name, alias?)` pair of a from-style import
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportedName {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }

    /// The name this import binds in the importing scope
    pub fn bound_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn is_wildcard(&self) -> bool {
        self.name == "*"
    }
}

/// Structured import statement
///
/// `module` may be empty for a pure relative import (`from . import x`).
/// `imported_names` is empty for plain module imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub module: String,
    pub imported_names: Vec<ImportedName>,
    pub alias: Option<String>,
    pub relative_level: u32,
    /// `export { a } from './m'`: names pass through, nothing is bound locally
    #[serde(default)]
    pub reexport: bool,
    pub location: Location,
}

impl ImportRecord {
    pub fn new(module: impl Into<String>, location: Location) -> Self {
        Self {
            module: module.into(),
            imported_names: Vec::new(),
            alias: None,
            relative_level: 0,
            reexport: false,
            location,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.relative_level > 0
    }

    /// `(name, alias)` pairs as plain string slices
    pub fn name_pairs(&self) -> Vec<(&str, Option<&str>)> {
        self.imported_names
            .iter()
            .map(|n| (n.name.as_str(), n.alias.as_deref()))
            .collect()
    }
}
