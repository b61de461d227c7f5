//! Import Resolver
//!
//! Groups import captures by statement and turns each group into
//! [`ImportRecord`]s. Aliases pair with the name captured in the same match,
//! or with the module when the match has no name.
//!
//! Only syntactic import statements are matched, so commented-out imports
//! never produce records. Re-exports (`export { a } from './m'`) produce
//! records but bind no names.

use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::features::classify::{ClassifiedMatch, Classification};
use crate::features::grammar::domain::{ImportPart, ImportShape, PlainBinding, RelativeMarker};
use crate::shared::models::{ImportRecord, ImportedName, Location};
use crate::shared::utils::text::{collapse_whitespace, strip_quotes};
use crate::shared::utils::tree_sitter::node_to_span;

/// A name an import brings into scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub name: String,
    /// Canonical statement text, shared by every binding of one record
    pub signature: String,
}

/// One record plus what it binds
#[derive(Debug, Clone)]
pub struct ResolvedImport<'a> {
    pub record: ImportRecord,
    pub anchor: Node<'a>,
    pub bindings: Vec<ImportBinding>,
}

/// Capture parts of one statement, deduplicated by node
#[derive(Default)]
struct StatementParts {
    modules: Vec<ModulePart>,
    names: Vec<NamePart>,
    module_alias: Option<String>,
    reexport: bool,
}

struct ModulePart {
    id: usize,
    start: usize,
    text: String,
    alias: Option<String>,
}

struct NamePart {
    id: usize,
    start: usize,
    name: ImportedName,
}

impl StatementParts {
    fn upsert_module(&mut self, node: Node<'_>, text: String, alias: Option<String>) {
        match self.modules.iter_mut().find(|part| part.id == node.id()) {
            Some(part) => {
                if alias.is_some() {
                    part.alias = alias;
                }
            }
            None => self.modules.push(ModulePart {
                id: node.id(),
                start: node.start_byte(),
                text,
                alias,
            }),
        }
    }

    fn upsert_name(&mut self, node: Node<'_>, name: ImportedName) {
        match self.names.iter_mut().find(|part| part.id == node.id()) {
            Some(part) => {
                if name.alias.is_some() {
                    part.name.alias = name.alias;
                }
            }
            None => self.names.push(NamePart {
                id: node.id(),
                start: node.start_byte(),
                name,
            }),
        }
    }

    fn absorb(&mut self, m: &ClassifiedMatch<'_>) {
        let alias = m.part(ImportPart::Alias).map(|a| clean(a.text));
        let name = m.part(ImportPart::Name);

        if let Some(module) = m.part(ImportPart::Module) {
            let module_alias = if name.is_none() { alias.clone() } else { None };
            self.upsert_module(module.node, clean(module.text), module_alias);
        }
        if let Some(name) = name {
            self.upsert_name(name.node, ImportedName::new(clean(name.text), alias));
        }
        if let Some(wildcard) = m.part(ImportPart::Wildcard) {
            self.upsert_name(wildcard.node, ImportedName::new("*", None));
        }
        if let Some(default) = m.part(ImportPart::DefaultName) {
            self.upsert_name(
                default.node,
                ImportedName::new("default", Some(clean(default.text))),
            );
        }
        if let Some(module_alias) = m.part(ImportPart::ModuleAlias) {
            self.module_alias = Some(clean(module_alias.text));
        }
        self.reexport |= m.has_part(ImportPart::Reexport);
    }

    /// Source order, whatever order the patterns matched in
    fn sort(&mut self) {
        self.modules.sort_by_key(|part| part.start);
        self.names.sort_by_key(|part| part.start);
    }
}

fn clean(text: &str) -> String {
    collapse_whitespace(text)
}

/// Split a raw module path into (module, relative level)
pub fn split_relative(raw: &str, shape: &ImportShape) -> (String, u32) {
    match shape.relative {
        RelativeMarker::None => (raw.to_string(), 0),
        RelativeMarker::LeadingDots => {
            let rest = raw.trim_start_matches('.');
            let level = (raw.len() - rest.len()) as u32;
            (rest.to_string(), level)
        }
        RelativeMarker::PathDots => {
            let mut rest = raw;
            let mut level = 0u32;
            if rest == "." {
                return (String::new(), 1);
            }
            if let Some(stripped) = rest.strip_prefix("./") {
                level = 1;
                rest = stripped;
            }
            loop {
                if let Some(stripped) = rest.strip_prefix("../") {
                    level = if level == 0 { 2 } else { level + 1 };
                    rest = stripped;
                } else if rest == ".." {
                    level = if level == 0 { 2 } else { level + 1 };
                    rest = "";
                } else {
                    break;
                }
            }
            (rest.to_string(), level)
        }
        RelativeMarker::SelfSuper => {
            let separator = shape.path_separator;
            let mut segments: Vec<&str> = raw.split(separator).collect();
            let mut level = 0u32;
            if segments.first() == Some(&"self") {
                level = 1;
                segments.remove(0);
            }
            while segments.first() == Some(&"super") {
                level = if level == 0 { 2 } else { level + 1 };
                segments.remove(0);
            }
            (segments.join(separator), level)
        }
    }
}

fn first_segment<'s>(path: &'s str, separator: &str) -> &'s str {
    path.split(separator).next().unwrap_or(path)
}

fn last_segment<'s>(path: &'s str, separator: &str) -> &'s str {
    path.rsplit(separator).next().unwrap_or(path)
}

/// Canonical statement text
fn canonical_signature(raw_module: &str, record: &ImportRecord) -> String {
    if record.imported_names.is_empty() {
        return match &record.alias {
            Some(alias) => format!("import {raw_module} as {alias}"),
            None => format!("import {raw_module}"),
        };
    }

    let names: Vec<String> = record
        .imported_names
        .iter()
        .map(|name| match &name.alias {
            Some(alias) => format!("{} as {}", name.name, alias),
            None => name.name.clone(),
        })
        .collect();
    let mut signature = format!("from {} import {}", raw_module, names.join(", "));
    if let Some(alias) = &record.alias {
        signature.push_str(&format!(" ({raw_module} as {alias})"));
    }
    signature
}

/// Resolves import captures into records and bindings
#[derive(Debug, Clone, Copy)]
pub struct ImportResolver<'t> {
    shape: &'t ImportShape,
}

impl<'t> ImportResolver<'t> {
    pub fn new(shape: &'t ImportShape) -> Self {
        Self { shape }
    }

    pub fn resolve<'a>(
        &self,
        classification: &Classification<'a>,
        file_path: &str,
    ) -> Vec<ResolvedImport<'a>> {
        let mut order: Vec<Node<'a>> = Vec::new();
        let mut groups: FxHashMap<usize, StatementParts> = FxHashMap::default();

        for m in classification.imports() {
            let Some(anchor) = m.anchor else {
                continue;
            };
            let parts = groups.entry(anchor.id()).or_insert_with(|| {
                order.push(anchor.node);
                StatementParts::default()
            });
            parts.absorb(m);
        }

        order.sort_by_key(|node| node.start_byte());

        let mut resolved = Vec::new();
        for anchor in order {
            let Some(parts) = groups.remove(&anchor.id()) else {
                continue;
            };
            let location = Location::new(file_path, node_to_span(anchor));
            resolved.extend(self.build_records(anchor, parts, location));
        }

        tracing::trace!(file_path = %file_path, records = resolved.len(), "Resolved imports");
        resolved
    }

    fn module_text(&self, raw: &str) -> String {
        if self.shape.quoted_module {
            strip_quotes(raw).to_string()
        } else {
            raw.to_string()
        }
    }

    fn build_records<'a>(
        &self,
        anchor: Node<'a>,
        mut parts: StatementParts,
        location: Location,
    ) -> Vec<ResolvedImport<'a>> {
        parts.sort();
        let StatementParts {
            modules,
            names,
            module_alias,
            reexport,
        } = parts;

        if !names.is_empty() {
            let raw_module = modules
                .first()
                .map(|part| self.module_text(&part.text))
                .unwrap_or_default();
            let (module, level) = split_relative(&raw_module, self.shape);

            let mut record = ImportRecord::new(module, location);
            record.relative_level = level;
            record.alias = module_alias;
            record.imported_names = names.into_iter().map(|part| part.name).collect();
            record.reexport = reexport;

            let bindings = if reexport {
                Vec::new()
            } else {
                let signature = canonical_signature(&raw_module, &record);
                self.from_bindings(&raw_module, &record, &signature)
            };
            return vec![ResolvedImport {
                record,
                anchor,
                bindings,
            }];
        }

        modules
            .into_iter()
            .map(|part| {
                let raw_module = self.module_text(&part.text);
                let (module, level) = split_relative(&raw_module, self.shape);

                let mut record = ImportRecord::new(module, location.clone());
                record.relative_level = level;
                record.alias = part.alias.or_else(|| module_alias.clone());
                record.reexport = reexport;

                let signature = canonical_signature(&raw_module, &record);
                let separator = self.shape.path_separator;
                let bound = match (&record.alias, self.shape.plain_binding) {
                    _ if reexport => None,
                    (Some(alias), _) => Some(alias.clone()),
                    (None, PlainBinding::Nothing) => None,
                    (None, PlainBinding::FirstSegment) => {
                        Some(first_segment(&raw_module, separator).to_string())
                    }
                    (None, PlainBinding::LastSegment) => {
                        Some(last_segment(&raw_module, separator).to_string())
                    }
                };
                let bindings = bound
                    .filter(|name| !name.is_empty())
                    .map(|name| ImportBinding {
                        name,
                        signature: signature.clone(),
                    })
                    .into_iter()
                    .collect();

                ResolvedImport {
                    record,
                    anchor,
                    bindings,
                }
            })
            .collect()
    }

    fn from_bindings(
        &self,
        raw_module: &str,
        record: &ImportRecord,
        signature: &str,
    ) -> Vec<ImportBinding> {
        let separator = self.shape.path_separator;
        let mut bindings: Vec<ImportBinding> = record
            .imported_names
            .iter()
            .map(|name| {
                let bound = if name.is_wildcard() {
                    format!("{raw_module}{separator}*")
                } else if let Some(alias) = &name.alias {
                    alias.clone()
                } else {
                    last_segment(&name.name, separator).to_string()
                };
                ImportBinding {
                    name: bound,
                    signature: signature.to_string(),
                }
            })
            .collect();
        if let Some(alias) = &record.alias {
            bindings.push(ImportBinding {
                name: alias.clone(),
                signature: signature.to_string(),
            });
        }
        bindings
    }
}
