//! Parameter and generic decomposition
//!
//! Turns captured parameter / type-parameter nodes into model values using
//! the grammar's [`ParameterShape`] and [`GenericShape`].

use tree_sitter::Node;

use crate::features::grammar::domain::{GenericShape, ParameterShape};
use crate::shared::models::{Parameter, ParameterKind, TypeParameter};
use crate::shared::utils::text::collapse_whitespace;
use crate::shared::utils::tree_sitter::{child_by_any_field, children_by_field, node_text};

/// Annotation text without a leading `:` (TypeScript `: number`)
pub fn normalize_annotation(text: &str) -> Option<String> {
    let trimmed = text.trim().trim_start_matches(':').trim();
    let collapsed = collapse_whitespace(trimmed);
    (!collapsed.is_empty()).then_some(collapsed)
}

/// Name nodes of one parameter or type parameter
fn name_nodes<'a>(
    node: Node<'a>,
    name_fields: &[&str],
    name_kinds: &[&str],
    skip_kinds: &[&str],
    comment_kinds: &[&str],
) -> Vec<Node<'a>> {
    let from_fields = name_fields
        .iter()
        .map(|field| children_by_field(node, field))
        .find(|found| !found.is_empty());

    let names = match from_fields {
        Some(found) => found,
        None if name_kinds.contains(&node.kind()) => vec![node],
        None => {
            let mut cursor = node.walk();
            let found: Vec<Node<'a>> = node
                .named_children(&mut cursor)
                .filter(|child| {
                    !skip_kinds.contains(&child.kind()) && !comment_kinds.contains(&child.kind())
                })
                .find(|child| name_kinds.contains(&child.kind()))
                .into_iter()
                .collect();
            found
        }
    };

    // `variable_declarator` and friends wrap the identifier
    names
        .into_iter()
        .map(|name| name.child_by_field_name("name").unwrap_or(name))
        .collect()
}

/// Positional state while walking a parameter list
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Positional,
    KeywordOnly,
}

/// Decompose captured parameter nodes, in source order
pub fn decompose_parameters(
    nodes: &[Node<'_>],
    shape: &ParameterShape,
    comment_kinds: &[&str],
    source: &str,
) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = Vec::with_capacity(nodes.len());
    let mut mode = Mode::Positional;

    for node in nodes {
        let kind = node.kind();
        if comment_kinds.contains(&kind) || shape.skip_kinds.contains(&kind) {
            continue;
        }
        if shape.keyword_only_separator_kinds.contains(&kind) {
            mode = Mode::KeywordOnly;
            continue;
        }
        if shape.positional_only_separator_kinds.contains(&kind) {
            for parameter in parameters.iter_mut() {
                if parameter.kind == ParameterKind::Positional {
                    parameter.kind = ParameterKind::PositionalOnly;
                }
            }
            continue;
        }

        let names = name_nodes(
            *node,
            shape.name_fields,
            shape.name_kinds,
            shape.skip_kinds,
            comment_kinds,
        );

        let is_var_positional = shape.var_positional_kinds.contains(&kind)
            || names
                .iter()
                .any(|n| shape.var_positional_kinds.contains(&n.kind()));
        let is_var_keyword = shape.var_keyword_kinds.contains(&kind)
            || names
                .iter()
                .any(|n| shape.var_keyword_kinds.contains(&n.kind()));

        let type_node = child_by_any_field(*node, shape.type_fields).or_else(|| {
            if !shape.type_fallback {
                return None;
            }
            let mut cursor = node.walk();
            let found = node.named_children(&mut cursor).find(|child| {
                let k = child.kind();
                !shape.name_kinds.contains(&k)
                    && !shape.skip_kinds.contains(&k)
                    && !comment_kinds.contains(&k)
                    && !names.iter().any(|n| n.id() == child.id())
            });
            found
        });
        let annotation = type_node.and_then(|t| normalize_annotation(node_text(t, source)));
        let default = child_by_any_field(*node, shape.default_fields)
            .map(|d| collapse_whitespace(node_text(d, source)))
            .filter(|d| !d.is_empty());

        let parameter_kind = if is_var_keyword {
            ParameterKind::VarKeyword
        } else if is_var_positional {
            mode = Mode::KeywordOnly;
            ParameterKind::VarPositional
        } else if mode == Mode::KeywordOnly {
            ParameterKind::KeywordOnly
        } else {
            ParameterKind::Positional
        };

        if names.is_empty() {
            // Go allows unnamed parameters: `func(int, string)`
            if annotation.is_some() {
                parameters.push(Parameter {
                    name: String::new(),
                    annotation,
                    default,
                    kind: parameter_kind,
                });
            }
            continue;
        }

        for name_node in names {
            let raw = node_text(name_node, source).trim();
            let name = if is_var_positional || is_var_keyword {
                raw.trim_start_matches(['*', '.']).trim()
            } else {
                raw
            };
            parameters.push(Parameter {
                name: collapse_whitespace(name),
                annotation: annotation.clone(),
                default: default.clone(),
                kind: parameter_kind,
            });
        }
    }

    parameters
}

/// Decompose captured type-parameter nodes
///
/// One node may declare several parameters (Go `[K, V any]`).
pub fn decompose_generics(
    nodes: &[Node<'_>],
    shape: &GenericShape,
    comment_kinds: &[&str],
    source: &str,
) -> Vec<TypeParameter> {
    let mut generics: Vec<TypeParameter> = Vec::new();

    for node in nodes {
        if comment_kinds.contains(&node.kind()) {
            continue;
        }
        let mut names = name_nodes(*node, shape.name_fields, shape.name_kinds, &[], comment_kinds);
        if names.is_empty() {
            names.push(*node);
        }

        let bound_node = child_by_any_field(*node, shape.bound_fields).or_else(|| {
            let mut cursor = node.walk();
            let found = node
                .named_children(&mut cursor)
                .find(|child| shape.bound_kinds.contains(&child.kind()));
            found
        });
        let bound = bound_node
            .filter(|b| !names.iter().any(|n| n.id() == b.id()))
            .and_then(|b| normalize_bound(node_text(b, source)));

        for name_node in names {
            let name = collapse_whitespace(node_text(name_node, source));
            if name.is_empty() {
                continue;
            }
            generics.push(TypeParameter {
                name,
                bound: bound.clone(),
            });
        }
    }

    generics
}

/// Bound text without `extends` / `:` introducers
fn normalize_bound(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("extends").unwrap_or(trimmed);
    normalize_annotation(trimmed)
}
