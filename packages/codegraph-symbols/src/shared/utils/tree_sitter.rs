//! Tree-sitter Utility Functions
//!
//! Small read-only helpers over borrowed `Node` views. Nothing here mutates
//! or owns the tree.

use tree_sitter::Node;

use crate::shared::models::Span;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
pub fn find_child_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// First named child whose kind is in `kinds`
pub fn find_named_child_in<'tree>(node: Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

/// First child present under any of the given field names
pub fn child_by_any_field<'tree>(node: Node<'tree>, fields: &[&str]) -> Option<Node<'tree>> {
    fields
        .iter()
        .find_map(|field| node.child_by_field_name(field))
}

/// Every child under the given field name, in source order
pub fn children_by_field<'tree>(node: Node<'tree>, field: &str) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.children_by_field_name(field, &mut cursor).collect();
    children
}

/// Named children that are not comments
pub fn significant_named_children<'tree>(
    node: Node<'tree>,
    comment_kinds: &[&str],
) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node
        .named_children(&mut cursor)
        .filter(|child| !comment_kinds.contains(&child.kind()))
        .collect();
    children
}

/// Is `node` inside (or equal to) a node of one of the given kinds?
pub fn has_ancestor_in(node: Node<'_>, kinds: &[&str]) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if kinds.contains(&n.kind()) {
            return true;
        }
        current = n.parent();
    }
    false
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Text of a node; empty if the range is not valid UTF-8 boundaries
#[inline]
pub fn node_text<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Text of the child under `field`, if present
pub fn field_text<'src>(node: Node<'_>, field: &str, source: &'src str) -> Option<&'src str> {
    node.child_by_field_name(field)
        .map(|child| node_text(child, source))
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: Node<'_>) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1,
        start_pos.column as u32,
        end_pos.row as u32 + 1,
        end_pos.column as u32,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Error Collection
// ═══════════════════════════════════════════════════════════════════════════

/// An `ERROR` or `MISSING` node found in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorSite {
    pub span: Span,
    pub missing: bool,
    /// Kind of the missing node, or the erroneous text (truncated)
    pub detail: String,
}

const ERROR_DETAIL_LIMIT: usize = 40;

/// Collect error sites in document order.
///
/// Subtrees without errors are skipped via `has_error`, and nested ERROR
/// nodes are reported once (the outermost).
pub fn collect_error_sites(root: Node<'_>, source: &str) -> Vec<SyntaxErrorSite> {
    let mut sites = Vec::new();
    if !root.has_error() {
        return sites;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            sites.push(SyntaxErrorSite {
                span: node_to_span(node),
                missing: true,
                detail: node.kind().to_string(),
            });
            continue;
        }
        if node.is_error() {
            let text: String = node_text(node, source)
                .chars()
                .take(ERROR_DETAIL_LIMIT)
                .collect();
            sites.push(SyntaxErrorSite {
                span: node_to_span(node),
                missing: false,
                detail: text,
            });
            continue;
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    sites
}
