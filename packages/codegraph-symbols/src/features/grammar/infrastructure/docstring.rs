//! Docstring strategies

use tree_sitter::Node;

use crate::features::grammar::ports::{DocContext, DocstringStrategy};
use crate::shared::utils::text::{
    clean_concatenated_docstring, clean_docstring, strip_comment_markers,
};
use crate::shared::utils::tree_sitter::{node_text, significant_named_children};

/// A string literal that is the first statement of a body (Python)
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyStringDocstring;

impl BodyStringDocstring {
    /// Is `candidate` the lone expression of the first significant statement?
    fn is_leading_string(candidate: Node<'_>, ctx: &DocContext<'_>) -> bool {
        let taxonomy = ctx.taxonomy;
        if !taxonomy.string_kinds.contains(&candidate.kind()) {
            return false;
        }
        let Some(statement) = candidate.parent() else {
            return false;
        };
        if !taxonomy.expression_statement_kinds.contains(&statement.kind()) {
            return false;
        }
        if significant_named_children(statement, taxonomy.comment_kinds).len() != 1 {
            return false;
        }
        let Some(container) = statement.parent() else {
            return false;
        };
        significant_named_children(container, taxonomy.comment_kinds)
            .first()
            .is_some_and(|first| first.id() == statement.id())
    }

    /// A concatenated literal is cleaned from its joined parts
    fn clean(candidate: Node<'_>, ctx: &DocContext<'_>) -> String {
        let mut cursor = candidate.walk();
        let parts: Vec<&str> = candidate
            .named_children(&mut cursor)
            .filter(|part| ctx.taxonomy.string_kinds.contains(&part.kind()))
            .map(|part| node_text(part, ctx.source))
            .collect();
        if parts.is_empty() {
            clean_docstring(node_text(candidate, ctx.source))
        } else {
            clean_concatenated_docstring(parts)
        }
    }
}

impl DocstringStrategy for BodyStringDocstring {
    fn name(&self) -> &'static str {
        "body-string"
    }

    fn extract(&self, ctx: &DocContext<'_>) -> Option<String> {
        ctx.candidates
            .iter()
            .find(|candidate| Self::is_leading_string(**candidate, ctx))
            .map(|candidate| Self::clean(*candidate, ctx))
            .filter(|doc| !doc.is_empty())
    }
}

/// Contiguous doc comments directly above the declaration
#[derive(Debug, Clone, Copy)]
pub struct LeadingCommentDocstring {
    /// Comment openers that mark documentation (`///`, `/**`, `//`)
    pub prefixes: &'static [&'static str],
}

impl LeadingCommentDocstring {
    pub const fn new(prefixes: &'static [&'static str]) -> Self {
        Self { prefixes }
    }

    /// Last row a comment occupies; line comments may swallow their newline
    fn effective_end_row(node: Node<'_>) -> usize {
        let end = node.end_position();
        if end.column == 0 && end.row > node.start_position().row {
            end.row - 1
        } else {
            end.row
        }
    }

    fn collect_above(&self, start: Node<'_>, ctx: &DocContext<'_>) -> Vec<String> {
        let taxonomy = ctx.taxonomy;
        let mut boundary_row = start.start_position().row;
        let mut lines = Vec::new();
        let mut current = start.prev_named_sibling();

        while let Some(node) = current {
            if taxonomy.leading_decorator_kinds.contains(&node.kind()) {
                boundary_row = node.start_position().row;
                current = node.prev_named_sibling();
                continue;
            }
            if !taxonomy.is_comment(node.kind()) {
                break;
            }
            if Self::effective_end_row(node) + 1 < boundary_row {
                break;
            }
            let text = node_text(node, ctx.source);
            if !self.prefixes.iter().any(|prefix| text.starts_with(prefix)) {
                break;
            }
            lines.push(strip_comment_markers(text));
            boundary_row = node.start_position().row;
            current = node.prev_named_sibling();
        }

        lines.reverse();
        lines
    }
}

impl DocstringStrategy for LeadingCommentDocstring {
    fn name(&self) -> &'static str {
        "leading-comment"
    }

    fn extract(&self, ctx: &DocContext<'_>) -> Option<String> {
        let mut lines = self.collect_above(ctx.declaration, ctx);
        if lines.is_empty() {
            if let Some(wrapper) = ctx.wrapper {
                lines = self.collect_above(wrapper, ctx);
            }
        }

        let doc = lines.join("\n").trim().to_string();
        (!doc.is_empty()).then_some(doc)
    }
}
