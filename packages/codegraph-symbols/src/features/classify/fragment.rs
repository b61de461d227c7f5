//! Typed symbol fragments

use tree_sitter::Node;

use crate::features::grammar::domain::{DeclarationKind, FragmentRole, ImportPart};
use crate::shared::models::Span;
use crate::shared::utils::tree_sitter::node_to_span;

/// What the anchor of a match declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Declaration(DeclarationKind),
    Import,
}

/// The node a match's fragments belong to
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a> {
    pub kind: AnchorKind,
    pub node: Node<'a>,
}

impl<'a> Anchor<'a> {
    pub fn id(&self) -> usize {
        self.node.id()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub role: FragmentRole,
    pub node: Node<'a>,
    pub text: &'a str,
}

impl<'a> Fragment<'a> {
    pub fn span(&self) -> Span {
        node_to_span(self.node)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImportFragment<'a> {
    pub part: ImportPart,
    pub node: Node<'a>,
    pub text: &'a str,
}

/// One query match after tag translation
#[derive(Debug, Clone, Default)]
pub struct ClassifiedMatch<'a> {
    /// `None` when the pattern has no anchor; fragments then belong to the file
    pub anchor: Option<Anchor<'a>>,
    pub fragments: Vec<Fragment<'a>>,
    pub import_parts: Vec<ImportFragment<'a>>,
}

impl<'a> ClassifiedMatch<'a> {
    pub fn is_import(&self) -> bool {
        matches!(
            self.anchor,
            Some(Anchor {
                kind: AnchorKind::Import,
                ..
            })
        )
    }

    pub fn part(&self, part: ImportPart) -> Option<&ImportFragment<'a>> {
        self.import_parts.iter().find(|p| p.part == part)
    }

    pub fn has_part(&self, part: ImportPart) -> bool {
        self.part(part).is_some()
    }
}

/// Classifier output, in query-outcome order
#[derive(Debug, Clone, Default)]
pub struct Classification<'a> {
    pub matches: Vec<ClassifiedMatch<'a>>,
}

impl<'a> Classification<'a> {
    pub fn declarations(&self) -> impl Iterator<Item = &ClassifiedMatch<'a>> {
        self.matches.iter().filter(|m| !m.is_import())
    }

    pub fn imports(&self) -> impl Iterator<Item = &ClassifiedMatch<'a>> {
        self.matches.iter().filter(|m| m.is_import())
    }
}
