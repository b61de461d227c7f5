//! Node Classifier
//!
//! Translates raw capture tags into the shared fragment vocabulary. Captures
//! whose tag has no role (predicate helpers) are dropped here.

use crate::features::grammar::domain::CaptureRole;
use crate::features::query::QueryOutcome;

use super::fragment::{Anchor, AnchorKind, ClassifiedMatch, Classification, Fragment, ImportFragment};

/// Maps captures to roles by capture index
#[derive(Debug, Clone, Copy)]
pub struct NodeClassifier<'r> {
    roles: &'r [Option<CaptureRole>],
}

impl<'r> NodeClassifier<'r> {
    /// `roles[i]` is the role of capture index `i`
    pub fn new(roles: &'r [Option<CaptureRole>]) -> Self {
        Self { roles }
    }

    fn role(&self, capture_index: u32) -> Option<CaptureRole> {
        self.roles.get(capture_index as usize).copied().flatten()
    }

    pub fn classify<'a>(&self, outcome: &QueryOutcome<'a>) -> Classification<'a> {
        let mut matches = Vec::with_capacity(outcome.matches.len());

        for record in &outcome.matches {
            let mut classified = ClassifiedMatch::default();
            for capture in &record.captures {
                let Some(role) = self.role(capture.capture_index) else {
                    continue;
                };
                match role {
                    CaptureRole::Declaration(kind) => {
                        set_anchor(&mut classified, AnchorKind::Declaration(kind), capture.node)
                    }
                    CaptureRole::ImportStatement => {
                        set_anchor(&mut classified, AnchorKind::Import, capture.node)
                    }
                    CaptureRole::Fragment(role) => classified.fragments.push(Fragment {
                        role,
                        node: capture.node,
                        text: capture.text,
                    }),
                    CaptureRole::Import(part) => classified.import_parts.push(ImportFragment {
                        part,
                        node: capture.node,
                        text: capture.text,
                    }),
                }
            }

            if classified.anchor.is_none()
                && classified.fragments.is_empty()
                && classified.import_parts.is_empty()
            {
                continue;
            }
            matches.push(classified);
        }

        Classification { matches }
    }
}

fn set_anchor<'a>(classified: &mut ClassifiedMatch<'a>, kind: AnchorKind, node: tree_sitter::Node<'a>) {
    match classified.anchor {
        None => classified.anchor = Some(Anchor { kind, node }),
        Some(existing) if existing.node.id() != node.id() => {
            tracing::trace!(
                kept = existing.node.kind(),
                ignored = node.kind(),
                "Match has more than one anchor; keeping the first"
            );
        }
        Some(_) => {}
    }
}
