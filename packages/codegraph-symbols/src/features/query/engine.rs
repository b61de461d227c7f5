//! Query Engine
//!
//! Runs a compiled capture query over a tree and materializes its matches.
//! The number of matches visited per call is bounded; when the bound is hit
//! the outcome is marked truncated and everything gathered so far is kept.

use std::ops::Range;

use tree_sitter::{Node, Query, QueryCursor};

use crate::shared::models::Span;
use crate::shared::utils::tree_sitter::{node_text, node_to_span};

/// One captured node
#[derive(Debug, Clone, Copy)]
pub struct CaptureRecord<'a> {
    pub capture_index: u32,
    pub capture_name: &'a str,
    pub byte_range: (usize, usize),
    pub span: Span,
    pub text: &'a str,
    pub node: Node<'a>,
}

impl<'a> CaptureRecord<'a> {
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_range.0..self.byte_range.1
    }
}

/// One query match with its captures
#[derive(Debug, Clone)]
pub struct MatchRecord<'a> {
    pub pattern_index: usize,
    pub captures: Vec<CaptureRecord<'a>>,
}

impl<'a> MatchRecord<'a> {
    fn start_byte(&self) -> usize {
        self.captures
            .iter()
            .map(|c| c.byte_range.0)
            .min()
            .unwrap_or(0)
    }

    fn end_byte(&self) -> usize {
        self.captures
            .iter()
            .map(|c| c.byte_range.1)
            .max()
            .unwrap_or(0)
    }
}

/// Result of one query run
#[derive(Debug, Clone, Default)]
pub struct QueryOutcome<'a> {
    /// Matches ordered by start byte, outer before inner, then pattern
    pub matches: Vec<MatchRecord<'a>>,
    pub truncated: bool,
}

impl<'a> QueryOutcome<'a> {
    /// Every capture, in document order
    pub fn captures(&self) -> Vec<&CaptureRecord<'a>> {
        let mut captures: Vec<&CaptureRecord<'a>> =
            self.matches.iter().flat_map(|m| m.captures.iter()).collect();
        captures.sort_by_key(|c| (c.byte_range.0, std::cmp::Reverse(c.byte_range.1)));
        captures
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Budgeted query executor
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    max_matches: usize,
}

impl QueryEngine {
    pub fn new(max_matches: usize) -> Self {
        Self { max_matches }
    }

    pub fn max_matches(&self) -> usize {
        self.max_matches
    }

    /// Run `query` over the subtree at `root`
    pub fn run<'a>(&self, query: &'a Query, root: Node<'a>, source: &'a str) -> QueryOutcome<'a> {
        let capture_names = query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut matches = Vec::new();
        let mut truncated = false;

        for m in cursor.matches(query, root, source.as_bytes()) {
            if matches.len() >= self.max_matches {
                truncated = true;
                break;
            }
            let captures = m
                .captures
                .iter()
                .map(|capture| {
                    let node = capture.node;
                    let capture_name: &'a str = capture_names
                        .get(capture.index as usize)
                        .map(|name| name.as_ref())
                        .unwrap_or("");
                    CaptureRecord {
                        capture_index: capture.index,
                        capture_name,
                        byte_range: (node.start_byte(), node.end_byte()),
                        span: node_to_span(node),
                        text: node_text(node, source),
                        node,
                    }
                })
                .collect();
            matches.push(MatchRecord {
                pattern_index: m.pattern_index,
                captures,
            });
        }

        if truncated {
            tracing::warn!(
                budget = self.max_matches,
                "Query match budget exhausted; results are truncated"
            );
        }

        matches.sort_by_key(|m| (m.start_byte(), std::cmp::Reverse(m.end_byte()), m.pattern_index));
        QueryOutcome { matches, truncated }
    }
}
