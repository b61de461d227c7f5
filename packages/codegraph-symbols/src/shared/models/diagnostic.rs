//! Non-fatal extraction diagnostics

use std::fmt;

use serde::{Deserialize, Serialize};

use super::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The CST contains error or missing nodes
    ParseError,
    /// The query match budget ran out; the catalog is partial
    QueryBudgetExceeded,
    /// Two siblings shared a qualified path; the last one was kept
    DuplicateSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn parse_error(span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::ParseError,
            severity: Severity::Error,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn budget_exceeded(budget: usize) -> Self {
        Self {
            kind: DiagnosticKind::QueryBudgetExceeded,
            severity: Severity::Warning,
            message: format!("query match budget of {budget} exhausted; catalog is truncated"),
            span: None,
        }
    }

    pub fn duplicate_symbol(span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::DuplicateSymbol,
            severity: Severity::Warning,
            message: message.into(),
            span: Some(span),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "[{:?}] {} at {}", self.kind, self.message, span),
            None => write!(f, "[{:?}] {}", self.kind, self.message),
        }
    }
}
