//! Signature Formatter
//!
//! Renders parameter lists in one canonical form for every language:
//!
//! ```text
//! [T, U: Bound](a, b: int = 1, c=2, /, d, *rest: str, e, **kw) -> R
//! ```
//!
//! Whitespace inside annotations and defaults is collapsed, so formatting
//! depends only on the decomposed parts and is stable across runs.

use crate::shared::models::{Parameter, ParameterKind, TypeParameter};
use crate::shared::utils::text::collapse_whitespace;

/// Decomposed pieces of a callable signature
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureParts<'p> {
    pub generics: &'p [TypeParameter],
    pub parameters: &'p [Parameter],
    pub return_type: Option<&'p str>,
}

/// `[T, U: Bound]`, or empty when there are no generics
pub fn format_generics(generics: &[TypeParameter]) -> String {
    if generics.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = generics
        .iter()
        .map(|generic| match &generic.bound {
            Some(bound) => format!("{}: {}", generic.name, collapse_whitespace(bound)),
            None => generic.name.clone(),
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// One parameter: `name`, `name=default`, `name: T = default`, `*rest`, `**kw`
pub fn format_parameter(parameter: &Parameter) -> String {
    let prefix = match parameter.kind {
        ParameterKind::VarPositional => "*",
        ParameterKind::VarKeyword => "**",
        _ => "",
    };
    let annotation = parameter
        .annotation
        .as_deref()
        .map(collapse_whitespace)
        .filter(|a| !a.is_empty());
    let default = parameter
        .default
        .as_deref()
        .map(collapse_whitespace)
        .filter(|d| !d.is_empty());

    if parameter.name.is_empty() {
        return format!("{}{}", prefix, annotation.unwrap_or_default());
    }

    let mut rendered = format!("{}{}", prefix, parameter.name);
    if let Some(annotation) = &annotation {
        rendered.push_str(": ");
        rendered.push_str(annotation);
    }
    if let Some(default) = default {
        if annotation.is_some() {
            rendered.push_str(" = ");
        } else {
            rendered.push('=');
        }
        rendered.push_str(&default);
    }
    rendered
}

/// `(a, b=1, /, c, *, d, **kw)`
pub fn format_parameters(parameters: &[Parameter]) -> String {
    let mut rendered: Vec<String> = Vec::with_capacity(parameters.len() + 2);
    let mut seen_var_positional = false;
    let mut keyword_marker_emitted = false;

    for (index, parameter) in parameters.iter().enumerate() {
        match parameter.kind {
            ParameterKind::VarPositional => seen_var_positional = true,
            ParameterKind::KeywordOnly if !seen_var_positional && !keyword_marker_emitted => {
                rendered.push("*".to_string());
                keyword_marker_emitted = true;
            }
            _ => {}
        }

        rendered.push(format_parameter(parameter));

        let closes_positional_only = parameter.kind == ParameterKind::PositionalOnly
            && parameters
                .get(index + 1)
                .map_or(true, |next| next.kind != ParameterKind::PositionalOnly);
        if closes_positional_only {
            rendered.push("/".to_string());
        }
    }

    format!("({})", rendered.join(", "))
}

/// Full canonical signature
pub fn format_signature(parts: &SignatureParts<'_>) -> String {
    let mut signature = format_generics(parts.generics);
    signature.push_str(&format_parameters(parts.parameters));
    if let Some(return_type) = parts.return_type.map(collapse_whitespace) {
        if !return_type.is_empty() {
            signature.push_str(" -> ");
            signature.push_str(&return_type);
        }
    }
    signature
}
