//! Text normalization helpers

/// Collapse every run of whitespace (including newlines) to a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip one layer of matching quotes (`"`, `'` or `` ` ``)
pub fn strip_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ['"', '\'', '`'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Clean a string-literal docstring
///
/// Drops string prefixes (`r`, `u`, `b`, `f` in any case), triple or single
/// quotes, then removes the common indentation of every line after the
/// first, plus leading and trailing blank lines.
pub fn clean_docstring(literal: &str) -> String {
    dedent_lines(literal_body(literal))
}

/// Clean implicitly concatenated literals (`"a" "b"`) as one docstring
pub fn clean_concatenated_docstring<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let body: String = parts.into_iter().map(literal_body).collect();
    dedent_lines(&body)
}

fn literal_body(literal: &str) -> &str {
    let body = literal
        .trim()
        .trim_start_matches(|c: char| matches!(c, 'r' | 'R' | 'u' | 'U' | 'b' | 'B' | 'f' | 'F'));
    ["\"\"\"", "'''", "\"", "'"]
        .iter()
        .find_map(|quote| {
            body.strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(body)
}

/// Dedent the lines of a docstring body the way Python's `inspect.cleandoc` does
fn dedent_lines(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    if lines.is_empty() {
        return String::new();
    }

    // Indentation is counted in chars: U+3000 and U+00A0 are multibyte
    let indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    cleaned.push(lines[0].trim().to_string());
    for line in &lines[1..] {
        cleaned.push(strip_indent(line, indent).trim_end().to_string());
    }

    while cleaned.first().is_some_and(|l| l.is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }
    cleaned.join("\n")
}

/// Drop up to `indent` leading whitespace chars
fn strip_indent(line: &str, indent: usize) -> &str {
    let cut = line
        .char_indices()
        .take(indent)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[cut..]
}

/// Strip comment markers from one doc comment node's text
///
/// Handles `///`, `//!`, `//`, `#` line comments and `/** ... */` blocks
/// (leading `*` gutters included).
pub fn strip_comment_markers(comment: &str) -> String {
    let trimmed = comment.trim();
    if let Some(block) = trimmed.strip_prefix("/*") {
        let block = block.strip_suffix("*/").unwrap_or(block);
        let block = block.strip_prefix('*').unwrap_or(block);
        let lines: Vec<String> = block
            .lines()
            .map(|line| {
                let line = line.trim();
                let line = line.strip_prefix('*').unwrap_or(line);
                line.strip_prefix(' ').unwrap_or(line).trim_end().to_string()
            })
            .collect();
        return dedent_lines(&lines.join("\n"));
    }

    let line = ["///", "//!", "//", "#"]
        .iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
        .unwrap_or(trimmed);
    line.strip_prefix(' ').unwrap_or(line).trim_end().to_string()
}
