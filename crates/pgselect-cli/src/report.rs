//! Rendering of parse errors with the offending source line.

use pgselect_core::parser::{ErrorCategory, ParseError};

/// Formats `err` as a message followed by the source line it points at
/// and a caret marker underneath.
pub fn render(err: &ParseError, source: &str) -> String {
    let category = match err.category() {
        ErrorCategory::Lexical => "lexical error",
        ErrorCategory::Grammar => "syntax error",
        ErrorCategory::Validation => "validation error",
    };
    let mut out = format!("{category}: {err}\n");

    let Some(line) = source.lines().nth(err.line.saturating_sub(1)) else {
        return out;
    };
    let indent = err.column.saturating_sub(1);
    let marked = source
        .get(err.span.start..err.span.end)
        .and_then(|text| text.lines().next())
        .map_or(0, |text| text.chars().count());
    let available = line.chars().count().saturating_sub(indent).max(1);
    let width = marked.clamp(1, available);

    let gutter = err.line.to_string();
    out.push_str(&format!("{gutter} | {line}\n"));
    out.push_str(&format!(
        "{} | {}{}\n",
        " ".repeat(gutter.len()),
        " ".repeat(indent),
        "^".repeat(width)
    ));
    out
}
