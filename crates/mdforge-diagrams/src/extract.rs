//! Fenced diagram extraction and placeholder substitution.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::DiagramRecord;

static MERMAID_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```mermaid\s*([\s\S]*?)```").unwrap());

/// Extract all fenced `mermaid` blocks from raw markdown.
///
/// Each block becomes a [`DiagramRecord`] with a fresh identifier and a
/// zero-based index in extraction order; the matched fence (marker plus
/// original whitespace) is replaced by that record's `{{DIAGRAM_<id>}}`
/// placeholder token so the downstream markdown parser never sees diagram
/// syntax.
///
/// Returns the modified markdown and the records in source order. Markdown
/// without diagram fences passes through unchanged with an empty list.
#[must_use]
pub fn extract_diagrams(markdown: &str) -> (String, Vec<DiagramRecord>) {
    let mut records = Vec::new();
    let mut matched = Vec::new();

    for (index, captures) in MERMAID_FENCE_RE.captures_iter(markdown).enumerate() {
        let full = captures.get(0).map_or("", |m| m.as_str());
        let source = captures.get(1).map_or("", |m| m.as_str()).trim();
        records.push(DiagramRecord::new(source, index));
        matched.push(full.to_owned());
    }

    if records.is_empty() {
        return (markdown.to_owned(), records);
    }

    // Replace one occurrence per record, front to back. Identical fences
    // therefore map to distinct records instead of double-substituting.
    let mut result = markdown.to_owned();
    for (record, full) in records.iter().zip(&matched) {
        result = result.replacen(full.as_str(), &record.placeholder(), 1);
    }

    (result, records)
}
