//! In-memory record tracking one extracted diagram.

use uuid::Uuid;

/// One fenced diagram extracted from the markdown source.
///
/// Created by [`extract_diagrams`](crate::extract_diagrams) with empty
/// rendered fields; the rendering adapter fills `svg` (and `png_base64` when
/// rasterization succeeds). Every later stage treats records as read-only.
#[derive(Debug, Clone)]
pub struct DiagramRecord {
    /// Opaque stable identifier (UUID v4), used in placeholder tokens and
    /// side-file names.
    pub id: String,
    /// Diagram source text with surrounding whitespace trimmed.
    pub source: String,
    /// Zero-based position among extracted diagrams, in source order.
    pub index: usize,
    /// Rendered SVG markup; empty until the rendering adapter has run.
    pub svg: String,
    /// Base64-encoded PNG rasterization, if the raster bridge succeeded.
    pub png_base64: Option<String>,
}

impl DiagramRecord {
    /// Create a record for a newly extracted diagram.
    #[must_use]
    pub fn new(source: impl Into<String>, index: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source: source.into(),
            index,
            svg: String::new(),
            png_base64: None,
        }
    }

    /// Placeholder token for this record.
    #[must_use]
    pub fn placeholder(&self) -> String {
        placeholder_token(&self.id)
    }
}

/// Placeholder token inserted in place of an extracted diagram.
///
/// The token carries the literal identifier, so later substitution is
/// exact-match and order-independent even when two diagrams share similar
/// source text.
#[must_use]
pub fn placeholder_token(id: &str) -> String {
    format!("{{{{DIAGRAM_{id}}}}}")
}

/// Deterministic side-file name for a diagram's SVG output.
#[must_use]
pub fn svg_file_name(id: &str) -> String {
    format!("mermaid-{id}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_record_has_empty_rendered_fields() {
        let record = DiagramRecord::new("graph TD", 3);
        assert_eq!(record.source, "graph TD");
        assert_eq!(record.index, 3);
        assert!(record.svg.is_empty());
        assert!(record.png_base64.is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = DiagramRecord::new("x", 0);
        let b = DiagramRecord::new("x", 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_placeholder_token_shape() {
        assert_eq!(placeholder_token("abc"), "{{DIAGRAM_abc}}");
    }

    #[test]
    fn test_svg_file_name() {
        assert_eq!(svg_file_name("abc"), "mermaid-abc.svg");
    }
}
