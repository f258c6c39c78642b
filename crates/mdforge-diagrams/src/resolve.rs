//! Placeholder resolution: replace `{{DIAGRAM_<id>}}` tokens in generated
//! HTML with image references.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use regex::Regex;
use tracing::warn;

use crate::record::{DiagramRecord, svg_file_name};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{DIAGRAM_([^{}]+)\}\}").unwrap());

/// Replace each placeholder with a self-contained SVG data URI.
///
/// Used for the HTML and PDF-via-browser paths where no file system is
/// available. A record with empty SVG markup resolves to a visible bracketed
/// fallback rather than an image reference; HTML containing no placeholders
/// is returned unchanged.
#[must_use]
pub fn resolve_inline(html: &str, records: &[DiagramRecord]) -> String {
    let mut result = html.to_owned();

    for record in records {
        let placeholder = record.placeholder();
        let replacement = if record.svg.is_empty() {
            warn!(id = %record.id, "diagram has no rendered SVG, inserting fallback");
            fallback_marker(record)
        } else {
            let encoded = BASE64_STANDARD.encode(record.svg.as_bytes());
            format!(
                r#"<img src="data:image/svg+xml;base64,{encoded}" alt="Diagram {}">"#,
                record.index
            )
        };
        result = result.replace(&placeholder, &replacement);
    }

    resolve_orphans(result)
}

/// Write each record's SVG to a side-file and replace its placeholder with a
/// relative file reference.
///
/// The file is named deterministically from the record id and the `<img>`
/// tag carries a `data-diagram-id` attribute, so the document tree builder
/// can re-associate the reference with the in-memory record without reading
/// the file back. Records with empty SVG markup resolve to a bracketed
/// fallback and write nothing.
pub fn resolve_to_files(
    html: &str,
    records: &[DiagramRecord],
    out_dir: &Path,
) -> io::Result<String> {
    fs::create_dir_all(out_dir)?;
    let mut result = html.to_owned();

    for record in records {
        let placeholder = record.placeholder();
        let replacement = if record.svg.is_empty() {
            warn!(id = %record.id, "diagram has no rendered SVG, inserting fallback");
            fallback_marker(record)
        } else {
            let file_name = svg_file_name(&record.id);
            fs::write(out_dir.join(&file_name), &record.svg)?;
            format!(
                r#"<img src="{file_name}" alt="Diagram {}" data-diagram-id="{}">"#,
                record.index, record.id
            )
        };
        result = result.replace(&placeholder, &replacement);
    }

    Ok(resolve_orphans(result))
}

fn fallback_marker(record: &DiagramRecord) -> String {
    format!("[diagram {} unavailable]", record.index)
}

/// Replace placeholder tokens that matched no record at all.
///
/// Cannot happen when the tokens come from extraction (every token has a
/// record), but hand-assembled input still resolves to the visible fallback
/// instead of leaking raw `{{DIAGRAM_…}}` text.
fn resolve_orphans(html: String) -> String {
    if !html.contains("{{DIAGRAM_") {
        return html;
    }
    PLACEHOLDER_RE
        .replace_all(&html, |caps: &regex::Captures<'_>| {
            warn!(id = &caps[1], "placeholder has no matching diagram record");
            format!("[diagram {} unavailable]", &caps[1])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered_record(index: usize) -> DiagramRecord {
        let mut record = DiagramRecord::new("graph TD", index);
        record.svg = "<svg>ok</svg>".to_owned();
        record
    }

    #[test]
    fn test_inline_embeds_data_uri() {
        let record = rendered_record(0);
        let html = format!("<p>{}</p>", record.placeholder());

        let resolved = resolve_inline(&html, &[record.clone()]);

        let encoded = BASE64_STANDARD.encode(record.svg.as_bytes());
        assert_eq!(
            resolved,
            format!(r#"<p><img src="data:image/svg+xml;base64,{encoded}" alt="Diagram 0"></p>"#)
        );
    }

    #[test]
    fn test_inline_empty_svg_yields_fallback() {
        let record = DiagramRecord::new("graph TD", 2);
        let html = format!("<p>{}</p>", record.placeholder());

        let resolved = resolve_inline(&html, &[record]);

        assert_eq!(resolved, "<p>[diagram 2 unavailable]</p>");
    }

    #[test]
    fn test_inline_without_placeholders_is_identity() {
        let record = rendered_record(0);
        let html = "<p>No placeholders here</p>";
        assert_eq!(resolve_inline(html, &[record]), html);
    }

    #[test]
    fn test_files_mode_writes_svg_and_links_it() {
        let dir = tempfile::tempdir().unwrap();
        let record = rendered_record(0);
        let html = format!("<p>{}</p>", record.placeholder());

        let resolved = resolve_to_files(&html, std::slice::from_ref(&record), dir.path()).unwrap();

        let file_name = svg_file_name(&record.id);
        assert!(resolved.contains(&format!(r#"src="{file_name}""#)));
        assert!(resolved.contains(&format!(r#"data-diagram-id="{}""#, record.id)));
        let written = fs::read_to_string(dir.path().join(&file_name)).unwrap();
        assert_eq!(written, record.svg);
    }

    #[test]
    fn test_files_mode_empty_svg_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let record = DiagramRecord::new("graph TD", 1);
        let html = format!("<p>{}</p>", record.placeholder());

        let resolved = resolve_to_files(&html, std::slice::from_ref(&record), dir.path()).unwrap();

        assert_eq!(resolved, "<p>[diagram 1 unavailable]</p>");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_orphaned_placeholder_resolves_to_fallback() {
        use crate::record::placeholder_token;

        let html = format!("<p>{}</p>", placeholder_token("no-such-id"));
        let resolved = resolve_inline(&html, &[]);
        assert_eq!(resolved, "<p>[diagram no-such-id unavailable]</p>");
    }

    #[test]
    fn test_files_mode_resolves_orphaned_placeholder() {
        use crate::record::placeholder_token;

        let dir = tempfile::tempdir().unwrap();
        let record = rendered_record(0);
        let html = format!(
            "<p>{}</p><p>{}</p>",
            record.placeholder(),
            placeholder_token("orphan")
        );

        let resolved = resolve_to_files(&html, std::slice::from_ref(&record), dir.path()).unwrap();

        assert!(resolved.contains("data-diagram-id"));
        assert!(resolved.contains("[diagram orphan unavailable]"));
        assert!(!resolved.contains("{{DIAGRAM_"));
    }

    #[test]
    fn test_resolution_is_order_independent() {
        let first = rendered_record(0);
        let second = rendered_record(1);
        // Placeholders appear in reverse record order.
        let html = format!("{} {}", second.placeholder(), first.placeholder());

        let resolved = resolve_inline(&html, &[first, second]);

        assert!(resolved.contains(r#"alt="Diagram 1"> <img"#));
        assert!(!resolved.contains("{{DIAGRAM_"));
    }
}
