//! Image resolution: turn `<img>` references into embedded image nodes.
//!
//! Three source shapes are recognized: linked SVG files (with an optional
//! `data-diagram-id` back-reference to an in-memory record), PNG data URIs,
//! and legacy SVG data URIs matched back to records by re-encoding. Every
//! failure path ends in a visible bracketed fallback paragraph; resolution
//! never propagates an error past the tree builder.

use std::fs;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use markup5ever_rcdom::Handle;
use tracing::{debug, warn};

use crate::builder::Builder;
use crate::dom::attr;
use crate::node::{DEFAULT_SVG_EXTENT, DocNode, Extent, Image, ImageKind, Paragraph, png_dimensions};

const PNG_DATA_PREFIX: &str = "data:image/png;base64,";
const SVG_DATA_PREFIX: &str = "data:image/svg+xml;base64,";

/// Resolve one `img` element into document nodes.
pub(crate) fn resolve_image(builder: &mut Builder<'_>, img: &Handle) -> Vec<DocNode> {
    let src = attr(img, "src").unwrap_or_default();

    if src.ends_with(".svg") && !src.starts_with("data:") {
        return linked_svg(builder, img, &src);
    }

    if let Some(payload) = src.strip_prefix(PNG_DATA_PREFIX) {
        return png_data_uri(builder, payload);
    }

    if let Some(payload) = src.strip_prefix(SVG_DATA_PREFIX) {
        return svg_data_uri(builder, payload);
    }

    // Not a shape this converter can embed. Keep it visible rather than
    // silently dropping the reference.
    warn!(%src, "unresolvable image reference");
    builder
        .warnings
        .push(format!("unresolvable image reference: {src}"));
    fallback(format!("[image: {src}]"))
}

/// Linked-vector path: prefer the in-memory record named by
/// `data-diagram-id`, then a same-named side-file, then a visible fallback.
///
/// This path embeds at the fixed default footprint; it does not recompute
/// aspect ratio from content.
fn linked_svg(builder: &mut Builder<'_>, img: &Handle, src: &str) -> Vec<DocNode> {
    if let Some(id) = attr(img, "data-diagram-id")
        && let Some(record) = builder
            .records
            .iter()
            .find(|r| r.id == id && !r.svg.is_empty())
    {
        debug!(%id, "embedding diagram SVG from in-memory record");
        return vec![svg_node(record.svg.as_bytes().to_vec(), "diagram.svg")];
    }

    if let Some(dir) = builder.svg_dir {
        match fs::read(dir.join(src)) {
            Ok(bytes) => {
                debug!(%src, "embedding SVG from side-file");
                return vec![svg_node(bytes, src)];
            }
            Err(err) => {
                debug!(%src, %err, "side-file not readable");
            }
        }
    }

    warn!(%src, "no diagram record or side-file for SVG reference");
    builder
        .warnings
        .push(format!("unresolved SVG reference: {src}"));
    fallback(format!("[SVG image: {src}]"))
}

/// Raster path: decode, read intrinsic size from the header, convert to EMUs
/// at 96 DPI, clamp to the maximum printable width.
fn png_data_uri(builder: &mut Builder<'_>, payload: &str) -> Vec<DocNode> {
    match BASE64_STANDARD.decode(payload) {
        Ok(bytes) => {
            let (width_px, height_px) = png_dimensions(&bytes);
            let extent = Extent::from_pixels(width_px, height_px);
            vec![DocNode::Image(Image {
                kind: ImageKind::Png,
                bytes,
                extent,
                name: "Diagram".to_owned(),
            })]
        }
        Err(err) => {
            warn!(%err, "malformed PNG data URI");
            builder
                .warnings
                .push(format!("malformed PNG data URI: {err}"));
            fallback(format!("[image error: {err}]"))
        }
    }
}

/// Legacy inline path: match the payload back to a record by re-encoding
/// each record's SVG and comparing for an exact byte-identical string.
fn svg_data_uri(builder: &mut Builder<'_>, payload: &str) -> Vec<DocNode> {
    let matching = builder.records.iter().find(|record| {
        !record.svg.is_empty() && BASE64_STANDARD.encode(record.svg.as_bytes()) == payload
    });

    match matching {
        Some(record) => {
            debug!(id = %record.id, "matched inline SVG back to diagram record");
            vec![svg_node(record.svg.as_bytes().to_vec(), "diagram.svg")]
        }
        None => {
            warn!("no diagram record matches inline SVG payload");
            builder
                .warnings
                .push("no diagram available for inline SVG image".to_owned());
            fallback("[no diagram available]".to_owned())
        }
    }
}

fn svg_node(bytes: Vec<u8>, name: &str) -> DocNode {
    DocNode::Image(Image {
        kind: ImageKind::Svg,
        bytes,
        extent: DEFAULT_SVG_EXTENT,
        name: name.to_owned(),
    })
}

fn fallback(text: String) -> Vec<DocNode> {
    vec![DocNode::Paragraph(Paragraph::text(text))]
}
