//! The document tree builder: recursive descent from parsed HTML to
//! [`DocNode`]s.
//!
//! The walk is a pure function of (HTML tree, diagram records, optional
//! side-file directory): single top-down left-to-right traversal, no
//! backtracking. Each element kind dispatches to exactly one handler that
//! returns completed nodes; unrecognized elements are transparent containers
//! (recursed into, never dropped, never erroring). Failure paths terminate
//! in visible fallback paragraphs plus a warning, never in an error.

use std::path::Path;

use markup5ever_rcdom::{Handle, NodeData};
use mdforge_diagrams::DiagramRecord;
use tracing::{debug, warn};

use crate::dom::{descendants_named, element_name, inner_text, parse_body, text_content};
use crate::image::resolve_image;
use crate::node::{Cell, DocNode, Paragraph, ParagraphStyle, Run, Table};

/// Result of a document build: the node tree plus accumulated warnings for
/// degraded elements.
#[derive(Debug)]
pub struct BuildOutput {
    pub nodes: Vec<DocNode>,
    pub warnings: Vec<String>,
}

/// Recognized element kinds. Everything else lands on `Other`, which recurses
/// into children (or is skipped when childless).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    /// `h1`–`h4`. Deeper heading levels are not distinguished and fall
    /// through to `Other`.
    Heading(u8),
    Paragraph,
    List,
    Image,
    Code,
    Table,
    Other,
}

impl ElementKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "p" => Self::Paragraph,
            "ul" | "ol" => Self::List,
            "img" => Self::Image,
            "code" | "pre" => Self::Code,
            "table" => Self::Table,
            _ => Self::Other,
        }
    }
}

/// Build a document tree from resolved HTML.
///
/// `records` supplies the in-memory diagram data referenced by image tags;
/// `svg_dir` optionally points at the side-file directory used by
/// file-reference resolution.
#[must_use]
pub fn build_document(
    html: &str,
    records: &[DiagramRecord],
    svg_dir: Option<&Path>,
) -> BuildOutput {
    let mut builder = Builder {
        records,
        svg_dir,
        warnings: Vec::new(),
    };

    // The parsed tree must outlive the walk; see `ParsedHtml`.
    let parsed = parse_body(html);
    let mut nodes = Vec::new();
    for child in parsed.body_children() {
        nodes.extend(builder.visit(child));
    }

    BuildOutput {
        nodes,
        warnings: builder.warnings,
    }
}

pub(crate) struct Builder<'a> {
    pub(crate) records: &'a [DiagramRecord],
    pub(crate) svg_dir: Option<&'a Path>,
    pub(crate) warnings: Vec<String>,
}

impl Builder<'_> {
    /// Handle one node, returning the document nodes it produces.
    fn visit(&mut self, node: &Handle) -> Vec<DocNode> {
        if let Some(text) = text_content(node) {
            if text.trim().is_empty() {
                return Vec::new();
            }
            return vec![DocNode::Paragraph(Paragraph::text(text))];
        }

        let Some(tag) = element_name(node) else {
            // Comments, doctypes, processing instructions.
            return Vec::new();
        };

        match ElementKind::from_tag(&tag) {
            ElementKind::Heading(level) => vec![DocNode::Paragraph(Paragraph::new(
                ParagraphStyle::Heading(level),
                vec![Run::plain(inner_text(node))],
            ))],
            ElementKind::Paragraph => self.paragraph(node),
            ElementKind::List => self.list(node),
            ElementKind::Image => resolve_image(self, node),
            ElementKind::Code => vec![DocNode::Paragraph(Paragraph::new(
                ParagraphStyle::CodeBlock,
                vec![Run::mono(encode_code_text(&inner_text(node)))],
            ))],
            ElementKind::Table => vec![DocNode::Table(self.table(node))],
            ElementKind::Other => {
                if node.children.borrow().is_empty() {
                    debug!(%tag, "skipping childless unrecognized element");
                    Vec::new()
                } else {
                    // Transparent container: recurse with the same handler.
                    let children = node.children.borrow().clone();
                    children.iter().flat_map(|c| self.visit(c)).collect()
                }
            }
        }
    }

    /// `<p>`: an image-only paragraph becomes an image placement; anything
    /// else goes through inline-run processing. Paragraphs that end up with
    /// zero runs are dropped to avoid empty visual gaps.
    fn paragraph(&mut self, node: &Handle) -> Vec<DocNode> {
        let children = node.children.borrow().clone();
        if children.len() == 1 && element_name(&children[0]).as_deref() == Some("img") {
            return resolve_image(self, &children[0]);
        }

        let runs = self.inline_runs(node);
        if runs.is_empty() {
            Vec::new()
        } else {
            vec![DocNode::Paragraph(Paragraph::new(ParagraphStyle::Body, runs))]
        }
    }

    /// `<ul>`/`<ol>`: one list-item paragraph per `li` descendant. Lists are
    /// flattened; nested items get no extra indentation level.
    fn list(&mut self, node: &Handle) -> Vec<DocNode> {
        descendants_named(node, "li")
            .iter()
            .map(|item| {
                let mut runs = self.inline_runs(item);
                if runs.is_empty() {
                    runs = vec![Run::plain(inner_text(item))];
                }
                DocNode::Paragraph(Paragraph::new(ParagraphStyle::ListItem, runs))
            })
            .collect()
    }

    /// Iterate an element's direct children and produce text runs.
    ///
    /// Only five child shapes are recognized as inline-formatting carriers;
    /// any other element is ignored at this level (no recursion). An inline
    /// image inside a text-bearing paragraph cannot be expressed as a run
    /// and is dropped with a diagnostic.
    pub(crate) fn inline_runs(&mut self, node: &Handle) -> Vec<Run> {
        let mut runs = Vec::new();

        for child in node.children.borrow().iter() {
            if let NodeData::Text { contents } = &child.data {
                let text = contents.borrow().to_string();
                if !text.trim().is_empty() {
                    runs.push(Run::plain(text));
                }
                continue;
            }

            match element_name(child).as_deref() {
                Some("strong" | "b") => runs.push(Run::bold(inner_text(child))),
                Some("em" | "i") => runs.push(Run::italic(inner_text(child))),
                Some("code") => runs.push(Run::mono(inner_text(child))),
                Some("img") => {
                    warn!("inline image inside a text paragraph cannot be embedded, dropping");
                    self.warnings.push(
                        "inline image inside a text paragraph was dropped (runs are text-only)"
                            .to_owned(),
                    );
                }
                _ => {}
            }
        }

        runs
    }

    /// `<table>`: one row per `tr`, one cell per `td`/`th`. The first row is
    /// always bold, matching the "first row is a header" assumption even for
    /// tables without `th` cells.
    fn table(&mut self, node: &Handle) -> Table {
        let mut rows = Vec::new();

        for (row_index, tr) in descendants_named(node, "tr").iter().enumerate() {
            let cells = cell_elements(tr)
                .iter()
                .map(|cell| Cell {
                    text: inner_text(cell),
                    bold: row_index == 0 || element_name(cell).as_deref() == Some("th"),
                })
                .collect();
            rows.push(cells);
        }

        Table { rows }
    }
}

/// Code blocks carry the text as it appeared in the HTML source: the
/// parser's entity decoding is reversed, so `&lt;` stays literal in the
/// output document.
fn encode_code_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `td` and `th` descendants of a row, in document order.
fn cell_elements(tr: &Handle) -> Vec<Handle> {
    fn collect(node: &Handle, out: &mut Vec<Handle>) {
        for child in node.children.borrow().iter() {
            if matches!(element_name(child).as_deref(), Some("td" | "th")) {
                out.push(child.clone());
            }
            collect(child, out);
        }
    }
    let mut out = Vec::new();
    collect(tr, &mut out);
    out
}
