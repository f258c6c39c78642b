//! Thin helpers over the html5ever DOM.
//!
//! The tree builder needs only four things from the parsed tree: element
//! names, attribute lookup, ordered children, and text content. Entity
//! decoding happens once during parsing, so text read from the DOM is
//! already decoded.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// A parsed HTML fragment.
///
/// Holds the document root alongside the body children: dropping the last
/// handle to the root iteratively clears every descendant's child list, so
/// the root must stay alive for as long as the children are walked.
pub struct ParsedHtml {
    _root: Handle,
    children: Vec<Handle>,
}

impl ParsedHtml {
    /// Ordered children of the `<body>` element.
    #[must_use]
    pub fn body_children(&self) -> &[Handle] {
        &self.children
    }
}

/// Parse an HTML fragment.
///
/// Fragments are wrapped in a document shell first so html5ever applies its
/// usual tree construction (and entity decoding) regardless of input shape.
#[must_use]
pub fn parse_body(html: &str) -> ParsedHtml {
    let wrapped = if html.to_ascii_lowercase().contains("<html") {
        html.to_owned()
    } else {
        format!("<!doctype html><html><head><meta charset=\"utf-8\"></head><body>{html}</body></html>")
    };

    let dom: RcDom = parse_document(RcDom::default(), html5ever::ParseOpts::default()).one(wrapped);

    let mut children = Vec::new();
    if !collect_body_children(&dom.document, &mut children) {
        children = dom.document.children.borrow().clone();
    }
    ParsedHtml {
        _root: dom.document,
        children,
    }
}

fn collect_body_children(node: &Handle, out: &mut Vec<Handle>) -> bool {
    if let NodeData::Element { name, .. } = &node.data
        && name.local.as_ref().eq_ignore_ascii_case("body")
    {
        out.extend(node.children.borrow().iter().cloned());
        return true;
    }
    for child in node.children.borrow().iter() {
        if collect_body_children(child, out) {
            return true;
        }
    }
    false
}

/// Lowercased element name, or `None` for non-element nodes.
#[must_use]
pub fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_ascii_lowercase()),
        _ => None,
    }
}

/// Attribute value by (case-insensitive) name.
#[must_use]
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref().eq_ignore_ascii_case(name))
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Concatenated text content of a node and all its descendants.
#[must_use]
pub fn inner_text(node: &Handle) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        push_text(child, out);
    }
}

/// Text of a node if it is a text node.
#[must_use]
pub fn text_content(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// Collect all descendant elements with the given name, depth-first.
#[must_use]
pub fn descendants_named(node: &Handle, name: &str) -> Vec<Handle> {
    let mut out = Vec::new();
    collect_named(node, name, &mut out);
    out
}

fn collect_named(node: &Handle, name: &str, out: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if element_name(child).as_deref() == Some(name) {
            out.push(child.clone());
        }
        collect_named(child, name, out);
    }
}
