//! HTML-to-document-model conversion and OOXML packaging for mdforge.
//!
//! The centerpiece is [`build_document`]: a deterministic recursive descent
//! over a parsed HTML tree (itself produced from markdown) that yields a
//! [`DocNode`] tree of paragraphs, headings, runs, list items, tables, and
//! embedded images with unit-correct sizing. [`package_docx`] then serializes
//! that tree into a Wordprocessing OOXML container.
//!
//! Malformed or unresolvable content degrades to visible fallback paragraphs
//! and warnings; the walk never fails. Only final packaging can return an
//! error.
//!
//! # Example
//!
//! ```
//! use mdforge_docx::{build_document, package_docx};
//!
//! let output = build_document("<h1>Title</h1><p>Hello <strong>world</strong></p>", &[], None);
//! assert_eq!(output.nodes.len(), 2);
//! let bytes = package_docx(&output.nodes).unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! ```

mod builder;
mod dom;
mod image;
mod node;
mod package;

pub use builder::{BuildOutput, build_document};
pub use node::{
    Cell, DEFAULT_SVG_EXTENT, DocNode, EMU_PER_PIXEL, Extent, Image, ImageKind, MAX_WIDTH_EMU,
    Paragraph, ParagraphStyle, Run, Table, png_dimensions,
};
pub use package::{DOCX_MIME_TYPE, DocxError, package_docx};
