//! Markdown to DOCX/PDF/HTML conversion with embedded diagram rendering.
//!
//! The pipeline extracts fenced `mermaid` blocks from raw markdown, renders
//! them through an injected [`DiagramRenderer`] bridge, converts the
//! remaining markdown to HTML, resolves diagram placeholders back into image
//! references, and dispatches on [`ExportFormat`]:
//!
//! - `Docx` — HTML tree walked into a document model, packaged as OOXML;
//! - `Html` — self-contained page with diagrams inlined as data URIs;
//! - `Pdf` — the same page handed to an injected [`PdfRenderer`] bridge;
//! - `Files` / `Pandoc` — rewritten markdown plus SVG side-files.
//!
//! Degraded diagrams and unresolvable elements never abort a conversion;
//! they surface as visible fallbacks and warnings on the
//! [`ConversionResult`].

mod convert;
mod html;
mod pdf;
mod result;

pub use convert::Converter;
pub use html::render_html;
pub use pdf::PdfRenderer;
pub use result::{ConversionResult, ExportFormat};

// Bridge contract and document model, re-exported for callers wiring up
// renderers or inspecting built trees.
pub use mdforge_diagrams::{BridgeError, DiagramRecord, DiagramRenderer};
pub use mdforge_docx::{DocNode, build_document, package_docx};
