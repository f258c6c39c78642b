//! PDF rendering bridge.

use mdforge_diagrams::BridgeError;

/// External HTML-to-PDF rasterizer, typically a headless browser behind a
/// process boundary. `&mut self` mirrors the diagram bridge: one shared
/// rendering context, calls strictly sequential.
pub trait PdfRenderer {
    /// Render a standalone HTML page to PDF bytes.
    fn render_pdf(&mut self, html: &str) -> Result<Vec<u8>, BridgeError>;
}
