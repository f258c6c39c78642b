//! Bridge to the external diagram renderer and raster converter.

use tracing::warn;

use crate::consts::{ERROR_SVG, RASTER_HEIGHT, RASTER_WIDTH};
use crate::record::DiagramRecord;

/// Error returned by a rendering bridge operation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct BridgeError {
    /// Human-readable failure description from the external renderer.
    pub message: String,
}

impl BridgeError {
    /// Create a bridge error from any displayable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External diagram renderer contract.
///
/// The renderer is assumed to hold mutable global state (a single shared
/// rendering context), so both operations take `&mut self` and callers must
/// issue requests one at a time. [`render_all`] does exactly that.
pub trait DiagramRenderer {
    /// Render diagram source text to SVG markup.
    fn render_svg(&mut self, source: &str, id: &str) -> Result<String, BridgeError>;

    /// Rasterize SVG markup to a base64-encoded PNG at the given pixel size.
    fn rasterize_png(&mut self, svg: &str, width: u32, height: u32)
    -> Result<String, BridgeError>;
}

/// Render every record through the bridge, sequentially in extraction order.
///
/// One attempt per diagram, no retries. An SVG failure stores a minimal
/// error SVG so the diagram stays visible downstream; a raster failure
/// independently leaves `png_base64` empty (consumers fall back to SVG).
/// Both are logged and reported as warnings, never raised.
pub fn render_all(renderer: &mut dyn DiagramRenderer, records: &mut [DiagramRecord]) -> Vec<String> {
    let mut warnings = Vec::new();

    for record in records.iter_mut() {
        match renderer.render_svg(&record.source, &record.id) {
            Ok(svg) => record.svg = svg,
            Err(err) => {
                warn!(id = %record.id, index = record.index, %err, "diagram render failed");
                warnings.push(format!("diagram {}: render failed: {err}", record.index));
                record.svg = ERROR_SVG.to_owned();
                continue;
            }
        }

        match renderer.rasterize_png(&record.svg, RASTER_WIDTH, RASTER_HEIGHT) {
            Ok(png) => record.png_base64 = Some(png),
            Err(err) => {
                warn!(id = %record.id, index = record.index, %err, "raster conversion failed");
                warnings.push(format!(
                    "diagram {}: raster conversion failed: {err}",
                    record.index
                ));
            }
        }
    }

    warnings
}
