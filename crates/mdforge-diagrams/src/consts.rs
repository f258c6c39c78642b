//! Internal constants for diagram rendering.

/// Target width in pixels for the raster (PNG) fallback rendering.
pub const RASTER_WIDTH: u32 = 800;

/// Target height in pixels for the raster (PNG) fallback rendering.
pub const RASTER_HEIGHT: u32 = 600;

/// Minimal SVG stored when the external renderer fails, so downstream
/// consumers still see something visible instead of an empty image.
pub const ERROR_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg"><text x="10" y="20">Error rendering diagram</text></svg>"#;
