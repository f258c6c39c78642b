//! Diagram extraction and rendering for mdforge.
//!
//! This crate owns the diagram half of the conversion pipeline:
//! - [`extract_diagrams`]: scans raw markdown for fenced `mermaid` blocks and
//!   replaces each with a `{{DIAGRAM_<id>}}` placeholder token
//! - [`DiagramRenderer`]: bridge trait to the external renderer (SVG) and
//!   raster converter (PNG); [`render_all`] drives it one diagram at a time
//! - [`resolve_inline`] / [`resolve_to_files`]: replace placeholder tokens in
//!   generated HTML with image references
//!
//! Rendering failures degrade per diagram (error SVG, missing PNG) and are
//! reported as warnings; they never abort the pipeline.
//!
//! # Example
//!
//! ```
//! use mdforge_diagrams::extract_diagrams;
//!
//! let markdown = "# Title\n\n```mermaid\ngraph TD\n  A --> B\n```\n";
//! let (modified, records) = extract_diagrams(markdown);
//! assert_eq!(records.len(), 1);
//! assert!(modified.contains(&format!("{{{{DIAGRAM_{}}}}}", records[0].id)));
//! ```

mod bridge;
mod consts;
mod extract;
mod record;
mod resolve;

pub use bridge::{BridgeError, DiagramRenderer, render_all};
pub use consts::{RASTER_HEIGHT, RASTER_WIDTH};
pub use extract::extract_diagrams;
pub use record::{DiagramRecord, placeholder_token, svg_file_name};
pub use resolve::{resolve_inline, resolve_to_files};
