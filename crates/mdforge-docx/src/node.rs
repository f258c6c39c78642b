//! Target document object graph and unit conversion.

/// EMUs per pixel at the fixed 96 DPI assumption (914400 EMU/inch ÷ 96).
pub const EMU_PER_PIXEL: i64 = 9525;

/// Maximum printable width: 6.5 inches, the usable width of a letter page
/// with standard margins.
pub const MAX_WIDTH_EMU: i64 = 5_943_600;

/// Fixed footprint used for SVG image parts, where the intrinsic size is not
/// recomputed from content.
pub const DEFAULT_SVG_EXTENT: Extent = Extent {
    width_emu: 5_486_400,
    height_emu: 3_200_400,
};

/// Fallback pixel size reported for raster payloads too short to carry a
/// header.
const FALLBACK_PNG_SIZE: (u32, u32) = (800, 600);

/// Physical size of an embedded image in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width_emu: i64,
    pub height_emu: i64,
}

impl Extent {
    /// Convert pixel dimensions to EMUs at 96 DPI, scaling down uniformly
    /// when the width exceeds the maximum printable width.
    #[must_use]
    pub fn from_pixels(width_px: u32, height_px: u32) -> Self {
        let width_emu = i64::from(width_px) * EMU_PER_PIXEL;
        let height_emu = i64::from(height_px) * EMU_PER_PIXEL;

        if width_emu > MAX_WIDTH_EMU {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let scaled_height =
                (height_emu as f64 * MAX_WIDTH_EMU as f64 / width_emu as f64).round() as i64;
            Self {
                width_emu: MAX_WIDTH_EMU,
                height_emu: scaled_height,
            }
        } else {
            Self {
                width_emu,
                height_emu,
            }
        }
    }
}

/// Read intrinsic pixel dimensions from a PNG byte stream.
///
/// The two dimension fields sit at fixed offsets after the 8-byte signature
/// and the IHDR chunk header: width at bytes 16–19, height at bytes 20–23,
/// both big-endian. Inputs shorter than 24 bytes yield the 800×600 fallback.
#[must_use]
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    if bytes.len() < 24 {
        return FALLBACK_PNG_SIZE;
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

/// A span of formatted text. Runs are text-only; a run never carries an
/// image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub mono: bool,
}

impl Run {
    /// Unformatted run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            mono: false,
        }
    }

    /// Bold run.
    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    /// Italic run.
    #[must_use]
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    /// Monospace run.
    #[must_use]
    pub fn mono(text: impl Into<String>) -> Self {
        Self {
            mono: true,
            ..Self::plain(text)
        }
    }
}

/// Paragraph-level styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    #[default]
    Body,
    /// Heading level 1–4.
    Heading(u8),
    /// Bulleted list item (lists are flattened to a single level).
    ListItem,
    CodeBlock,
}

/// A paragraph holding zero or more runs. Invariant: paragraphs hold only
/// text runs; embedded images always occupy their own [`DocNode::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Paragraph with a given style and runs.
    #[must_use]
    pub fn new(style: ParagraphStyle, runs: Vec<Run>) -> Self {
        Self { style, runs }
    }

    /// Body paragraph with a single plain run.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ParagraphStyle::Body, vec![Run::plain(text)])
    }
}

/// One table cell: entity-decoded text plus a bold flag (header cells and
/// the whole first row are bold).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub bold: bool,
}

/// A table as rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
}

/// Binary format of an embedded image part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Svg,
}

/// An embedded image with its binary payload and computed extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
    pub extent: Extent,
    /// Display name carried into the drawing properties.
    pub name: String,
}

/// A node of the target document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Paragraph(Paragraph),
    Table(Table),
    Image(Image),
}
