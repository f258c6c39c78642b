//! Conversion outcome and export-format selection.

use mdforge_docx::DOCX_MIME_TYPE;

/// Target output of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Rewritten markdown plus SVG side-files in the output directory.
    Files,
    /// Same as [`ExportFormat::Files`], with a suggested pandoc invocation
    /// recorded on the warning channel.
    Pandoc,
    Docx,
    Pdf,
    Html,
}

impl ExportFormat {
    /// File extension for the produced payload.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Files | Self::Pandoc => "md",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }

    /// MIME type of the produced payload.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Files | Self::Pandoc => "text/markdown",
            Self::Docx => DOCX_MIME_TYPE,
            Self::Pdf => "application/pdf",
            Self::Html => "text/html",
        }
    }
}

/// Outcome of one conversion. Degraded elements keep `success = true` and
/// add to `warnings`; only packaging or bridge failures flip `success`.
#[derive(Debug)]
pub struct ConversionResult {
    pub success: bool,
    pub data: Option<Vec<u8>>,
    pub file_name: String,
    pub mime_type: String,
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

impl ConversionResult {
    pub(crate) fn completed(
        format: ExportFormat,
        file_stem: &str,
        data: Vec<u8>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            success: true,
            data: Some(data),
            file_name: format!("{file_stem}.{}", format.extension()),
            mime_type: format.mime_type().to_owned(),
            error: None,
            warnings,
        }
    }

    pub(crate) fn failed(
        format: ExportFormat,
        file_stem: &str,
        error: String,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            file_name: format!("{file_stem}.{}", format.extension()),
            mime_type: format.mime_type().to_owned(),
            error: Some(error),
            warnings,
        }
    }
}
