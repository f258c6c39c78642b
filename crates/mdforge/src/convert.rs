//! The conversion pipeline: extraction, diagram rendering, HTML generation,
//! placeholder resolution, and export-format dispatch.

use std::path::PathBuf;

use mdforge_diagrams::{
    DiagramRecord, DiagramRenderer, extract_diagrams, render_all, resolve_inline, resolve_to_files,
};
use mdforge_docx::{build_document, package_docx};
use tracing::{debug, warn};

use crate::html::{render_html, wrap_page};
use crate::pdf::PdfRenderer;
use crate::result::{ConversionResult, ExportFormat};

/// Converts markdown documents to the supported export formats.
///
/// Owns the diagram rendering bridge for the whole session; an HTML-to-PDF
/// bridge and an output directory for file-based exports are optional.
pub struct Converter {
    renderer: Box<dyn DiagramRenderer>,
    pdf_renderer: Option<Box<dyn PdfRenderer>>,
    output_dir: Option<PathBuf>,
}

impl Converter {
    /// Create a converter around a diagram rendering bridge.
    #[must_use]
    pub fn new(renderer: Box<dyn DiagramRenderer>) -> Self {
        Self {
            renderer,
            pdf_renderer: None,
            output_dir: None,
        }
    }

    /// Attach an HTML-to-PDF bridge, required for [`ExportFormat::Pdf`].
    #[must_use]
    pub fn with_pdf_renderer(mut self, pdf_renderer: Box<dyn PdfRenderer>) -> Self {
        self.pdf_renderer = Some(pdf_renderer);
        self
    }

    /// Set the directory where [`ExportFormat::Files`] and
    /// [`ExportFormat::Pandoc`] write SVG side-files.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Convert a markdown document to the requested format.
    ///
    /// `file_stem` names the output without an extension; the result carries
    /// the full file name and MIME type for the chosen format. Per-diagram
    /// and per-element degradations accumulate as warnings with
    /// `success = true`; only packaging or bridge failures produce a failed
    /// result.
    pub fn convert(
        &mut self,
        markdown: &str,
        format: ExportFormat,
        file_stem: &str,
    ) -> ConversionResult {
        let (stripped, mut records) = extract_diagrams(markdown);
        let mut warnings = render_all(self.renderer.as_mut(), &mut records);
        debug!(diagrams = records.len(), ?format, "starting conversion");

        match format {
            ExportFormat::Docx => to_docx(&stripped, &records, file_stem, warnings),
            ExportFormat::Html => {
                let page = html_page(&stripped, &records, file_stem);
                ConversionResult::completed(format, file_stem, page.into_bytes(), warnings)
            }
            ExportFormat::Pdf => self.to_pdf(&stripped, &records, file_stem, warnings),
            ExportFormat::Files => self.to_files(&stripped, &records, file_stem, warnings),
            ExportFormat::Pandoc => {
                warnings.push(format!(
                    "suggested command: pandoc {file_stem}.md -o {file_stem}.docx"
                ));
                self.to_files(&stripped, &records, file_stem, warnings)
            }
        }
    }

    fn to_pdf(
        &mut self,
        stripped: &str,
        records: &[DiagramRecord],
        file_stem: &str,
        warnings: Vec<String>,
    ) -> ConversionResult {
        let page = html_page(stripped, records, file_stem);

        let Some(pdf_renderer) = self.pdf_renderer.as_mut() else {
            return ConversionResult::failed(
                ExportFormat::Pdf,
                file_stem,
                "no PDF renderer configured".to_owned(),
                warnings,
            );
        };

        match pdf_renderer.render_pdf(&page) {
            Ok(bytes) => ConversionResult::completed(ExportFormat::Pdf, file_stem, bytes, warnings),
            Err(err) => {
                warn!(%err, "PDF rendering failed");
                ConversionResult::failed(
                    ExportFormat::Pdf,
                    file_stem,
                    format!("PDF rendering failed: {err}"),
                    warnings,
                )
            }
        }
    }

    /// File-based export rewrites the markdown itself: placeholders become
    /// image references to SVGs written in the output directory.
    fn to_files(
        &mut self,
        stripped: &str,
        records: &[DiagramRecord],
        file_stem: &str,
        warnings: Vec<String>,
    ) -> ConversionResult {
        let Some(out_dir) = self.output_dir.clone() else {
            return ConversionResult::failed(
                ExportFormat::Files,
                file_stem,
                "no output directory configured for file-based export".to_owned(),
                warnings,
            );
        };

        match resolve_to_files(stripped, records, &out_dir) {
            Ok(rewritten) => ConversionResult::completed(
                ExportFormat::Files,
                file_stem,
                rewritten.into_bytes(),
                warnings,
            ),
            Err(err) => {
                warn!(%err, "failed to write diagram side-files");
                ConversionResult::failed(
                    ExportFormat::Files,
                    file_stem,
                    format!("failed to write diagram side-files: {err}"),
                    warnings,
                )
            }
        }
    }
}

fn to_docx(
    stripped: &str,
    records: &[DiagramRecord],
    file_stem: &str,
    mut warnings: Vec<String>,
) -> ConversionResult {
    let html = render_html(stripped);

    // Side-files let the tree builder fall back to disk when a record
    // reference cannot be matched in memory.
    let svg_dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => {
            warn!(%err, "failed to create scratch directory");
            return ConversionResult::failed(
                ExportFormat::Docx,
                file_stem,
                format!("failed to create scratch directory: {err}"),
                warnings,
            );
        }
    };

    let resolved = match resolve_to_files(&html, records, svg_dir.path()) {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!(%err, "failed to write diagram side-files");
            return ConversionResult::failed(
                ExportFormat::Docx,
                file_stem,
                format!("failed to write diagram side-files: {err}"),
                warnings,
            );
        }
    };

    let output = build_document(&resolved, records, Some(svg_dir.path()));
    warnings.extend(output.warnings);

    match package_docx(&output.nodes) {
        Ok(bytes) => ConversionResult::completed(ExportFormat::Docx, file_stem, bytes, warnings),
        Err(err) => {
            warn!(%err, "document packaging failed");
            ConversionResult::failed(ExportFormat::Docx, file_stem, err.to_string(), warnings)
        }
    }
}

fn html_page(stripped: &str, records: &[DiagramRecord], file_stem: &str) -> String {
    let html = render_html(stripped);
    let resolved = resolve_inline(&html, records);
    wrap_page(file_stem, &resolved)
}
