//! OOXML packaging: serialize a [`DocNode`] tree into a `.docx` zip archive.
//!
//! Parts written: `[Content_Types].xml`, `_rels/.rels`, `word/document.xml`,
//! `word/styles.xml`, `word/numbering.xml`, `word/_rels/document.xml.rels`,
//! and one `word/media/imageN.{png,svg}` per embedded image. Image
//! relationship ids start at `rId10` so they never collide with the fixed
//! styles/numbering relationships.

use std::fmt::Write as _;
use std::io::{Cursor, Write as _};

use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::node::{DocNode, Image, ImageKind, Paragraph, ParagraphStyle, Run, Table};

/// MIME type of the produced archive.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extension URI marking an SVG blip inside a drawing.
const SVG_BLIP_EXT_URI: &str = "{28A0092B-C50C-407E-A947-70E740481C1C}";

/// First relationship id used for image parts.
const FIRST_IMAGE_REL: usize = 10;

/// Errors surfaced by packaging. Everything upstream of packaging degrades
/// in place; only archive assembly can fail.
#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("i/o error while packaging document: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error while packaging document: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Serialize a document tree into `.docx` bytes.
pub fn package_docx(nodes: &[DocNode]) -> Result<Vec<u8>, DocxError> {
    let images: Vec<&Image> = nodes
        .iter()
        .filter_map(|n| match n {
            DocNode::Image(img) => Some(img),
            _ => None,
        })
        .collect();

    debug!(nodes = nodes.len(), images = images.len(), "packaging document");

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types(&images).as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml(nodes).as_bytes())?;

    zip.start_file("word/styles.xml", options)?;
    zip.write_all(STYLES_XML.as_bytes())?;

    zip.start_file("word/numbering.xml", options)?;
    zip.write_all(NUMBERING_XML.as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", options)?;
    zip.write_all(document_rels(&images).as_bytes())?;

    for (index, image) in images.iter().enumerate() {
        zip.start_file(format!("word/media/{}", media_name(index, image)), options)?;
        zip.write_all(&image.bytes)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn media_name(index: usize, image: &Image) -> String {
    let ext = match image.kind {
        ImageKind::Png => "png",
        ImageKind::Svg => "svg",
    };
    format!("image{}.{ext}", index + 1)
}

fn content_types(images: &[&Image]) -> String {
    let mut extra = String::new();
    if images.iter().any(|i| i.kind == ImageKind::Png) {
        extra.push_str(r#"<Default Extension="png" ContentType="image/png"/>"#);
    }
    if images.iter().any(|i| i.kind == ImageKind::Svg) {
        extra.push_str(r#"<Default Extension="svg" ContentType="image/svg+xml"/>"#);
    }
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            "{extra}",
            r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
            r#"<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>"#,
            "</Types>",
        ),
        extra = extra
    )
}

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    "</Relationships>",
);

fn document_rels(images: &[&Image]) -> String {
    let mut out = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>"#,
    ));
    for (index, image) in images.iter().enumerate() {
        let _ = write!(
            out,
            r#"<Relationship Id="rId{rel}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/{name}"/>"#,
            rel = FIRST_IMAGE_REL + index,
            name = media_name(index, image),
        );
    }
    out.push_str("</Relationships>");
    out
}

fn document_xml(nodes: &[DocNode]) -> String {
    let mut body = String::new();
    let mut image_index = 0usize;

    for node in nodes {
        match node {
            DocNode::Paragraph(p) => body.push_str(&paragraph_xml(p)),
            DocNode::Table(t) => body.push_str(&table_xml(t)),
            DocNode::Image(img) => {
                body.push_str(&image_xml(img, image_index));
                image_index += 1;
            }
        }
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
            r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
            r#" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#,
            r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
            r#" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
            "<w:body>{body}</w:body></w:document>",
        ),
        body = body
    )
}

fn paragraph_xml(paragraph: &Paragraph) -> String {
    let ppr = match paragraph.style {
        ParagraphStyle::Body => String::new(),
        ParagraphStyle::Heading(level) => {
            format!(r#"<w:pPr><w:pStyle w:val="Heading{level}"/></w:pPr>"#)
        }
        ParagraphStyle::ListItem => concat!(
            "<w:pPr>",
            r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#,
            "</w:pPr>",
        )
        .to_owned(),
        ParagraphStyle::CodeBlock => r#"<w:pPr><w:pStyle w:val="CodeBlock"/></w:pPr>"#.to_owned(),
    };

    let runs: String = paragraph.runs.iter().map(run_xml).collect();
    format!("<w:p>{ppr}{runs}</w:p>")
}

fn run_xml(run: &Run) -> String {
    let mut rpr = String::new();
    if run.bold {
        rpr.push_str("<w:b/>");
    }
    if run.italic {
        rpr.push_str("<w:i/>");
    }
    if run.mono {
        rpr.push_str(concat!(
            r#"<w:rFonts w:ascii="Courier New" w:hAnsi="Courier New"/>"#,
            r#"<w:sz w:val="20"/>"#,
        ));
    }
    let rpr = if rpr.is_empty() {
        String::new()
    } else {
        format!("<w:rPr>{rpr}</w:rPr>")
    };

    // Code block text may span lines; each newline becomes a run break.
    let mut text_xml = String::new();
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            text_xml.push_str("<w:br/>");
        }
        let _ = write!(
            text_xml,
            r#"<w:t xml:space="preserve">{}</w:t>"#,
            xml_escape(line)
        );
    }

    format!("<w:r>{rpr}{text_xml}</w:r>")
}

fn table_xml(table: &Table) -> String {
    let mut out = String::from(concat!(
        "<w:tbl><w:tblPr>",
        r#"<w:tblW w:w="5000" w:type="pct"/>"#,
        "<w:tblBorders>",
        r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        "</w:tblBorders></w:tblPr>",
    ));

    for row in &table.rows {
        out.push_str("<w:tr>");
        for cell in row {
            let rpr = if cell.bold { "<w:rPr><w:b/></w:rPr>" } else { "" };
            let _ = write!(
                out,
                concat!(
                    "<w:tc><w:tcPr><w:tcMar>",
                    r#"<w:top w:w="100" w:type="dxa"/>"#,
                    r#"<w:left w:w="100" w:type="dxa"/>"#,
                    r#"<w:bottom w:w="100" w:type="dxa"/>"#,
                    r#"<w:right w:w="100" w:type="dxa"/>"#,
                    "</w:tcMar></w:tcPr>",
                    r#"<w:p><w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#,
                    "</w:tc>",
                ),
                rpr = rpr,
                text = xml_escape(&cell.text),
            );
        }
        out.push_str("</w:tr>");
    }

    out.push_str("</w:tbl>");
    out
}

/// One inline drawing in its own paragraph. `index` is the zero-based
/// position among image nodes, used for the relationship id and unique
/// drawing object ids.
fn image_xml(image: &Image, index: usize) -> String {
    let rel = FIRST_IMAGE_REL + index;
    let doc_pr_id = 100 + index;
    let name = xml_escape(&image.name);
    let width = image.extent.width_emu;
    let height = image.extent.height_emu;

    let blip = match image.kind {
        ImageKind::Png => format!(r#"<a:blip r:embed="rId{rel}"/>"#),
        // SVG payloads ride on the blip extension; the embed attribute still
        // names the part so consumers without SVG support see the reference.
        ImageKind::Svg => format!(
            concat!(
                r#"<a:blip r:embed="rId{rel}">"#,
                r#"<a:extLst><a:ext uri="{uri}">"#,
                r#"<asvg:svgBlip xmlns:asvg="http://schemas.microsoft.com/office/drawing/2016/SVG/main" r:embed="rId{rel}"/>"#,
                "</a:ext></a:extLst></a:blip>",
            ),
            rel = rel,
            uri = SVG_BLIP_EXT_URI,
        ),
    };

    format!(
        concat!(
            "<w:p><w:r><w:drawing>",
            r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#,
            r#"<wp:extent cx="{width}" cy="{height}"/>"#,
            r#"<wp:docPr id="{doc_pr_id}" name="{name}"/>"#,
            "<a:graphic>",
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
            "<pic:pic>",
            "<pic:nvPicPr>",
            r#"<pic:cNvPr id="{doc_pr_id}" name="{name}"/>"#,
            "<pic:cNvPicPr/>",
            "</pic:nvPicPr>",
            "<pic:blipFill>{blip}<a:stretch><a:fillRect/></a:stretch></pic:blipFill>",
            "<pic:spPr><a:xfrm>",
            r#"<a:off x="0" y="0"/><a:ext cx="{width}" cy="{height}"/>"#,
            "</a:xfrm>",
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#,
            "</pic:spPr>",
            "</pic:pic>",
            "</a:graphicData></a:graphic>",
            "</wp:inline>",
            "</w:drawing></w:r></w:p>",
        ),
        width = width,
        height = height,
        doc_pr_id = doc_pr_id,
        name = name,
        blip = blip,
    )
}

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
    r#"<w:name w:val="Normal"/>"#,
    r#"<w:rPr><w:sz w:val="22"/></w:rPr>"#,
    "</w:style>",
    r#"<w:style w:type="paragraph" w:styleId="Heading1">"#,
    r#"<w:name w:val="heading 1"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:pPr><w:spacing w:before="240" w:after="120"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:sz w:val="32"/></w:rPr>"#,
    "</w:style>",
    r#"<w:style w:type="paragraph" w:styleId="Heading2">"#,
    r#"<w:name w:val="heading 2"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:pPr><w:spacing w:before="200" w:after="100"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:sz w:val="28"/></w:rPr>"#,
    "</w:style>",
    r#"<w:style w:type="paragraph" w:styleId="Heading3">"#,
    r#"<w:name w:val="heading 3"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:pPr><w:spacing w:before="160" w:after="80"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:sz w:val="26"/></w:rPr>"#,
    "</w:style>",
    r#"<w:style w:type="paragraph" w:styleId="Heading4">"#,
    r#"<w:name w:val="heading 4"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:pPr><w:spacing w:before="120" w:after="60"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:i/><w:sz w:val="24"/></w:rPr>"#,
    "</w:style>",
    r#"<w:style w:type="paragraph" w:styleId="CodeBlock">"#,
    r#"<w:name w:val="Code Block"/><w:basedOn w:val="Normal"/>"#,
    r#"<w:pPr><w:shd w:val="clear" w:color="auto" w:fill="F2F2F2"/></w:pPr>"#,
    r#"<w:rPr><w:rFonts w:ascii="Courier New" w:hAnsi="Courier New"/><w:sz w:val="20"/></w:rPr>"#,
    "</w:style>",
    "</w:styles>",
);

const NUMBERING_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:abstractNum w:abstractNumId="1">"#,
    r#"<w:lvl w:ilvl="0">"#,
    r#"<w:start w:val="1"/>"#,
    r#"<w:numFmt w:val="bullet"/>"#,
    r#"<w:lvlText w:val="&#8226;"/>"#,
    r#"<w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>"#,
    "</w:lvl>",
    "</w:abstractNum>",
    r#"<w:num w:numId="1"><w:abstractNumId w:val="1"/></w:num>"#,
    "</w:numbering>",
);

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Cell, DEFAULT_SVG_EXTENT, Extent};
    use pretty_assertions::assert_eq;
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut out = String::new();
        part.read_to_string(&mut out).unwrap();
        out
    }

    fn part_names(bytes: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_owned).collect()
    }

    fn svg_image() -> DocNode {
        DocNode::Image(Image {
            kind: ImageKind::Svg,
            bytes: b"<svg/>".to_vec(),
            extent: DEFAULT_SVG_EXTENT,
            name: "diagram.svg".to_owned(),
        })
    }

    fn png_image() -> DocNode {
        DocNode::Image(Image {
            kind: ImageKind::Png,
            bytes: vec![0x89, b'P', b'N', b'G'],
            extent: Extent::from_pixels(100, 50),
            name: "Diagram".to_owned(),
        })
    }

    #[test]
    fn test_archive_starts_with_zip_magic() {
        let bytes = package_docx(&[DocNode::Paragraph(Paragraph::text("hi"))]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_required_parts_present() {
        let bytes = package_docx(&[DocNode::Paragraph(Paragraph::text("hi"))]).unwrap();
        let names = part_names(&bytes);
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/numbering.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.iter().any(|n| n == part), "missing {part}");
        }
    }

    #[test]
    fn test_empty_tree_packages_cleanly() {
        let bytes = package_docx(&[]).unwrap();
        let doc = read_part(&bytes, "word/document.xml");
        assert!(doc.contains("<w:body></w:body>"));
    }

    #[test]
    fn test_heading_gets_style_reference() {
        let nodes = [DocNode::Paragraph(Paragraph::new(
            ParagraphStyle::Heading(2),
            vec![Run::plain("Title")],
        ))];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains(r#"<w:pStyle w:val="Heading2"/>"#));
        assert!(doc.contains(r#"<w:t xml:space="preserve">Title</w:t>"#));
    }

    #[test]
    fn test_list_item_references_numbering() {
        let nodes = [DocNode::Paragraph(Paragraph::new(
            ParagraphStyle::ListItem,
            vec![Run::plain("item")],
        ))];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains(r#"<w:numId w:val="1"/>"#));
    }

    #[test]
    fn test_bold_italic_mono_run_properties() {
        let nodes = [DocNode::Paragraph(Paragraph::new(
            ParagraphStyle::Body,
            vec![Run::bold("b"), Run::italic("i"), Run::mono("m")],
        ))];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains("<w:b/>"));
        assert!(doc.contains("<w:i/>"));
        assert!(doc.contains(r#"<w:rFonts w:ascii="Courier New" w:hAnsi="Courier New"/>"#));
        assert!(doc.contains(r#"<w:sz w:val="20"/>"#));
    }

    #[test]
    fn test_multiline_code_run_uses_breaks() {
        let nodes = [DocNode::Paragraph(Paragraph::new(
            ParagraphStyle::CodeBlock,
            vec![Run::mono("a\nb")],
        ))];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains("<w:br/>"));
        assert!(doc.contains(r#"<w:pStyle w:val="CodeBlock"/>"#));
    }

    #[test]
    fn test_text_is_xml_escaped() {
        let nodes = [DocNode::Paragraph(Paragraph::text("a < b & c"))];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_table_serialization() {
        let nodes = [DocNode::Table(Table {
            rows: vec![
                vec![Cell {
                    text: "H".to_owned(),
                    bold: true,
                }],
                vec![Cell {
                    text: "v".to_owned(),
                    bold: false,
                }],
            ],
        })];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains(r#"<w:tblW w:w="5000" w:type="pct"/>"#));
        assert!(doc.contains(r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#));
        assert!(doc.contains(r#"<w:top w:w="100" w:type="dxa"/>"#));
        // Header cell bold, value cell not.
        assert!(doc.contains(r#"<w:rPr><w:b/></w:rPr><w:t xml:space="preserve">H</w:t>"#));
        assert!(doc.contains(r#"<w:r><w:t xml:space="preserve">v</w:t></w:r>"#));
    }

    #[test]
    fn test_png_image_part_and_relationship() {
        let bytes = package_docx(&[png_image()]).unwrap();

        let names = part_names(&bytes);
        assert!(names.iter().any(|n| n == "word/media/image1.png"));

        let rels = read_part(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Id="rId10""#));
        assert!(rels.contains(r#"Target="media/image1.png""#));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"Extension="png""#));

        let doc = read_part(&bytes, "word/document.xml");
        assert!(doc.contains(r#"<a:blip r:embed="rId10"/>"#));
        assert!(doc.contains(&format!(
            r#"<wp:extent cx="{}" cy="{}"/>"#,
            100 * crate::node::EMU_PER_PIXEL,
            50 * crate::node::EMU_PER_PIXEL,
        )));
    }

    #[test]
    fn test_svg_image_uses_blip_extension() {
        let bytes = package_docx(&[svg_image()]).unwrap();

        let doc = read_part(&bytes, "word/document.xml");
        assert!(doc.contains(SVG_BLIP_EXT_URI));
        assert!(doc.contains("asvg:svgBlip"));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"Extension="svg""#));

        let names = part_names(&bytes);
        assert!(names.iter().any(|n| n == "word/media/image1.svg"));
    }

    #[test]
    fn test_multiple_images_get_distinct_ids() {
        let bytes = package_docx(&[png_image(), svg_image()]).unwrap();

        let doc = read_part(&bytes, "word/document.xml");
        assert!(doc.contains(r#"r:embed="rId10""#));
        assert!(doc.contains(r#"r:embed="rId11""#));
        assert!(doc.contains(r#"<wp:docPr id="100""#));
        assert!(doc.contains(r#"<wp:docPr id="101""#));

        let names = part_names(&bytes);
        assert!(names.iter().any(|n| n == "word/media/image1.png"));
        assert!(names.iter().any(|n| n == "word/media/image2.svg"));
    }

    #[test]
    fn test_image_name_escaped_in_doc_pr() {
        let nodes = [DocNode::Image(Image {
            kind: ImageKind::Png,
            bytes: vec![1, 2, 3],
            extent: Extent::from_pixels(10, 10),
            name: "a \"quoted\" <name>".to_owned(),
        })];
        let doc = read_part(&package_docx(&nodes).unwrap(), "word/document.xml");
        assert!(doc.contains("a &quot;quoted&quot; &lt;name&gt;"));
    }
}
