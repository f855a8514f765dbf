//! Export of generated notes to downloadable artifacts: a plain-text buffer
//! and a paginated A4 PDF.

use std::io::BufWriter;

use anyhow::Context;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const FONT_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 6.0;

const MAX_LINE_CHARS: usize = 95;
const LINES_PER_PAGE: usize =
    ((PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) / LINE_HEIGHT_MM) as usize;

/// The plain-text artifact is the notes byte-for-byte.
pub fn notes_to_text(notes: &str) -> Vec<u8> {
    notes.as_bytes().to_vec()
}

/// Renders the notes into a paginated PDF, one text block per input line in
/// order, wrapping lines that overrun the page width.
///
/// The document is written through a temporary file and read back as bytes;
/// the file is removed when the handle drops.
pub fn notes_to_pdf(notes: &str) -> anyhow::Result<Vec<u8>> {
    let pages = paginate(notes, MAX_LINE_CHARS, LINES_PER_PAGE);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Detailed Notes",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow::anyhow!("Failed to load builtin PDF font: {e}"))?;

    let mut page_refs = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        page_refs.push(doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"));
    }

    for (lines, (page, layer)) in pages.iter().zip(page_refs) {
        let layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;

        for line in lines {
            if !line.is_empty() {
                layer.use_text(line.clone(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            }
            y -= LINE_HEIGHT_MM;
        }
    }

    let mut tmp_file = tempfile::NamedTempFile::new().context("Failed to create temp file")?;
    doc.save(&mut BufWriter::new(tmp_file.as_file_mut()))
        .map_err(|e| anyhow::anyhow!("Failed to write PDF: {e}"))?;

    let bytes = std::fs::read(tmp_file.path()).context("Failed to read PDF back")?;

    Ok(bytes)
}

/// Splits notes into pages of wrapped lines. Every input line produces at
/// least one output line, and line order is preserved across wrapping and
/// page breaks.
pub fn paginate(notes: &str, max_chars: usize, lines_per_page: usize) -> Vec<Vec<String>> {
    let mut lines = Vec::new();
    for line in notes.split('\n') {
        wrap_line(line, max_chars, &mut lines);
    }

    let mut pages = Vec::new();
    for chunk in lines.chunks(lines_per_page.max(1)) {
        pages.push(chunk.to_vec());
    }
    if pages.is_empty() {
        pages.push(Vec::new());
    }

    pages
}

fn wrap_line(line: &str, max_chars: usize, out: &mut Vec<String>) {
    if line.chars().count() <= max_chars {
        out.push(line.to_string());
        return;
    }

    let before = out.len();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }

    // a long run of pure whitespace still counts as one (empty) line
    if out.len() == before {
        out.push(String::new());
    }
}
