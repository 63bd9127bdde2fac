//! Line-by-line transcode of a Markdown file into a paginated PDF.
//! Markdown syntax is not interpreted; this is plain-text wrapping into a
//! fixed-margin page flow with a built-in 12pt font.

pub mod metrics;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{AppError, AppResult};

use metrics::{
    text_width_mm, wrap_line, FONT_SIZE_PT, LINE_HEIGHT_MM, MARGIN_LEFT_MM, MARGIN_TOP_MM,
    PAGE_BREAK_MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};

const DOC_TITLE: &str = "Trends Report";
const LAYER_NAME: &str = "text";

/// The em dash is the one character the PDF font set reliably lacks;
/// other non-representable characters pass through untouched.
pub(crate) fn sanitize_line(line: &str) -> String {
    line.replace('\u{2014}', "-")
}

/// Reads `markdown_path` line by line and writes a paginated PDF to
/// `pdf_path`, overwriting any existing file.
pub fn transcode_to_pdf(markdown_path: &Path, pdf_path: &Path) -> AppResult<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOC_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Render(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_TOP_MM - LINE_HEIGHT_MM;
    let max_width = text_width_mm();

    let reader = BufReader::new(File::open(markdown_path)?);
    let mut lines_written = 0usize;

    for line in reader.lines() {
        let sanitized = sanitize_line(&line?);
        for piece in wrap_line(&sanitized, max_width) {
            if cursor_mm < PAGE_BREAK_MARGIN_MM {
                let (page, page_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                layer = doc.get_page(page).get_layer(page_layer);
                cursor_mm = PAGE_HEIGHT_MM - MARGIN_TOP_MM - LINE_HEIGHT_MM;
            }
            if !piece.is_empty() {
                layer.use_text(piece, FONT_SIZE_PT, Mm(MARGIN_LEFT_MM), Mm(cursor_mm), &font);
            }
            cursor_mm -= LINE_HEIGHT_MM;
            lines_written += 1;
        }
    }

    let file = File::create(pdf_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Render(e.to_string()))?;

    tracing::info!(
        path = %pdf_path.display(),
        lines = lines_written,
        "pdf report written"
    );

    Ok(())
}
