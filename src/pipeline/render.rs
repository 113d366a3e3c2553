//! PDF rasterisation: open a document and render single pages via pdfium.
//!
//! ## Why render by scale, not fixed pixels?
//!
//! The caller specifies a DPI; each page's pixel dimensions derive from its
//! own size in PDF points (1 pt = 1/72 in) multiplied by `scale = dpi / 72`.
//! Native page aspect is always preserved — an A4 page and a landscape slide
//! in the same document each get their natural proportions.
//!
//! Pages are rendered strictly one at a time and the intermediate bitmap is
//! dropped before the next page starts, so peak memory is bounded by a single
//! page's raster buffer rather than the page count.

use crate::error::ConvertError;
use crate::pipeline::encode;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Bind to the pdfium engine.
///
/// Tries a library next to the executable first (the common deployment
/// layout), then falls back to the system library.
pub fn bind_engine() -> Result<Pdfium, ConvertError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ConvertError::PdfiumBindingFailed(format!("{e:?}")))?;
    Ok(Pdfium::new(bindings))
}

/// Open `path` as a PDF document.
///
/// The returned handle borrows the engine and is valid for the duration of
/// one conversion run; no page access may happen after it is dropped.
pub fn open_document<'a>(
    pdfium: &'a Pdfium,
    path: &Path,
) -> Result<PdfDocument<'a>, ConvertError> {
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| ConvertError::OpenFailed {
            path: path.to_path_buf(),
            detail: format!("{e:?}"),
        })?;
    info!(
        "Opened '{}': {} pages",
        path.display(),
        document.pages().len()
    );
    Ok(document)
}

/// Deterministic output filename for a 0-based page index.
///
/// 1-based, zero-padded to 3 digits: `page-001.jpg` … `page-050.jpg`.
/// The page cap keeps real indices far below the 999 naming limit.
pub fn page_file_name(page_index: usize) -> String {
    format!("page-{:03}.jpg", page_index + 1)
}

/// Rasterise one page and write it as a JPEG into `output_dir`.
///
/// Returns the path of the file created. The rendered bitmap is released
/// before returning, regardless of outcome.
pub fn render_page(
    document: &PdfDocument<'_>,
    page_index: usize,
    scale: f32,
    output_dir: &Path,
) -> Result<PathBuf, ConvertError> {
    let page_num = page_index + 1;

    let pages = document.pages();
    let page = pages
        .get(page_index as u16)
        .map_err(|e| ConvertError::RenderFailed {
            page: page_num,
            detail: format!("{e:?}"),
        })?;

    // Page size is in points; scale carries the DPI factor.
    let width_px = (page.width().value * scale).round().max(1.0) as i32;
    let height_px = (page.height().value * scale).round().max(1.0) as i32;

    let render_config = PdfRenderConfig::new()
        .set_target_width(width_px)
        .set_target_height(height_px);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| ConvertError::RenderFailed {
            page: page_num,
            detail: format!("{e:?}"),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        page_num,
        image.width(),
        image.height()
    );

    let output_path = output_dir.join(page_file_name(page_index));
    encode::write_jpeg(&image, &output_path, page_num)?;

    Ok(output_path)
}
