//! The conversion driver: one bounded run, one structured report.
//!
//! `convert` is total — it never returns an error and never panics. Every
//! fallible collaborator call inside [`run`] returns a tagged
//! [`ConvertError`], and the driver maps any failure uniformly onto a
//! `Finalized(Failure)` report. The run walks a fixed state machine:
//!
//! ```text
//! Init ─▶ Validated ─▶ Opened ─▶ Rendering ─▶ Finalized(Success | Failure)
//! ```
//!
//! Pre-open validation (empty paths) short-circuits to failure before any
//! filesystem or engine work; everything after the document is opened is
//! fail-fast with no retries — appropriate for a one-shot batch tool.

use crate::error::ConvertError;
use crate::params::EffectiveParams;
use crate::pipeline::render;
use crate::report::ConversionReport;
use std::path::Path;
use tracing::{info, warn};

/// One conversion request, created from process arguments and consumed once.
///
/// The numeric fields stay raw text: the CLI contract tolerates non-numeric
/// input, and [`EffectiveParams::from_raw`] owns the parse-or-default step.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Path of the PDF to convert.
    pub input_path: String,
    /// Directory receiving the page images; created recursively if absent.
    pub output_dir: String,
    /// Requested page cap, free-form text.
    pub max_pages: String,
    /// Requested resolution in DPI, free-form text.
    pub dpi: String,
}

/// Run one bounded conversion and report the outcome.
///
/// Always returns a report with either `ok == true` or a non-empty `error`;
/// pages rendered before a mid-loop failure stay on disk and remain listed
/// in `rendered`.
pub fn convert(request: &ConversionRequest) -> ConversionReport {
    let mut report = ConversionReport::default();

    // Init → Validated
    let input_path = request.input_path.trim();
    let output_dir = request.output_dir.trim();
    if input_path.is_empty() || output_dir.is_empty() {
        report.error = ConvertError::MissingPaths.to_string();
        return report;
    }

    let params = EffectiveParams::from_raw(&request.max_pages, &request.dpi);
    info!(
        "Converting '{}' → '{}' (max_pages={}, dpi={})",
        input_path, output_dir, params.max_pages, params.dpi
    );

    match run(
        Path::new(input_path),
        Path::new(output_dir),
        &params,
        &mut report,
    ) {
        Ok(()) => report.ok = true,
        Err(e) => {
            warn!("Conversion failed: {e}");
            report.error = e.to_string();
        }
    }

    report
}

/// The fallible interior of a run; `convert` maps its error to the report.
fn run(
    input_path: &Path,
    output_dir: &Path,
    params: &EffectiveParams,
    report: &mut ConversionReport,
) -> Result<(), ConvertError> {
    // Validated → Opened
    std::fs::create_dir_all(output_dir).map_err(|e| ConvertError::CreateDirFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let pdfium = render::bind_engine()?;
    let document = render::open_document(&pdfium, input_path)?;

    // Opened → Rendering
    let total_pages = document.pages().len() as usize;
    report.page_count = total_pages;
    if total_pages == 0 {
        // Zero-page PDFs are a valid, successful, degenerate case.
        return Ok(());
    }

    let limit = total_pages.min(usize::from(params.max_pages));
    render_loop(limit, report, |page_index| {
        render::render_page(&document, page_index, params.scale, output_dir)
    })?;

    info!("Rendered {}/{} pages", limit, total_pages);
    Ok(())
}

/// Render pages `0..limit` in strictly ascending order, fail-fast.
///
/// A per-page failure aborts the remaining loop immediately. Entries already
/// appended stay in `rendered` — those files are on disk and callers may want
/// to know about them — while the propagated error keeps `ok` false.
fn render_loop<F>(
    limit: usize,
    report: &mut ConversionReport,
    mut render_one: F,
) -> Result<(), ConvertError>
where
    F: FnMut(usize) -> Result<std::path::PathBuf, ConvertError>,
{
    for page_index in 0..limit {
        let output_path = render_one(page_index)?;
        report
            .rendered
            .push(output_path.to_string_lossy().into_owned());
    }
    Ok(())
}
