//! Error types for the pdf2img library.
//!
//! Every variant is caught at the driver boundary and flattened into a plain
//! string in [`crate::report::ConversionReport::error`] — no typed error ever
//! crosses the process boundary. The enum still exists so that internal code
//! propagates failures with `?` instead of an unstructured catch-all, and so
//! tests can assert on specific failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// All failures a conversion run can hit after argument parsing.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Validation ────────────────────────────────────────────────────────
    /// Input path or output directory was empty after trimming.
    #[error("missing input path or output dir")]
    MissingPaths,

    // ── I/O ───────────────────────────────────────────────────────────────
    /// Could not create the output directory.
    #[error("failed to create output dir '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write an encoded page to disk.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── PDF engine ────────────────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error("failed to bind to pdfium library: {0}")]
    PdfiumBindingFailed(String),

    /// pdfium could not open the input as a document.
    #[error("failed to open PDF '{path}': {detail}")]
    OpenFailed { path: PathBuf, detail: String },

    /// pdfium returned an error rasterising a specific page.
    #[error("rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── Encoding ──────────────────────────────────────────────────────────
    /// JPEG encoding failed for a specific page.
    #[error("JPEG encoding failed for page {page}: {source}")]
    EncodeFailed {
        page: usize,
        #[source]
        source: image::ImageError,
    },
}
