//! # pdf2img
//!
//! Convert a PDF document into a bounded sequence of JPEG page images.
//!
//! ## Why this crate?
//!
//! Batch pipelines that feed page images to OCR or vision models need a dumb,
//! predictable rasteriser: give it a file, a directory, a page cap, and a
//! resolution; get back a single machine-readable result saying exactly what
//! reached disk. No server, no retries, no partial-result streaming — the
//! run either completes its bounded page loop or fails fast with a reason.
//!
//! ## Pipeline overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Normalize  clamp max_pages (1–50) and dpi (72–600), defaults on junk
//!  ├─ 2. Open       pdfium opens the document, reports its page count
//!  ├─ 3. Render     min(total, max_pages) pages, ascending, one bitmap at a time
//!  ├─ 4. Encode     JPEG quality 86 → output_dir/page-NNN.jpg
//!  └─ 5. Report     one JSON line: {ok, page_count, rendered, error}
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pdf2img::{convert, ConversionRequest};
//!
//! let report = convert(&ConversionRequest {
//!     input_path: "document.pdf".into(),
//!     output_dir: "pages/".into(),
//!     max_pages: "20".into(),
//!     dpi: "200".into(),
//! });
//! println!("{}", report.to_json());
//! assert_eq!(report.ok, report.error.is_empty());
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2img` binary (clap + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2img = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod convert;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod report;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use convert::{convert, ConversionRequest};
pub use error::ConvertError;
pub use params::{parse_or_default, EffectiveParams, DEFAULT_DPI, DPI_RANGE, MAX_PAGES_CAP};
pub use report::ConversionReport;
