//! Pipeline stages for PDF-to-JPEG conversion.
//!
//! Each submodule implements exactly one transformation step, so each is
//! independently testable and the rendering backend could be swapped without
//! touching the encoder.
//!
//! ## Data flow
//!
//! ```text
//! path ──▶ render ──▶ encode
//!          (pdfium)   (JPEG q86)
//! ```
//!
//! 1. [`render`] — bind the pdfium engine, open the document, rasterise one
//!    page at a time at the effective scale
//! 2. [`encode`] — JPEG-encode each bitmap and write it atomically to disk

pub mod encode;
pub mod render;
