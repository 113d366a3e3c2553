//! Image encoding: `DynamicImage` → JPEG file on disk.
//!
//! Quality is fixed at 86 with no knob: one deterministic size/quality
//! trade-off chosen once for the whole tool, so identical inputs always
//! produce byte-identical outputs. The encoder emits optimised standard
//! Huffman tables; there is no separate "optimize" switch to expose.
//!
//! Writes are atomic (encode to memory, write a sibling temp file, rename
//! over the destination) so a failing page never leaves a partially-written
//! file behind, and re-running with the same output directory overwrites
//! identically-named files instead of accumulating duplicates.

use crate::error::ConvertError;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Fixed JPEG quality for every rendered page.
pub const JPEG_QUALITY: u8 = 86;

/// Encode `img` as a JPEG and write it to `path`.
///
/// `page_num` is only used to label failures (1-based).
pub fn write_jpeg(img: &DynamicImage, path: &Path, page_num: usize) -> Result<(), ConvertError> {
    // JPEG has no alpha channel; pdfium bitmaps come back RGBA.
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| ConvertError::EncodeFailed {
            page: page_num,
            source: e,
        })?;

    let tmp_path = path.with_extension("jpg.tmp");
    std::fs::write(&tmp_path, &buf).map_err(|e| ConvertError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| ConvertError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), buf.len());
    Ok(())
}
