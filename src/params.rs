//! Parameter normalisation: raw CLI text → safe numeric ranges.
//!
//! The numeric arguments arrive as untrusted shell text. Rather than failing
//! on a typo, each field falls back to a named default and is then clamped,
//! so the tool keeps working in degraded-input scenarios while pathological
//! values (a million pages, 10 000 DPI) can never reach the renderer.

use serde::Serialize;

/// Hard upper bound on pages rendered in one run, independent of the
/// caller's requested value.
pub const MAX_PAGES_CAP: u16 = 50;

/// DPI used when the caller's value does not parse.
pub const DEFAULT_DPI: u32 = 200;

/// Minimum and maximum accepted rendering DPI.
pub const DPI_RANGE: (u32, u32) = (72, 600);

/// Parse `text` as an integer, falling back to `default` on any failure.
///
/// Total function: never fails, never panics. Leading/trailing whitespace is
/// tolerated; anything else non-numeric yields the default.
pub fn parse_or_default(text: &str, default: i64) -> i64 {
    text.trim().parse::<i64>().unwrap_or(default)
}

/// Effective rendering parameters, derived once per run.
///
/// Invariants hold for *any* input, including negative, zero, non-numeric,
/// or absurdly large text: `1 <= max_pages <= 50` and `72 <= dpi <= 600`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveParams {
    /// Pages to render at most. Range: 1–50.
    pub max_pages: u16,
    /// Rasterisation resolution. Range: 72–600.
    pub dpi: u32,
    /// Multiplicative factor relative to the PDF's native 72-DPI space.
    pub scale: f32,
}

impl EffectiveParams {
    /// Normalise raw textual `max_pages` and `dpi` values.
    pub fn from_raw(raw_max_pages: &str, raw_dpi: &str) -> Self {
        let max_pages = parse_or_default(raw_max_pages, i64::from(MAX_PAGES_CAP))
            .clamp(1, i64::from(MAX_PAGES_CAP)) as u16;
        let (dpi_min, dpi_max) = DPI_RANGE;
        let dpi = parse_or_default(raw_dpi, i64::from(DEFAULT_DPI))
            .clamp(i64::from(dpi_min), i64::from(dpi_max)) as u32;
        Self {
            max_pages,
            dpi,
            scale: dpi as f32 / 72.0,
        }
    }
}
