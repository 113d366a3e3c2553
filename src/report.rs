//! The single structured result a conversion run produces.
//!
//! [`ConversionReport`] is the only value that crosses the process boundary:
//! it is built up incrementally by the driver and serialised to one line of
//! JSON exactly once, after the whole bounded run finishes or fails. Partial
//! success never surfaces as an unstructured crash — every exit path leaves
//! either `ok == true` or a non-empty `error`.

use serde::{Deserialize, Serialize};

/// Outcome of one conversion run.
///
/// Field order matches the wire shape:
/// `{"ok": bool, "page_count": int, "rendered": [string...], "error": string}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Whether the run completed without error. A zero-page document is a
    /// valid, successful, degenerate case.
    pub ok: bool,
    /// Total pages the opened document reports, recorded before rendering
    /// starts. Stays 0 when the document was never opened.
    pub page_count: usize,
    /// Output file paths in strictly ascending page order. On a mid-loop
    /// failure the entries appended before the failing page are retained
    /// (with `ok` still false) so callers can see what reached disk.
    pub rendered: Vec<String>,
    /// Human-readable failure description; empty on success.
    pub error: String,
}

impl ConversionReport {
    /// Serialise to the single-line JSON wire form.
    ///
    /// Serialisation of this shape cannot fail (no maps with non-string
    /// keys, no non-finite floats), so this is infallible.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            // Unreachable for this struct; keep the one-line contract anyway.
            r#"{"ok":false,"page_count":0,"rendered":[],"error":"report serialisation failed"}"#
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let r = ConversionReport::default();
        assert!(!r.ok);
        assert_eq!(r.page_count, 0);
        assert!(r.rendered.is_empty());
        assert!(r.error.is_empty());
    }

    #[test]
    fn wire_shape_success() {
        let r = ConversionReport {
            ok: true,
            page_count: 2,
            rendered: vec!["out/page-001.jpg".into(), "out/page-002.jpg".into()],
            error: String::new(),
        };
        assert_eq!(
            r.to_json(),
            r#"{"ok":true,"page_count":2,"rendered":["out/page-001.jpg","out/page-002.jpg"],"error":""}"#
        );
    }

    #[test]
    fn wire_shape_failure() {
        let r = ConversionReport {
            error: "missing input path or output dir".into(),
            ..Default::default()
        };
        assert_eq!(
            r.to_json(),
            r#"{"ok":false,"page_count":0,"rendered":[],"error":"missing input path or output dir"}"#
        );
    }

    #[test]
    fn non_ascii_paths_pass_through() {
        let r = ConversionReport {
            ok: true,
            page_count: 1,
            rendered: vec!["简报/page-001.jpg".into()],
            error: String::new(),
        };
        let json = r.to_json();
        // serde_json emits UTF-8 directly, no \u escapes
        assert!(json.contains("简报/page-001.jpg"));
        let back: ConversionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
