//! CLI binary for pdf2img.
//!
//! A thin shim over the library crate. The output contract is strict: exactly
//! one line of JSON on stdout regardless of outcome, exit code 0 iff `ok`.
//! Logs go to stderr so they can never corrupt the JSON line. Argument-parse
//! failures therefore go through `try_parse` and are mapped to the same
//! report shape instead of clap's default stderr error + exit 2.
//!
//! One carve-out from the JSON-always rule: `--help` and `--version` keep
//! their conventional behaviour (text output, exit 0). They are explicit
//! requests for tool information, not conversion invocations.

use clap::error::ErrorKind;
use clap::Parser;
use pdf2img::{convert, ConversionReport, ConversionRequest};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pdf2img <input_pdf> <output_dir> <max_pages> <dpi>";

const AFTER_HELP: &str = r#"EXAMPLES:
  # Render up to 20 pages at 200 DPI
  pdf2img document.pdf pages/ 20 200

  # Junk numeric arguments fall back to defaults (cap 50, 200 DPI)
  pdf2img document.pdf pages/ lots high

OUTPUT:
  One line of JSON on stdout:
    {"ok": bool, "page_count": int, "rendered": [path, ...], "error": string}
  Page images are written as output_dir/page-001.jpg, page-002.jpg, …
  Exit code is 0 when ok is true, 1 otherwise.

LIMITS:
  max_pages is clamped to 1–50, dpi to 72–600. A zero-page PDF is a
  successful run with an empty rendered list.
"#;

/// Convert a PDF into a bounded set of JPEG page images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2img",
    version,
    about = "Convert a PDF into a bounded set of JPEG page images",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path of the PDF to convert.
    input_pdf: String,

    /// Directory receiving the page images (created if absent).
    output_dir: String,

    /// Page cap, clamped to 1–50; non-numeric falls back to 50.
    #[arg(allow_hyphen_values = true)]
    max_pages: String,

    /// Rendering DPI, clamped to 72–600; non-numeric falls back to 200.
    #[arg(allow_hyphen_values = true)]
    dpi: String,

    /// Enable DEBUG-level tracing logs on stderr.
    #[arg(short, long, env = "PDF2IMG_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // --help / --version keep their conventional behaviour.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            let report = ConversionReport {
                error: USAGE.to_string(),
                ..Default::default()
            };
            println!("{}", report.to_json());
            return ExitCode::FAILURE;
        }
    };

    // stdout carries the JSON line; all logging goes to stderr.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let report = convert(&ConversionRequest {
        input_path: cli.input_pdf,
        output_dir: cli.output_dir,
        max_pages: cli.max_pages,
        dpi: cli.dpi,
    });

    println!("{}", report.to_json());

    if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
