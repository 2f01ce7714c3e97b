//! CLI binary for json2pdf.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ExtractionConfig` and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use json2pdf::{
    extract_with_config, ExtractError, ExtractionConfig, WritePolicy, DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Decode ./response.json into ./out.pdf
  json2pdf

  # Explicit paths
  json2pdf -i reply.json -o invoice.pdf

  # Refuse anything that is not a PDF
  json2pdf --require-pdf

  # Machine-readable summary
  json2pdf --json > report.json

INPUT SHAPE:
  { "output_schema": { "data": "<base64>" } }
  Other keys are ignored. `data` must be standard base64 with padding.

EXIT STATUS:
  0 on success; 1 on any failure. The message names the failing step:
  read, parse, schema, decode or write.
"#;

/// Extract the base64 payload of a JSON response into a file.
#[derive(Parser, Debug)]
#[command(
    name = "json2pdf",
    version,
    about = "Extract the base64 payload of a JSON response into a file",
    long_about = "Read a JSON response document, decode the base64 string at \
`output_schema.data`, and write the raw bytes to the output file. With no \
arguments reads `response.json` and writes `out.pdf` in the current directory.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// JSON response document to read.
    #[arg(short, long, env = "JSON2PDF_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// File to write the decoded payload to.
    #[arg(short, long, env = "JSON2PDF_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Truncate and write the output in place instead of temp file + rename.
    #[arg(long, env = "JSON2PDF_DIRECT_WRITE")]
    direct_write: bool,

    /// Fail unless the decoded payload starts with `%PDF-`.
    #[arg(long, env = "JSON2PDF_REQUIRE_PDF")]
    require_pdf: bool,

    /// Print the extraction report as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "JSON2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "JSON2PDF_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // WARN by default: the summary line covers what INFO would say.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run extraction ───────────────────────────────────────────────────
    let report = extract_with_config(&config).map_err(with_step)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise report")?
        );
    } else if !cli.quiet {
        eprintln!(
            "{} {} bytes  →  {}  {}",
            green("✔"),
            report.decoded_len,
            bold(&report.output_path.display().to_string()),
            dim(&format!("{}ms", report.duration_ms)),
        );
        if let Some(ref id) = report.request_id {
            eprintln!("   {}", dim(&format!("request_id {id}")));
        }
    }

    Ok(())
}

/// Map CLI args to `ExtractionConfig`.
fn build_config(cli: &Cli) -> Result<ExtractionConfig> {
    let policy = if cli.direct_write {
        WritePolicy::Direct
    } else {
        WritePolicy::Atomic
    };

    ExtractionConfig::builder()
        .input_path(&cli.input)
        .output_path(&cli.output)
        .write_policy(policy)
        .require_pdf(cli.require_pdf)
        .build()
        .context("Invalid configuration")
}

/// Lead the diagnostic with the step that failed.
fn with_step(e: ExtractError) -> anyhow::Error {
    let step = e.step();
    anyhow::Error::new(e).context(format!("Extraction failed at the {step} step"))
}
