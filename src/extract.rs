//! Extraction entry points.
//!
//! [`extract`] and [`extract_with_config`] run the whole pipeline against
//! files on disk. [`decode_document`] stops before the write and hands the
//! payload back in memory. That is the variant to use when the response body
//! came off the network and never touched the file system.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::{DecodedPayload, ExtractionReport};
use crate::pipeline::{decode, input, schema, write};
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extract the payload of `input_path` into `output_path`.
///
/// Uses every other default of [`ExtractionConfig`]: atomic replacement of
/// the output and no PDF signature check.
///
/// # Errors
/// Each pipeline step has its own variant: [`ExtractError::Read`],
/// [`ExtractError::Parse`], [`ExtractError::Schema`],
/// [`ExtractError::Decode`] and [`ExtractError::Write`]. Steps before the
/// write never touch `output_path`.
///
/// # Example
/// ```rust,no_run
/// let report = json2pdf::extract("response.json", "out.pdf")?;
/// eprintln!("wrote {} bytes", report.decoded_len);
/// # Ok::<(), json2pdf::ExtractError>(())
/// ```
pub fn extract(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<ExtractionReport, ExtractError> {
    let config = ExtractionConfig::builder()
        .input_path(input_path.as_ref())
        .output_path(output_path.as_ref())
        .build()?;
    extract_with_config(&config)
}

/// Run the full pipeline as described by `config`.
pub fn extract_with_config(config: &ExtractionConfig) -> Result<ExtractionReport, ExtractError> {
    let start = Instant::now();
    info!(
        "Starting extraction: {} → {}",
        config.input_path.display(),
        config.output_path.display()
    );

    // ── Step 1: Read + parse ─────────────────────────────────────────────
    let doc = input::read_document(&config.input_path)?;

    // ── Step 2-3: Locate + decode ────────────────────────────────────────
    let payload = decode_value(&doc)?;
    drop(doc);

    let looks_like_pdf = payload.looks_like_pdf();
    if config.require_pdf {
        decode::ensure_pdf(&payload)?;
    } else if !looks_like_pdf && has_pdf_extension(&config.output_path) {
        warn!(
            "Payload does not start with %PDF- but is being written to {}",
            config.output_path.display()
        );
    }

    // ── Step 4: Write ────────────────────────────────────────────────────
    write::write_payload(&config.output_path, &payload.bytes, config.write_policy)?;

    let report = ExtractionReport {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        request_id: payload.envelope.request_id,
        status_code: payload.envelope.status_code,
        encoded_len: payload.encoded_len,
        decoded_len: payload.bytes.len(),
        looks_like_pdf,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Extraction complete: {} bytes in {}ms",
        report.decoded_len, report.duration_ms
    );
    Ok(report)
}

/// Parse, locate and decode an in-memory response body.
pub fn decode_document(json: &[u8]) -> Result<DecodedPayload, ExtractError> {
    let doc = input::parse_document(json, Path::new("<memory>"))?;
    decode_value(&doc)
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn decode_value(doc: &Value) -> Result<DecodedPayload, ExtractError> {
    let located = schema::locate_payload(doc)?;

    let env = &located.envelope;
    if let Some(ref id) = env.request_id {
        debug!("Response request_id: {}", id);
    }
    if !env.is_success() {
        warn!(
            "Upstream service reported status {}: {}",
            env.status_code.as_deref().unwrap_or("?"),
            env.message_english.as_deref().unwrap_or("(no message)")
        );
    }

    decode::decode_payload(located)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
