//! # json2pdf
//!
//! Pull the base64 document out of a JSON service response and write the
//! decoded bytes to disk.
//!
//! The PDF-generation service this tool pairs with answers with an envelope
//! like:
//!
//! ```json
//! {
//!   "error_schema":  { "status_code": "200", "error_message": { "english": "success" } },
//!   "output_schema": { "request_id": "…", "data": "JVBERi0xLjcK…" }
//! }
//! ```
//!
//! Only `output_schema.data` is required; it must be standard, padded
//! base64. Everything else is optional metadata.
//!
//! ## Pipeline Overview
//!
//! ```text
//! response.json
//!  │
//!  ├─ 1. Read    load the file, parse JSON
//!  ├─ 2. Schema  locate output_schema.data (must be a string)
//!  ├─ 3. Decode  strict RFC 4648 base64 → bytes
//!  └─ 4. Write   temp file + rename over out.pdf
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use json2pdf::extract;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = extract("response.json", "out.pdf")?;
//!     eprintln!("{} bytes, pdf: {}", report.decoded_len, report.looks_like_pdf);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `json2pdf` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ExtractionConfig, ExtractionConfigBuilder, WritePolicy, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
pub use error::{ExtractError, Step};
pub use extract::{decode_document, extract, extract_with_config};
pub use output::{DecodedPayload, Envelope, ExtractionReport};
