//! Error types for the json2pdf library.
//!
//! Every failure is fatal: the run stops at the step that failed and nothing
//! is retried. [`ExtractError`] names that step through [`ExtractError::step`],
//! and every variant's `Display` text starts with the step name so a bare
//! message printed by the CLI is enough to tell where the run stopped.

use crate::output::Envelope;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The pipeline stage an [`ExtractError`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Config,
    Read,
    Parse,
    Schema,
    Decode,
    Write,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Config => "config",
            Step::Read => "read",
            Step::Parse => "parse",
            Step::Schema => "schema",
            Step::Decode => "decode",
            Step::Write => "write",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All errors returned by the json2pdf library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file is missing or could not be read.
    #[error("read: cannot read input '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was read but is not valid JSON.
    #[error("parse: '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ── Payload errors ────────────────────────────────────────────────────
    /// The payload field is absent or has the wrong JSON type.
    #[error("schema: `{field}` {detail}")]
    Schema { field: &'static str, detail: String },

    /// The payload string is not valid standard base64.
    ///
    /// `upstream` is set when the envelope reported a non-success status;
    /// a failed service puts its error text where the payload should be.
    #[error("decode: `output_schema.data` is not valid base64: {source}{}", upstream_hint(.upstream))]
    Decode {
        #[source]
        source: base64::DecodeError,
        upstream: Option<Box<Envelope>>,
    },

    /// A PDF was required but the payload does not start with `%PDF-`.
    #[error("decode: payload is not a PDF (first bytes: {magic:?})")]
    NotAPdf { magic: Vec<u8> },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create, write, or rename into the output file.
    #[error("write: failed to write output file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("config: {0}")]
    InvalidConfig(String),
}

impl ExtractError {
    /// The step the run stopped at.
    pub fn step(&self) -> Step {
        match self {
            ExtractError::Read { .. } => Step::Read,
            ExtractError::Parse { .. } => Step::Parse,
            ExtractError::Schema { .. } => Step::Schema,
            ExtractError::Decode { .. } | ExtractError::NotAPdf { .. } => Step::Decode,
            ExtractError::Write { .. } => Step::Write,
            ExtractError::InvalidConfig(_) => Step::Config,
        }
    }
}

fn upstream_hint(upstream: &Option<Box<Envelope>>) -> String {
    match upstream {
        Some(env) => format!(
            "\nUpstream service reported status {}: {}",
            env.status_code.as_deref().unwrap_or("?"),
            env.message_english.as_deref().unwrap_or("(no message)")
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn decode_err(input: &str) -> base64::DecodeError {
        STANDARD.decode(input).expect_err("input should be rejected")
    }

    #[test]
    fn read_display_names_step_and_path() {
        let e = ExtractError::Read {
            path: PathBuf::from("response.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("read:"), "got: {msg}");
        assert!(msg.contains("response.json"));
        assert_eq!(e.step(), Step::Read);
    }

    #[test]
    fn schema_display() {
        let e = ExtractError::Schema {
            field: "output_schema.data",
            detail: "is missing".into(),
        };
        assert_eq!(e.to_string(), "schema: `output_schema.data` is missing");
        assert_eq!(e.step(), Step::Schema);
    }

    #[test]
    fn decode_display_without_upstream() {
        let e = ExtractError::Decode {
            source: decode_err("aGVs!G8="),
            upstream: None,
        };
        let msg = e.to_string();
        assert!(msg.starts_with("decode:"), "got: {msg}");
        assert!(!msg.contains("Upstream"));
    }

    #[test]
    fn decode_display_with_upstream() {
        let e = ExtractError::Decode {
            source: decode_err("Template not found"),
            upstream: Some(Box::new(Envelope {
                status_code: Some("500".into()),
                message_english: Some("Fail to generate PDF".into()),
                ..Envelope::default()
            })),
        };
        let msg = e.to_string();
        assert!(msg.contains("status 500"), "got: {msg}");
        assert!(msg.contains("Fail to generate PDF"), "got: {msg}");
    }

    #[test]
    fn not_a_pdf_is_a_decode_step() {
        let e = ExtractError::NotAPdf {
            magic: b"hello".to_vec(),
        };
        assert_eq!(e.step(), Step::Decode);
        assert!(e.to_string().contains("not a PDF"));
    }

    #[test]
    fn write_display() {
        let e = ExtractError::Write {
            path: PathBuf::from("/nope/out.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("write:"), "got: {msg}");
        assert!(msg.contains("/nope/out.pdf"));
        assert!(msg.contains("denied"));
    }
}
