//! Result types: what a run found in the document and what it wrote.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Status code the generating service uses for success.
pub const SUCCESS_STATUS: &str = "200";

/// Optional metadata carried by the service response around the payload.
///
/// Every field is read leniently. A missing or mistyped value is `None`
/// and never fails extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// `output_schema.request_id`
    pub request_id: Option<String>,
    /// `error_schema.status_code`
    pub status_code: Option<String>,
    /// `error_schema.error_message.english`
    pub message_english: Option<String>,
    /// `error_schema.error_message.indonesian`
    pub message_indonesian: Option<String>,
}

impl Envelope {
    /// `false` only when the service explicitly reported a non-200 status.
    pub fn is_success(&self) -> bool {
        self.status_code
            .as_deref()
            .is_none_or(|code| code == SUCCESS_STATUS)
    }
}

/// A payload decoded in memory, before anything is written.
#[derive(Debug, Clone)]
pub struct DecodedPayload {
    /// Raw decoded bytes.
    pub bytes: Vec<u8>,
    /// Length of the base64 text the bytes came from.
    pub encoded_len: usize,
    /// Metadata found next to the payload.
    pub envelope: Envelope,
}

impl DecodedPayload {
    pub fn looks_like_pdf(&self) -> bool {
        crate::pipeline::decode::looks_like_pdf(&self.bytes)
    }
}

/// Summary of a successful extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub request_id: Option<String>,
    pub status_code: Option<String>,
    /// Characters of base64 text in `output_schema.data`.
    pub encoded_len: usize,
    /// Bytes written to `output_path`.
    pub decoded_len: usize,
    /// Whether the payload starts with the `%PDF-` signature.
    pub looks_like_pdf: bool,
    /// Wall-clock time for the whole run.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_status_is_success() {
        assert!(Envelope::default().is_success());
    }

    #[test]
    fn envelope_status_codes() {
        let ok = Envelope {
            status_code: Some("200".into()),
            ..Envelope::default()
        };
        let failed = Envelope {
            status_code: Some("500".into()),
            ..Envelope::default()
        };
        assert!(ok.is_success());
        assert!(!failed.is_success());
    }

    #[test]
    fn report_serialises_to_json() {
        let report = ExtractionReport {
            input_path: PathBuf::from("response.json"),
            output_path: PathBuf::from("out.pdf"),
            request_id: Some("req-1".into()),
            status_code: None,
            encoded_len: 8,
            decoded_len: 5,
            looks_like_pdf: false,
            duration_ms: 1,
        };
        let json = serde_json::to_value(&report).expect("serialise");
        assert_eq!(json["output_path"], "out.pdf");
        assert_eq!(json["decoded_len"], 5);
        assert_eq!(json["request_id"], "req-1");
        assert!(json["status_code"].is_null());
    }
}
