//! Payload decoding: base64 text → raw bytes.
//!
//! Uses the RFC 4648 standard alphabet with canonical `=` padding required.
//! Whitespace, URL-safe characters and missing or extra padding are all
//! rejected rather than skipped. Non-zero unused bits in the last symbol
//! (`aGVsbG9=`) are accepted and dropped, as most decoders do.

use crate::error::ExtractError;
use crate::output::DecodedPayload;
use crate::pipeline::schema::Located;
use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine as _,
};
use tracing::debug;

/// Standard alphabet, canonical padding, lenient trailing bits.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Leading bytes of every PDF file.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Decode the located payload text.
///
/// On failure the envelope is attached to the error when the service
/// reported a non-success status, since the "payload" is then usually the
/// service's error message rather than a document.
pub fn decode_payload(located: Located<'_>) -> Result<DecodedPayload, ExtractError> {
    let Located { data, envelope } = located;

    match PAYLOAD_ENGINE.decode(data) {
        Ok(bytes) => {
            debug!("Decoded {} base64 chars → {} bytes", data.len(), bytes.len());
            Ok(DecodedPayload {
                bytes,
                encoded_len: data.len(),
                envelope,
            })
        }
        Err(source) => Err(ExtractError::Decode {
            source,
            upstream: (!envelope.is_success()).then(|| Box::new(envelope)),
        }),
    }
}

/// Whether `bytes` start with the `%PDF-` signature.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_SIGNATURE)
}

/// Fail with [`ExtractError::NotAPdf`] unless the payload is PDF-signed.
pub fn ensure_pdf(payload: &DecodedPayload) -> Result<(), ExtractError> {
    if looks_like_pdf(&payload.bytes) {
        return Ok(());
    }
    let n = payload.bytes.len().min(PDF_SIGNATURE.len());
    Err(ExtractError::NotAPdf {
        magic: payload.bytes[..n].to_vec(),
    })
}
