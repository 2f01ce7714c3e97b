//! Schema: find the base64 payload at `output_schema.data`.
//!
//! Only that one path is checked. Any other key in the document is ignored,
//! except the envelope metadata (`request_id`, `error_schema`), which is
//! picked up when present and well-typed and skipped silently otherwise.

use crate::error::ExtractError;
use crate::output::Envelope;
use serde_json::Value;

const OUTPUT_SCHEMA: &str = "output_schema";
const PAYLOAD: &str = "output_schema.data";

/// The payload text and the metadata around it, borrowed from the document.
#[derive(Debug)]
pub struct Located<'a> {
    pub data: &'a str,
    pub envelope: Envelope,
}

/// Locate `output_schema.data` and require it to be a string.
pub fn locate_payload(doc: &Value) -> Result<Located<'_>, ExtractError> {
    let root = doc.as_object().ok_or_else(|| ExtractError::Schema {
        field: OUTPUT_SCHEMA,
        detail: format!(
            "cannot be looked up: document root is {}, expected an object",
            json_type(doc)
        ),
    })?;

    let output = root.get(OUTPUT_SCHEMA).ok_or_else(|| ExtractError::Schema {
        field: OUTPUT_SCHEMA,
        detail: "is missing".into(),
    })?;
    let output = output.as_object().ok_or_else(|| ExtractError::Schema {
        field: OUTPUT_SCHEMA,
        detail: format!("is {}, expected an object", json_type(output)),
    })?;

    let data = output.get("data").ok_or_else(|| ExtractError::Schema {
        field: PAYLOAD,
        detail: "is missing".into(),
    })?;
    let data = data.as_str().ok_or_else(|| ExtractError::Schema {
        field: PAYLOAD,
        detail: format!("is {}, expected a string", json_type(data)),
    })?;

    Ok(Located {
        data,
        envelope: envelope_of(doc),
    })
}

fn envelope_of(doc: &Value) -> Envelope {
    let text = |pointer: &str| {
        doc.pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_owned)
    };
    Envelope {
        request_id: text("/output_schema/request_id"),
        status_code: text("/error_schema/status_code"),
        message_english: text("/error_schema/error_message/english"),
        message_indonesian: text("/error_schema/error_message/indonesian"),
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
