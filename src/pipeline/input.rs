//! Input: read the response document from disk and parse it as JSON.
//!
//! The whole file is read into memory in one call; the handle is closed
//! before parsing starts. Read and parse failures are kept apart so the
//! caller can tell a missing file from a malformed one.

use crate::error::ExtractError;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read `path` and parse its contents as a JSON document.
pub fn read_document(path: &Path) -> Result<Value, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    parse_document(&bytes, path)
}

/// Parse raw bytes as a JSON document. `origin` is only used in errors.
pub fn parse_document(bytes: &[u8], origin: &Path) -> Result<Value, ExtractError> {
    serde_json::from_slice(bytes).map_err(|source| ExtractError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_document(&dir.path().join("response.json")).unwrap_err();
        match err {
            ExtractError::Read { source, .. } => assert_eq!(source.kind(), ErrorKind::NotFound),
            other => panic!("expected Read, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_document(dir.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }), "got {err:?}");
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("response.json");
        std::fs::write(&path, b"{\"output_schema\": ").expect("write");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }), "got {err:?}");
        assert!(err.to_string().contains("response.json"));
    }

    #[test]
    fn parses_valid_document() {
        let doc = parse_document(br#"{"output_schema":{"data":""}}"#, Path::new("<memory>"))
            .expect("valid json");
        assert!(doc["output_schema"]["data"].is_string());
    }

    #[test]
    fn non_utf8_is_parse_error() {
        let err = parse_document(b"{\"a\":\"\xff\"}", Path::new("<memory>")).unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }
}
