//! Output: write the decoded bytes to the destination file.
//!
//! Bytes are written verbatim in binary mode. Under [`WritePolicy::Atomic`]
//! they go to a temporary file in the destination's directory first, which is
//! then renamed over the destination, so readers see either the old file or
//! the complete new one. The temporary file is deleted on drop if the rename
//! never happens. Missing parent directories are not created.
//!
//! A symlinked destination is handled differently by the two policies.
//! `Atomic` renames over the link itself, leaving a regular file in its place
//! and the old target untouched; the new file takes the target's mode.
//! `Direct` writes through the link into its target.

use crate::config::WritePolicy;
use crate::error::ExtractError;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Write `bytes` to `path`, creating or replacing it.
pub fn write_payload(path: &Path, bytes: &[u8], policy: WritePolicy) -> Result<(), ExtractError> {
    let result = match policy {
        WritePolicy::Atomic => write_atomic(path, bytes),
        WritePolicy::Direct => std::fs::write(path, bytes),
    };
    result.map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {} ({:?})", bytes.len(), path.display(), policy);
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".json2pdf-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    copy_permissions(tmp.path(), path)?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Give the temp file the mode a plain create would have produced.
///
/// Temp files are created owner-only; an existing destination keeps its
/// mode and a new one gets 0644.
fn copy_permissions(tmp: &Path, dest: &Path) -> io::Result<()> {
    match std::fs::metadata(dest) {
        Ok(meta) if meta.is_file() => std::fs::set_permissions(tmp, meta.permissions()),
        _ => set_default_permissions(tmp),
    }
}

#[cfg(unix)]
fn set_default_permissions(tmp: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(tmp, std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_tmp: &Path) -> io::Result<()> {
    Ok(())
}
