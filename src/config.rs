//! Configuration types for an extraction run.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. The defaults reproduce the fixed behaviour of
//! the tool: read `response.json`, write `out.pdf`, replace the output
//! atomically, and accept any payload bytes.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Input document read when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "response.json";

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "out.pdf";

/// Configuration for one extraction.
///
/// # Example
/// ```rust
/// use json2pdf::{ExtractionConfig, WritePolicy};
///
/// let config = ExtractionConfig::builder()
///     .input_path("reply.json")
///     .output_path("invoice.pdf")
///     .write_policy(WritePolicy::Direct)
///     .build()
///     .unwrap();
/// assert_eq!(config.output_path.to_str(), Some("invoice.pdf"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// JSON document to read. Default: `response.json`.
    pub input_path: PathBuf,

    /// File the decoded payload is written to. Default: `out.pdf`.
    pub output_path: PathBuf,

    /// How the output file is replaced. Default: [`WritePolicy::Atomic`].
    pub write_policy: WritePolicy,

    /// Fail with [`ExtractError::NotAPdf`] unless the payload starts with
    /// `%PDF-`. Default: false.
    pub require_pdf: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            write_policy: WritePolicy::default(),
            require_pdf: false,
        }
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn write_policy(mut self, policy: WritePolicy) -> Self {
        self.config.write_policy = policy;
        self
    }

    pub fn require_pdf(mut self, v: bool) -> Self {
        self.config.require_pdf = v;
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// Rejects an output path that resolves to the input document. Paths
    /// are resolved against the file system at build time.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.input_path.as_os_str().is_empty() {
            return Err(ExtractError::InvalidConfig("input path is empty".into()));
        }
        if c.output_path.as_os_str().is_empty() {
            return Err(ExtractError::InvalidConfig("output path is empty".into()));
        }
        if same_path(&c.input_path, &c.output_path) {
            return Err(ExtractError::InvalidConfig(format!(
                "output path '{}' would overwrite the input document",
                c.output_path.display()
            )));
        }
        Ok(self.config)
    }
}

/// Compare resolved paths, so `../dir/response.json`, an absolute spelling
/// or a symlink all match `response.json`. Falls back to a lexical
/// comparison when either side cannot be resolved.
fn same_path(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => lexical_parts(a) == lexical_parts(b),
    }
}

/// Canonical form of `p`, or of its parent joined with the file name when
/// `p` does not exist yet.
fn resolve(p: &Path) -> Option<PathBuf> {
    if let Ok(full) = p.canonicalize() {
        return Some(full);
    }
    let name = p.file_name()?;
    let parent = match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|d| d.join(name))
}

fn lexical_parts(p: &Path) -> Vec<Component<'_>> {
    p.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

// ── Enums ────────────────────────────────────────────────────────────────

/// How the decoded bytes replace the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Write a temporary file next to the destination and rename it into
    /// place. A failed write leaves any existing output untouched. (default)
    #[default]
    Atomic,
    /// Truncate the destination and write in place. A failed write may
    /// leave a partial file behind.
    Direct,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_paths() {
        let c = ExtractionConfig::default();
        assert_eq!(c.input_path, PathBuf::from("response.json"));
        assert_eq!(c.output_path, PathBuf::from("out.pdf"));
        assert_eq!(c.write_policy, WritePolicy::Atomic);
        assert!(!c.require_pdf);
    }

    #[test]
    fn builder_sets_fields() {
        let c = ExtractionConfig::builder()
            .input_path("a.json")
            .output_path("b.bin")
            .write_policy(WritePolicy::Direct)
            .require_pdf(true)
            .build()
            .expect("valid config");
        assert_eq!(c.input_path, PathBuf::from("a.json"));
        assert_eq!(c.output_path, PathBuf::from("b.bin"));
        assert_eq!(c.write_policy, WritePolicy::Direct);
        assert!(c.require_pdf);
    }

    #[test]
    fn empty_paths_rejected() {
        let err = ExtractionConfig::builder().input_path("").build().unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
        let err = ExtractionConfig::builder().output_path("").build().unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn output_over_input_rejected() {
        let err = ExtractionConfig::builder()
            .input_path("./data/response.json")
            .output_path("data/response.json")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("overwrite the input"), "got: {err}");
    }

    #[test]
    fn output_reaching_input_through_dotdot_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        let input = dir.path().join("response.json");
        std::fs::write(&input, b"{}").expect("write input");

        let err = ExtractionConfig::builder()
            .input_path(&input)
            .output_path(dir.path().join("sub/../response.json"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)), "got: {err:?}");
    }

    #[test]
    fn sibling_output_accepted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("response.json");
        std::fs::write(&input, b"{}").expect("write input");

        ExtractionConfig::builder()
            .input_path(&input)
            .output_path(dir.path().join("out.pdf"))
            .build()
            .expect("distinct paths");
    }

    #[cfg(unix)]
    #[test]
    fn output_symlinked_to_input_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("response.json");
        std::fs::write(&input, b"{}").expect("write input");
        let link = dir.path().join("out.pdf");
        std::os::unix::fs::symlink(&input, &link).expect("symlink");

        let err = ExtractionConfig::builder()
            .input_path(&input)
            .output_path(&link)
            .build()
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)), "got: {err:?}");
    }
}
