//! Configuration for a batch conversion run.
//!
//! All behaviour is controlled through [`BatchConfig`], built via its
//! [`BatchConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to construct test fixtures pointed at temporary directories while the CLI
//! keeps the fixed defaults.
//!
//! The directory list and extension set are deliberately *not* exposed on the
//! CLI: the tool is a one-shot utility for a fixed dataset layout, and the
//! defaults below are that layout. Library callers (and tests) may still
//! override them through the builder.

use crate::error::BatchError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// The fixed stage directories of the case-document dataset, in processing
/// order. Each stage groups the documents produced before one phase of a
/// case workflow.
pub const DEFAULT_STAGE_DIRS: [&str; 4] = [
    "data/scenarios/1、立案前材料",
    "data/scenarios/2、刑拘前材料",
    "data/scenarios/3、报捕前材料",
    "data/scenarios/4、起诉前材料",
];

/// Source extensions recognised as convertible, in grouping order.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["docx", "wps"];

/// Configuration for a batch conversion run.
///
/// Built via [`BatchConfig::builder()`] or using [`BatchConfig::default()`].
///
/// # Example
/// ```rust
/// use docx2txt::BatchConfig;
///
/// let config = BatchConfig::builder()
///     .stage_dir("data/incoming")
///     .tool("pandoc")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct BatchConfig {
    /// Ordered list of stage directories to walk. Default:
    /// [`DEFAULT_STAGE_DIRS`]. A missing directory is a warning, never an
    /// error; partially populated datasets are normal.
    pub stage_dirs: Vec<PathBuf>,

    /// Source extensions to collect, without the leading dot, matched
    /// case-sensitively. Default: [`DEFAULT_EXTENSIONS`].
    ///
    /// Candidates are grouped by extension in this order within each
    /// directory, so all `.docx` files in a directory are attempted before
    /// any `.wps` file.
    pub extensions: Vec<String>,

    /// Extension of the derived output file, without the leading dot.
    /// Default: `txt`. Must differ from every source extension, otherwise
    /// outputs would become candidates on the next run.
    pub output_extension: String,

    /// Name (or path) of the external conversion tool, invoked as
    /// `<tool> <input> -o <output>` and probed with `<tool> --version`.
    /// Default: `pandoc`.
    pub tool: String,

    /// Optional progress callback receiving per-directory and per-file
    /// events during the run.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            stage_dirs: DEFAULT_STAGE_DIRS.iter().map(PathBuf::from).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            output_extension: "txt".to_string(),
            tool: "pandoc".to_string(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchConfig")
            .field("stage_dirs", &self.stage_dirs)
            .field("extensions", &self.extensions)
            .field("output_extension", &self.output_extension)
            .field("tool", &self.tool)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl BatchConfig {
    /// Create a new builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder {
            config: Self::default(),
            dirs_replaced: false,
        }
    }
}

/// Builder for [`BatchConfig`].
pub struct BatchConfigBuilder {
    config: BatchConfig,
    dirs_replaced: bool,
}

impl BatchConfigBuilder {
    /// Replace the stage directory list.
    pub fn stage_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.stage_dirs = dirs.into_iter().map(Into::into).collect();
        self.dirs_replaced = true;
        self
    }

    /// Append one stage directory. The first call replaces the defaults.
    pub fn stage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        if !self.dirs_replaced {
            self.config.stage_dirs.clear();
            self.dirs_replaced = true;
        }
        self.config.stage_dirs.push(dir.into());
        self
    }

    /// Replace the source extension list (no leading dots).
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = exts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output extension (no leading dot).
    pub fn output_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.output_extension = ext.into();
        self
    }

    /// Set the external tool name or path.
    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.config.tool = tool.into();
        self
    }

    /// Attach a progress callback.
    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BatchConfig, BatchError> {
        let c = &self.config;
        if c.stage_dirs.is_empty() {
            return Err(BatchError::InvalidConfig(
                "at least one stage directory is required".into(),
            ));
        }
        if c.extensions.is_empty() {
            return Err(BatchError::InvalidConfig(
                "at least one source extension is required".into(),
            ));
        }
        for ext in &c.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(BatchError::InvalidConfig(format!(
                    "extension '{ext}' must be non-empty and written without the leading dot"
                )));
            }
        }
        if c.output_extension.is_empty() || c.output_extension.starts_with('.') {
            return Err(BatchError::InvalidConfig(
                "output extension must be non-empty and written without the leading dot".into(),
            ));
        }
        if c.extensions.contains(&c.output_extension) {
            return Err(BatchError::InvalidConfig(format!(
                "output extension '{}' collides with a source extension; \
outputs would be re-collected as candidates",
                c.output_extension
            )));
        }
        if c.tool.is_empty() {
            return Err(BatchError::InvalidConfig("tool name must be non-empty".into()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BatchError;

    #[test]
    fn defaults_match_the_dataset_layout() {
        let c = BatchConfig::default();
        assert_eq!(c.stage_dirs.len(), 4);
        assert_eq!(c.extensions, vec!["docx", "wps"]);
        assert_eq!(c.output_extension, "txt");
        assert_eq!(c.tool, "pandoc");
    }

    #[test]
    fn builder_stage_dir_replaces_defaults_then_appends() {
        let c = BatchConfig::builder()
            .stage_dir("a")
            .stage_dir("b")
            .build()
            .unwrap();
        assert_eq!(c.stage_dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn output_extension_must_not_collide() {
        let err = BatchConfig::builder()
            .output_extension("docx")
            .build()
            .unwrap_err();
        assert!(matches!(err, BatchError::InvalidConfig(_)));
    }

    #[test]
    fn leading_dot_is_rejected() {
        let err = BatchConfig::builder()
            .extensions([".docx"])
            .build()
            .unwrap_err();
        assert!(matches!(err, BatchError::InvalidConfig(_)));
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let err = BatchConfig::builder()
            .extensions(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, BatchError::InvalidConfig(_)));
    }
}
