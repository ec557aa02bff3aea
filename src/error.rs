//! Error types for the docx2txt library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`BatchError`] — **Fatal**: the batch cannot run at all (no conversion
//!   capability present, invalid configuration). Returned as
//!   `Err(BatchError)` from [`crate::batch::run_batch`] before any file is
//!   touched.
//!
//! * [`FileError`] — **Non-fatal**: one candidate file failed (tool exited
//!   non-zero, document would not parse) but every other file is fine.
//!   Recorded in [`crate::summary::BatchSummary`] so callers can inspect the
//!   per-file report after the run rather than losing the whole batch to one
//!   bad document.
//!
//! The separation encodes the propagation policy: no per-file error ever
//! aborts the batch, and no probe failure ever raises past the prober.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the docx2txt library.
///
/// Per-file failures use [`FileError`] and are stored in
/// [`crate::summary::BatchSummary`] rather than propagated here.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Neither the external tool nor the built-in parser is available.
    ///
    /// Raised once at startup, before any directory is scanned.
    #[error(
        "no conversion capability available: '{tool}' was not found on PATH \
and the built-in .docx parser is not compiled in.\n\
Install one of:\n\
  1. pandoc: https://pandoc.org/installing.html\n\
  2. rebuild docx2txt with the `docx` feature (enabled by default)"
    )]
    NoConverterAvailable { tool: String },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single candidate file.
///
/// The batch always continues past a `FileError`; the file is counted as
/// failed and re-attempted on the next run since no failure state persists.
#[derive(Debug, Error)]
pub enum FileError {
    /// The external tool ran but exited non-zero.
    #[error("'{tool}' exited with {status}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
    },

    /// The external tool could not be spawned at all.
    ///
    /// Distinct from [`FileError::ToolFailed`] only for logging; both feed
    /// the same failure counter.
    #[error("'{tool}' could not be spawned: {detail}")]
    ToolUnavailable { tool: String, detail: String },

    /// The built-in parser could not read or parse the document.
    #[error("failed to parse document: {detail}")]
    ParseFailed { detail: String },

    /// The extracted text could not be written to the output path.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool path is unavailable and no fallback exists for this extension.
    #[error("no fallback converter for '.{extension}' files")]
    NoFallback { extension: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_converter_display_names_the_tool() {
        let e = BatchError::NoConverterAvailable {
            tool: "pandoc".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("pandoc"), "got: {msg}");
        assert!(msg.contains("docx"), "got: {msg}");
    }

    #[test]
    fn no_fallback_display() {
        let e = FileError::NoFallback {
            extension: "wps".into(),
        };
        assert!(e.to_string().contains(".wps"));
    }

    #[test]
    fn write_failed_preserves_source() {
        use std::error::Error as _;
        let e = FileError::WriteFailed {
            path: PathBuf::from("/tmp/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/tmp/out.txt"));
        assert!(e.source().is_some());
    }
}
