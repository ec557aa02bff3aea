//! Batch orchestration: probe once, walk each stage directory, dispatch
//! each candidate file, and account for every outcome.
//!
//! Execution is strictly sequential and blocking. Each file is processed to
//! completion (converted, skipped, or failed) before the next is considered,
//! and every per-file error is downgraded to a counter increment plus a log
//! line — re-running the batch is always safe because existing outputs are
//! never overwritten.

use crate::config::BatchConfig;
use crate::error::{BatchError, FileError};
use crate::pipeline::{scan, tool};
use crate::probe::Capabilities;
use crate::summary::BatchSummary;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which strategy produced an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The external tool (`pandoc` by default).
    Tool,
    /// The built-in docx parser.
    Parser,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Tool => f.write_str("external tool"),
            Strategy::Parser => f.write_str("built-in parser"),
        }
    }
}

/// Probe the environment and run the whole batch.
///
/// This is the primary entry point for the library.
///
/// # Returns
/// `Ok(BatchSummary)` on completion, even if some files failed
/// (check `summary.failed`).
///
/// # Errors
/// Returns `Err(BatchError)` only when no conversion capability is available
/// at startup; in that case no file has been touched.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let capabilities = Capabilities::probe(config);
    run_with_capabilities(config, capabilities)
}

/// Run the batch with pre-determined capabilities.
///
/// Split out from [`run_batch`] so callers (and tests) can inject the
/// capability pair instead of probing the real environment.
pub fn run_with_capabilities(
    config: &BatchConfig,
    capabilities: Capabilities,
) -> Result<BatchSummary, BatchError> {
    if !capabilities.any() {
        return Err(BatchError::NoConverterAvailable {
            tool: config.tool.clone(),
        });
    }

    if capabilities.tool {
        info!(tool = config.tool.as_str(), "converting with the external tool");
    } else {
        info!(
            tool = config.tool.as_str(),
            "external tool not found, converting with the built-in parser"
        );
    }

    let mut summary = BatchSummary::default();

    for dir in &config.stage_dirs {
        if let Some(ref cb) = config.progress_callback {
            cb.on_dir_start(dir);
        }

        let candidates = match scan::scan_stage_dir(dir, &config.extensions) {
            Ok(candidates) => candidates,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    warn!(dir = %dir.display(), "stage directory missing, continuing");
                } else {
                    warn!(dir = %dir.display(), error = %e, "stage directory unreadable, continuing");
                }
                if let Some(ref cb) = config.progress_callback {
                    cb.on_dir_missing(dir);
                }
                continue;
            }
        };

        info!(dir = %dir.display(), candidates = candidates.len(), "processing stage directory");

        for input in candidates {
            summary.discovered += 1;
            let output = output_path_for(&input, &config.output_extension);

            // The skip check runs before any conversion attempt: re-running
            // the batch never overwrites or re-derives existing output.
            if output.exists() {
                debug!(output = %output.display(), "output exists, skipping");
                summary.record_skipped();
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_skipped(&output);
                }
                continue;
            }

            if let Some(ref cb) = config.progress_callback {
                cb.on_file_start(&input, &output);
            }
            info!(input = %input.display(), output = %output.display(), "converting");

            match convert_file(&input, &output, capabilities, config) {
                Ok(strategy) => {
                    summary.record_converted();
                    if let Some(ref cb) = config.progress_callback {
                        cb.on_file_converted(&input, strategy);
                    }
                }
                Err(e) => {
                    warn!(input = %input.display(), error = %e, "conversion failed");
                    if let Some(ref cb) = config.progress_callback {
                        cb.on_file_failed(&input, &e.to_string());
                    }
                    summary.record_failure(input, e.to_string());
                }
            }
        }
    }

    info!(
        converted = summary.converted,
        skipped = summary.skipped,
        failed = summary.failed,
        "batch complete"
    );
    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(&summary);
    }

    Ok(summary)
}

/// Derive the output path: same directory, final extension replaced.
pub fn output_path_for(input: &Path, output_extension: &str) -> PathBuf {
    input.with_extension(output_extension)
}

/// Try the tool path, then the parser fallback for supported extensions.
///
/// The tool error is preserved when no fallback applies, since it is the
/// more informative of the two.
fn convert_file(
    input: &Path,
    output: &Path,
    capabilities: Capabilities,
    config: &BatchConfig,
) -> Result<Strategy, FileError> {
    let mut tool_error: Option<FileError> = None;

    if capabilities.tool {
        match tool::convert_with_tool(&config.tool, input, output) {
            Ok(()) => return Ok(Strategy::Tool),
            Err(e) => {
                warn!(input = %input.display(), error = %e, "tool strategy failed, trying fallback");
                // A failed tool run may leave a partial output behind, which
                // would satisfy the skip check on the next run.
                let _ = fs::remove_file(output);
                tool_error = Some(e);
            }
        }
    }

    #[cfg(feature = "docx")]
    if capabilities.parser && has_extension(input, crate::pipeline::parser::SUPPORTED_EXTENSION) {
        return match crate::pipeline::parser::convert_with_parser(input, output) {
            Ok(()) => Ok(Strategy::Parser),
            Err(e) => {
                let _ = fs::remove_file(output);
                Err(e)
            }
        };
    }

    Err(tool_error.unwrap_or_else(|| FileError::NoFallback {
        extension: input
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_string(),
    }))
}

#[cfg_attr(not(feature = "docx"), allow(dead_code))]
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(extension)
}
