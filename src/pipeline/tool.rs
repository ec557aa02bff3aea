//! External-tool conversion: one blocking subprocess per file.
//!
//! The tool is invoked as `<tool> <input> -o <output>` with all stdio
//! discarded; success is exit status 0 and nothing else. No timeout is
//! applied — a hung tool hangs the run (known limitation of the one-shot
//! design, see the crate docs).

use crate::error::FileError;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Convert `input` to `output` by invoking the external tool.
///
/// A spawn error and a non-zero exit are both per-file failures; neither
/// aborts the batch.
pub fn convert_with_tool(tool: &str, input: &Path, output: &Path) -> Result<(), FileError> {
    debug!(tool, input = %input.display(), "invoking external tool");
    let status = Command::new(tool)
        .arg(input)
        .arg("-o")
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| FileError::ToolUnavailable {
            tool: tool.to_string(),
            detail: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(FileError::ToolFailed {
            tool: tool.to_string(),
            status,
        })
    }
}
