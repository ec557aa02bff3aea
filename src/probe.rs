//! Capability probing: which conversion strategies are available.
//!
//! Probing is advisory and failure-tolerant. A probe failure — missing
//! binary, non-zero exit, spawn error — must never raise to the caller; it
//! only toggles a boolean. The caller decides what to do when *neither*
//! capability is present (abort with installation guidance, see
//! [`crate::error::BatchError::NoConverterAvailable`]).
//!
//! The external tool is probed by spawning `<tool> --version` once at
//! startup with all stdio discarded. Parser availability is a compile-time
//! fact: the `docx` cargo feature links `docx-rs` into the binary, so there
//! is nothing to probe at runtime.

use crate::config::BatchConfig;
use std::process::{Command, Stdio};
use tracing::debug;

/// The version-query argument used to test tool availability.
const PROBE_ARG: &str = "--version";

/// Which conversion strategies this process can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The external tool responded to a version query.
    pub tool: bool,
    /// The in-process .docx parser is compiled in.
    pub parser: bool,
}

impl Capabilities {
    /// Probe the environment once for the configured tool.
    pub fn probe(config: &BatchConfig) -> Self {
        let tool = probe_tool(&config.tool);
        let parser = cfg!(feature = "docx");
        debug!(
            tool = config.tool.as_str(),
            tool_available = tool,
            parser_available = parser,
            "probed conversion capabilities"
        );
        Self { tool, parser }
    }

    /// True when at least one strategy is available.
    pub fn any(&self) -> bool {
        self.tool || self.parser
    }
}

/// Spawn `<tool> --version` and report whether it ran successfully.
///
/// Every failure mode collapses to `false`.
fn probe_tool(tool: &str) -> bool {
    Command::new(tool)
        .arg(PROBE_ARG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
