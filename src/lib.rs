//! # docx2txt
//!
//! Batch-convert office documents (`.docx`, `.wps`) to plain-text files.
//!
//! ## Why this crate?
//!
//! A case-document dataset arrives as a fixed set of stage directories full
//! of `.docx` and `.wps` files. Downstream tooling wants plain UTF-8 text,
//! one sibling `.txt` per document. pandoc does the best job when it is
//! installed; when it is not (or when it chokes on a particular file), the
//! built-in `docx-rs` parser extracts paragraph text so a run never blocks
//! on a missing external dependency.
//!
//! ## Pipeline Overview
//!
//! ```text
//! stage dirs
//!  │
//!  ├─ 1. Probe    check pandoc (`--version`) and the compiled-in parser
//!  ├─ 2. Scan     list *.docx / *.wps per directory (missing dir = warning)
//!  ├─ 3. Dispatch skip if output exists, else tool, else parser fallback
//!  └─ 4. Report   converted / skipped / failed totals
//! ```
//!
//! Execution is single-threaded, synchronous, and blocking throughout. The
//! skip-if-exists check runs before any conversion attempt, so re-running
//! the whole batch is idempotent: existing outputs are never overwritten or
//! re-derived, whatever their content.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docx2txt::{run_batch, BatchConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BatchConfig::default();
//!     let summary = run_batch(&config)?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docx2txt` binary (clap + anyhow + tracing-subscriber + indicatif) |
//! | `docx`  | on      | In-process `.docx` fallback via `docx-rs` |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! docx2txt = { version = "0.3", default-features = false, features = ["docx"] }
//! ```
//!
//! Without `docx` and without pandoc on PATH there is no conversion
//! capability at all; [`run_batch`] then aborts with installation guidance
//! before touching any file.
//!
//! ## Known limitations
//!
//! No timeout is applied to the tool subprocess — a hung pandoc hangs the
//! run. The parser fallback extracts body paragraphs only (no tables,
//! headers, or footnotes) and supports `.docx` but not `.wps`.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod probe;
pub mod progress;
pub mod summary;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{output_path_for, run_batch, run_with_capabilities, Strategy};
pub use config::{BatchConfig, BatchConfigBuilder, DEFAULT_EXTENSIONS, DEFAULT_STAGE_DIRS};
pub use error::{BatchError, FileError};
pub use probe::Capabilities;
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
pub use summary::{BatchSummary, FailedFile};
