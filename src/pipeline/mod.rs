//! Pipeline stages for document-to-text conversion.
//!
//! Each submodule implements exactly one step. Keeping stages separate makes
//! each independently testable and lets the dispatcher combine them without
//! any stage knowing about counters or callbacks.
//!
//! ## Data Flow
//!
//! ```text
//! scan ──▶ tool ──▶ parser
//! (list)   (pandoc) (docx-rs, .docx only)
//! ```
//!
//! 1. [`scan`]   — list the candidate files of one stage directory, grouped
//!    by extension
//! 2. [`tool`]   — invoke the external converter as a blocking subprocess
//! 3. [`parser`] — extract paragraph text in-process with `docx-rs`; only
//!    compiled with the `docx` feature

pub mod scan;
pub mod tool;

#[cfg(feature = "docx")]
pub mod parser;
