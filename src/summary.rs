//! Run-scoped counters and the post-run report.
//!
//! One [`BatchSummary`] lives for the duration of a run and is discarded on
//! exit; nothing here persists. The invariant maintained by the dispatcher —
//! every discovered candidate ends up in exactly one of converted, skipped,
//! or failed — is checkable via [`BatchSummary::is_accounted`].

use std::fmt;
use std::path::PathBuf;

/// Counters and per-file failure details for one batch run.
#[derive(Debug, Default, Clone)]
pub struct BatchSummary {
    /// Candidate files discovered across all stage directories.
    pub discovered: usize,
    /// Files converted by either strategy during this run.
    pub converted: usize,
    /// Files skipped because their output already existed.
    pub skipped: usize,
    /// Files for which every applicable strategy failed.
    pub failed: usize,
    /// One entry per failed file, retained for the post-run report.
    pub failures: Vec<FailedFile>,
}

/// A failed candidate with a human-readable description of the last error.
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

impl BatchSummary {
    pub(crate) fn record_converted(&mut self) {
        self.converted += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_failure(&mut self, path: PathBuf, error: String) {
        self.failed += 1;
        self.failures.push(FailedFile { path, error });
    }

    /// True when every discovered candidate is accounted for:
    /// `converted + skipped + failed == discovered`.
    pub fn is_accounted(&self) -> bool {
        self.converted + self.skipped + self.failed == self.discovered
    }

    /// True when no file failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "converted: {} file(s)", self.converted)?;
        writeln!(f, "skipped:   {} file(s)", self.skipped)?;
        write!(f, "failed:    {} file(s)", self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_stay_accounted() {
        let mut s = BatchSummary::default();
        assert!(s.is_accounted());

        s.discovered = 3;
        s.record_converted();
        s.record_skipped();
        s.record_failure(PathBuf::from("a.wps"), "no fallback".into());

        assert!(s.is_accounted());
        assert!(!s.is_clean());
        assert_eq!(s.failures.len(), 1);
        assert_eq!(s.failures[0].path, PathBuf::from("a.wps"));
    }

    #[test]
    fn display_prints_three_totals() {
        let mut s = BatchSummary::default();
        s.discovered = 2;
        s.record_converted();
        s.record_skipped();

        let text = s.to_string();
        assert!(text.contains("converted: 1"));
        assert!(text.contains("skipped:   1"));
        assert!(text.contains("failed:    0"));
    }
}
