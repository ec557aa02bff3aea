//! Progress-callback trait for per-file conversion events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::BatchConfigBuilder::progress_callback`] to receive events
//! as the batch walks each stage directory and dispatches each file.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a terminal progress bar, a log file, or a GUI without
//! the library knowing anything about how the host application communicates.
//! The batch itself is single-threaded, so implementations are invoked
//! strictly in order; the trait is still `Send + Sync` so an `Arc` of it can
//! be shared with whatever is rendering the events.
//!
//! # Example
//!
//! ```rust
//! use docx2txt::{BatchConfig, BatchProgressCallback, Strategy};
//! use std::path::Path;
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     converted: AtomicUsize,
//! }
//!
//! impl BatchProgressCallback for CountingCallback {
//!     fn on_file_converted(&self, input: &Path, _strategy: Strategy) {
//!         let done = self.converted.fetch_add(1, Ordering::SeqCst) + 1;
//!         eprintln!("{} done ({} so far)", input.display(), done);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { converted: AtomicUsize::new(0) });
//!
//! let config = BatchConfig::builder()
//!     .progress_callback(counter as Arc<dyn BatchProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::batch::Strategy;
use crate::summary::BatchSummary;
use std::path::Path;
use std::sync::Arc;

/// Called by the batch as it walks directories and dispatches files.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait BatchProgressCallback: Send + Sync {
    /// Called when the walker enters a stage directory.
    fn on_dir_start(&self, dir: &Path) {
        let _ = dir;
    }

    /// Called when a configured stage directory does not exist or cannot be
    /// read. The run continues with the next directory.
    fn on_dir_missing(&self, dir: &Path) {
        let _ = dir;
    }

    /// Called just before a conversion attempt, after the skip check passed.
    fn on_file_start(&self, input: &Path, output: &Path) {
        let _ = (input, output);
    }

    /// Called when a file was converted, with the strategy that succeeded.
    fn on_file_converted(&self, input: &Path, strategy: Strategy) {
        let _ = (input, strategy);
    }

    /// Called when a file was skipped because its output already exists.
    fn on_file_skipped(&self, output: &Path) {
        let _ = output;
    }

    /// Called when every applicable strategy failed for a file.
    ///
    /// `error` is the human-readable description of the last failure.
    fn on_file_failed(&self, input: &Path, error: &str) {
        let _ = (input, error);
    }

    /// Called once after the last directory has been processed.
    fn on_batch_complete(&self, summary: &BatchSummary) {
        let _ = summary;
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::BatchConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        dirs: AtomicUsize,
        converted: AtomicUsize,
        skipped: AtomicUsize,
        failed: AtomicUsize,
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_dir_start(&self, _dir: &Path) {
            self.dirs.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_converted(&self, _input: &Path, _strategy: Strategy) {
            self.converted.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_skipped(&self, _output: &Path) {
            self.skipped.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_failed(&self, _input: &Path, _error: &str) {
            self.failed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        let p = PathBuf::from("data/scenarios/a.docx");
        cb.on_dir_start(p.parent().unwrap());
        cb.on_dir_missing(p.parent().unwrap());
        cb.on_file_start(&p, &p.with_extension("txt"));
        cb.on_file_converted(&p, Strategy::Tool);
        cb.on_file_skipped(&p.with_extension("txt"));
        cb.on_file_failed(&p, "some error");
        cb.on_batch_complete(&BatchSummary::default());
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            dirs: AtomicUsize::new(0),
            converted: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        };

        let dir = PathBuf::from("stage");
        let a = dir.join("a.docx");
        let b = dir.join("b.wps");

        tracker.on_dir_start(&dir);
        tracker.on_file_start(&a, &a.with_extension("txt"));
        tracker.on_file_converted(&a, Strategy::Parser);
        tracker.on_file_skipped(&b.with_extension("txt"));
        tracker.on_file_failed(&b, "tool exited with 1");

        assert_eq!(tracker.dirs.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.converted.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.skipped.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.failed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BatchProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_dir_start(Path::new("stage"));
        cb.on_batch_complete(&BatchSummary::default());
    }
}
