//! CLI binary for docx2txt.
//!
//! A thin shim over the library crate that wires up logging, the terminal
//! progress callback, and the final summary. The directory list and
//! extension set are fixed (see `BatchConfig` defaults); the CLI only
//! controls verbosity and presentation.

use anyhow::{Context, Result};
use clap::Parser;
use docx2txt::{run_batch, BatchConfig, BatchProgressCallback, BatchSummary, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a spinner anchored at the bottom of the
/// terminal plus one log line per directory and per file. The total file
/// count is unknown up front (directories are scanned as the run reaches
/// them), so the spinner tracks a running position rather than a bar.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {pos} files  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
        bar.set_style(style);
        bar.set_prefix("Converting");
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_dir_start(&self, dir: &Path) {
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&dir.display().to_string())
        ));
        self.bar.set_message(dir.display().to_string());
    }

    fn on_dir_missing(&self, dir: &Path) {
        self.bar.println(format!(
            "  {} missing directory: {}",
            cyan("⚠"),
            dim(&dir.display().to_string())
        ));
    }

    fn on_file_start(&self, input: &Path, _output: &Path) {
        self.bar.set_message(
            input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
    }

    fn on_file_converted(&self, input: &Path, strategy: Strategy) {
        self.bar.println(format!(
            "  {} {}  {}",
            green("✓"),
            input.display(),
            dim(&format!("({strategy})")),
        ));
        self.bar.inc(1);
    }

    fn on_file_skipped(&self, output: &Path) {
        self.bar.println(format!(
            "  {} exists, skipping {}",
            dim("↷"),
            dim(&output.display().to_string()),
        ));
        self.bar.inc(1);
    }

    fn on_file_failed(&self, input: &Path, error: &str) {
        let msg = truncate_error(error);
        self.bar.println(format!(
            "  {} {}  {}",
            red("✗"),
            input.display(),
            red(&msg),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        self.bar.finish_and_clear();

        if summary.is_clean() {
            eprintln!(
                "{} {} converted, {} skipped",
                green("✔"),
                bold(&summary.converted.to_string()),
                summary.skipped,
            );
        } else {
            eprintln!(
                "{} {} converted, {} skipped, {} failed",
                if summary.converted == 0 && summary.skipped == 0 {
                    red("✘")
                } else {
                    cyan("⚠")
                },
                bold(&summary.converted.to_string()),
                summary.skipped,
                red(&summary.failed.to_string()),
            );
            for f in &summary.failures {
                eprintln!("   {} {}: {}", red("✗"), f.path.display(), dim(&f.error));
            }
        }
    }
}

/// Truncate very long error messages to keep output tidy.
///
/// Counts characters, not bytes: error messages embed dataset paths full of
/// multibyte CJK file names, so a byte-offset cut could land mid-character.
fn truncate_error(error: &str) -> String {
    const MAX_CHARS: usize = 80;
    if error.chars().count() > MAX_CHARS {
        let cut: String = error.chars().take(MAX_CHARS - 1).collect();
        format!("{cut}\u{2026}")
    } else {
        error.to_string()
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert everything under the fixed stage directories
  docx2txt

  # Quiet run (errors only)
  docx2txt --quiet

  # Full tracing logs, no progress spinner
  docx2txt --verbose --no-progress

STAGE DIRECTORIES (fixed):
  data/scenarios/1、立案前材料
  data/scenarios/2、刑拘前材料
  data/scenarios/3、报捕前材料
  data/scenarios/4、起诉前材料

BEHAVIOUR:
  For each *.docx / *.wps file a sibling .txt is written (UTF-8, one line per
  paragraph). Files whose .txt already exists are skipped, never overwritten,
  so re-running is always safe. Missing stage directories are warnings.

  Conversion prefers pandoc (`pandoc <input> -o <output>`); when pandoc is
  missing or fails, .docx files fall back to the built-in parser. .wps files
  have no fallback and are counted as failed when pandoc cannot handle them.

SETUP:
  1. Install pandoc:  https://pandoc.org/installing.html
  2. Or rely on the built-in .docx parser (compiled in by default).
"#;

/// Batch-convert office documents (.docx, .wps) to plain text.
#[derive(Parser, Debug)]
#[command(
    name = "docx2txt",
    version,
    about = "Batch-convert office documents (.docx, .wps) to plain text",
    long_about = "Walk the fixed stage directories of the case-document dataset and write a \
sibling .txt for every .docx and .wps file, using pandoc when available and the built-in \
docx parser as a fallback. Existing outputs are never overwritten.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOCX2TXT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "DOCX2TXT_QUIET")]
    quiet: bool,

    /// Disable the progress spinner and per-file log lines.
    #[arg(long, env = "DOCX2TXT_NO_PROGRESS")]
    no_progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress callback is active;
    // the per-file log lines provide all the feedback that matters.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = BatchConfig::builder();
    if show_progress {
        builder = builder.progress_callback(CliProgressCallback::new());
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run the batch ────────────────────────────────────────────────────
    let summary = run_batch(&config).context("Conversion aborted")?;

    // The progress callback already printed the totals; print them here only
    // when it was disabled.
    if !show_progress && !cli.quiet {
        eprintln!("{summary}");
    }

    // Per-file failures never change the exit code; only a startup abort
    // (no converter available) exits non-zero.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_error_with_cjk_path_is_truncated_on_a_char_boundary() {
        let error = "failed to parse document: cannot read \
'data/scenarios/1、立案前材料/起诉意见书材料第一卷.docx': No such file or directory";
        let msg = truncate_error(error);
        assert!(msg.chars().count() <= 80, "got {} chars", msg.chars().count());
        assert!(msg.ends_with('\u{2026}'));
    }

    #[test]
    fn short_error_is_unchanged() {
        assert_eq!(truncate_error("'pandoc' exited with exit status: 1"),
            "'pandoc' exited with exit status: 1");
    }

    #[test]
    fn failure_callback_accepts_long_multibyte_errors() {
        let cb = CliProgressCallback::new();
        let error = "失败：".repeat(40);
        cb.on_file_failed(
            Path::new("data/scenarios/1、立案前材料/起诉意见书材料第一卷.docx"),
            &error,
        );
        cb.bar.finish_and_clear();
    }
}
