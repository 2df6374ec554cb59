use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LoadError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the load failed).
    Error,
    /// Critical error (I/O and other infrastructure failures).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path being loaded.
    pub path: PathBuf,
    /// Delimiter used for the load.
    pub delimiter: char,
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of validated data rows.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] path={} delim={:?} columns={} rows={}",
            ctx.path.display(),
            ctx.delimiter,
            stats.columns,
            stats.rows
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        eprintln!(
            "[load][{:?}] path={} delim={:?} err={}",
            severity,
            ctx.path.display(),
            ctx.delimiter,
            error
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        eprintln!(
            "[ALERT][load][{:?}] path={} delim={:?} err={}",
            severity,
            ctx.path.display(),
            ctx.delimiter,
            error
        );
    }
}

/// Appends load events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} ok path={} delim={:?} columns={} rows={}",
            unix_ts(),
            ctx.path.display(),
            ctx.delimiter,
            stats.columns,
            stats.rows
        ));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} delim={:?} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            ctx.delimiter,
            error
        ));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} delim={:?} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            ctx.delimiter,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
