//! Loading entrypoints.
//!
//! [`load_from_path`] and [`load_from_reader`] drive the
//! [`LineReader`](super::line::LineReader) and
//! [`split_fields`](super::fields::split_fields) over a whole input,
//! validating that every line's field count matches the header's before any
//! [`CsvDocument`] is handed out.
//!
//! Loading is strictly single-pass, synchronous, and all-or-nothing: the
//! first malformed line stops reading and nothing partially built escapes.
//! When an [`LoadObserver`](super::observability::LoadObserver) is configured,
//! path-based loads report success/failure/alerts to it.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::{Column, CsvDocument, Row};

use super::fields::split_fields;
use super::line::LineReader;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Convenience default delimiter used by [`LoadOptions::default`].
///
/// The engine itself never substitutes a delimiter; this is the caller-facing
/// default only.
pub const DEFAULT_DELIMITER: char = ',';

/// Options controlling load behavior.
///
/// Use [`Default`] for common cases (comma delimiter, no trimming, batch
/// line reading, no observer).
#[derive(Clone)]
pub struct LoadOptions {
    /// Single-character field delimiter. Must be ASCII and must not be a line
    /// terminator or backspace.
    pub delimiter: char,
    /// Strip leading/trailing whitespace from every kept field.
    pub trim_fields: bool,
    /// Treat the stream as an interactive source: every line terminator ends
    /// a line, including consecutive ones. Off for regular files, where
    /// `\r\n` sequences and blank lines collapse instead.
    pub interactive: bool,
    /// Optional observer for logging/alerts (path-based loads only).
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &self.delimiter)
            .field("trim_fields", &self.trim_fields)
            .field("interactive", &self.interactive)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            trim_fields: false,
            interactive: false,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a CSV file into an in-memory [`CsvDocument`].
///
/// The first logical line is the header: its field count becomes the required
/// count for every subsequent line, and its fields become the column names.
/// The returned document owns the backing file handle until
/// [`CsvDocument::close`] or drop.
///
/// When `options.observer` is set, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use csv_ingest::ingestion::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), csv_ingest::LoadError> {
/// let doc = load_from_path("people.csv", &LoadOptions::default())?;
/// println!("columns={} rows={}", doc.column_count(), doc.row_count());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use csv_ingest::ingestion::{load_from_path, LoadOptions, LoadSeverity, StdErrObserver};
///
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: LoadSeverity::Critical,
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert`.
/// let _err = load_from_path("does_not_exist.csv", &opts).unwrap_err();
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<CsvDocument> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
        delimiter: options.delimiter,
    };

    let result = load_path_inner(path, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(doc) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: doc.row_count(),
                    columns: doc.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn load_path_inner(path: &Path, options: &LoadOptions) -> LoadResult<CsvDocument> {
    validate_options(options)?;
    let mut reader = BufReader::new(File::open(path)?);
    let mut doc = load_validated(&mut reader, options)?;
    doc.attach_source(reader.into_inner());
    Ok(doc)
}

/// Load CSV data from any byte stream.
///
/// The stream is borrowed, not consumed: on failure it may be left positioned
/// mid-input, and the caller is responsible for closing it regardless of the
/// outcome. Raw `File`s should be wrapped in a [`BufReader`], since lines are
/// read one byte at a time.
///
/// # Examples
///
/// ```
/// use csv_ingest::ingestion::{load_from_reader, LoadOptions};
///
/// # fn main() -> Result<(), csv_ingest::LoadError> {
/// let mut input = "id,name\n1,alice\n2,bob\n".as_bytes();
/// let doc = load_from_reader(&mut input, &LoadOptions::default())?;
///
/// assert_eq!(doc.column_count(), 2);
/// assert_eq!(doc.value_at("name", 0), Some("alice"));
/// # Ok(())
/// # }
/// ```
pub fn load_from_reader<R: Read>(reader: &mut R, options: &LoadOptions) -> LoadResult<CsvDocument> {
    validate_options(options)?;
    load_validated(reader, options)
}

fn load_validated<R: Read>(reader: &mut R, options: &LoadOptions) -> LoadResult<CsvDocument> {
    let mut lines = if options.interactive {
        LineReader::interactive(reader)
    } else {
        LineReader::new(reader)
    };

    let header = lines.next_line()?.ok_or(LoadError::EmptyFile)?;
    let names = split_fields(&header, options.delimiter, options.trim_fields);
    if names.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let expected = names.len();
    let columns: Vec<Column> = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Column::new(name, index))
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    // 1-based for reporting; the header is line 1.
    let mut line_number = 1usize;
    while let Some(line) = lines.next_line()? {
        line_number += 1;
        let values = split_fields(&line, options.delimiter, options.trim_fields);
        if values.len() != expected {
            return Err(LoadError::RowCountMismatch {
                line: line_number,
                expected,
                found: values.len(),
            });
        }
        rows.push(Row::new(values));
    }

    Ok(CsvDocument::new(columns, rows, options.delimiter))
}

fn validate_options(options: &LoadOptions) -> LoadResult<()> {
    let delim = options.delimiter;
    if !delim.is_ascii() {
        return Err(LoadError::InvalidArgument {
            message: format!("delimiter {delim:?} is not a single-byte character"),
        });
    }
    if matches!(delim, '\n' | '\r' | '\x08') {
        return Err(LoadError::InvalidArgument {
            message: format!("delimiter {delim:?} collides with line-editing characters"),
        });
    }
    Ok(())
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::InvalidArgument { .. }
        | LoadError::EmptyFile
        | LoadError::RowCountMismatch { .. } => LoadSeverity::Error,
    }
}
