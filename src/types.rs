//! Core data model types for ingestion.
//!
//! A successful load produces an in-memory [`CsvDocument`]: an ordered list of
//! [`Column`]s derived from the header line and an ordered list of [`Row`]s,
//! every one of which was validated to have exactly one field per column.

use std::fs::File;

/// A single named column in a [`CsvDocument`].
///
/// Columns are derived once from the first logical line and never change.
/// Header names are assumed unique; uniqueness is not enforced, and name
/// lookup returns the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text identifying this column.
    pub name: String,
    /// Zero-based position within the header.
    pub index: usize,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// One validated data line: an ordered sequence of field values, one per
/// column, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// Field values in column order.
    pub values: Vec<String>,
}

impl Row {
    /// Create a row from field values.
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Returns the field at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the row holds no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// In-memory CSV document.
///
/// Created only by a successful load; columns and rows are read-only
/// afterward. For path-based loads the document also owns the backing file
/// handle, which is released by [`CsvDocument::close`] or on drop.
#[derive(Debug)]
pub struct CsvDocument {
    /// Columns in header order.
    pub columns: Vec<Column>,
    /// Validated rows in input order.
    pub rows: Vec<Row>,
    delimiter: char,
    source: Option<File>,
    closed: bool,
}

impl CsvDocument {
    /// Create a document from already-validated columns and rows.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, delimiter: char) -> Self {
        Self {
            columns,
            rows,
            delimiter,
            source: None,
            closed: false,
        }
    }

    pub(crate) fn attach_source(&mut self, file: File) {
        self.source = Some(file);
    }

    /// The delimiter this document was loaded with.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate column names in header order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the index of the first column named `name`, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the row at `index`, or `None` when out of range.
    pub fn row_at(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Looks up a cell by column header text, then by 0-based row index.
    ///
    /// Returns `None` when the column name is unknown or the row index is out
    /// of range. Lookup misses never invalidate the document.
    pub fn value_at(&self, column: &str, row: usize) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.value_at_index(idx, row)
    }

    /// Looks up a cell by 0-based column and row position.
    pub fn value_at_index(&self, column: usize, row: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)
    }

    /// Releases the backing file handle and all owned text storage.
    ///
    /// Idempotent: closing an already-closed document is a no-op. After
    /// closing, all lookups return `None`. Dropping an unclosed document
    /// releases the same resources implicitly.
    pub fn close(&mut self) {
        self.source.take();
        self.columns.clear();
        self.columns.shrink_to_fit();
        self.rows.clear();
        self.rows.shrink_to_fit();
        self.closed = true;
    }

    /// Returns `true` once [`CsvDocument::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
